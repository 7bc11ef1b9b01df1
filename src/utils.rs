/// Number of metadata lines at the top of the station dataset files.
pub const DEFAULT_HEADER_LINES: usize = 4;

/// Data rows of a dataset text with their 1-based line numbers.
///
/// The first `header_lines` lines are metadata and are dropped, as are blank lines
/// (typically the trailing newline of the file).
pub fn data_rows(text: &str, header_lines: usize) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.lines()
        .enumerate()
        .skip(header_lines)
        .map(|(index, line)| (index + 1, line))
        .filter(|(line_number, line)| {
            let blank = line.trim().is_empty();
            if blank {
                log::debug!("Skipping blank line {}", line_number);
            }
            !blank
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_rows_skip_header_and_blank_lines() {
        let text = "station;Praha\nunit;mm\n\nyear,month,1,2\n1961,1,0.0,1.0\n\n1962,1,,2.0\n";
        let rows: Vec<_> = data_rows(text, DEFAULT_HEADER_LINES).collect();
        assert_eq!(rows, vec![(5, "1961,1,0.0,1.0"), (7, "1962,1,,2.0")]);
    }

    #[test]
    fn test_data_rows_without_header() {
        let rows: Vec<_> = data_rows("1961,1,0.0\r\n1962,1,1.0", 0).collect();
        assert_eq!(rows, vec![(1, "1961,1,0.0"), (2, "1962,1,1.0")]);
    }
}
