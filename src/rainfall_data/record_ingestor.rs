//! Turns dataset rows into per-day rainfall readings.
//!
//! A data row holds one month of one year: `year, month, amount_1, ..., amount_k`,
//! where field `amount_i` is day-of-month `i`. Empty fields are days without an
//! observation and come back as [`DayReading::Skip`].

use crate::rainfall_data::error::IngestError;
use crate::types::raw_record::{DayReading, ParsedRow, RawRecord};
use csv::StringRecord;

/// Delimiter used by the dataset files unless configured otherwise.
pub const DEFAULT_DELIMITER: char = ',';

/// No month has more days than this.
const MAX_DAYS_IN_MONTH: usize = 31;

/// Stateless row parser.
#[derive(Debug, Clone, Copy)]
pub struct RecordIngestor {
    delimiter: char,
}

impl Default for RecordIngestor {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl RecordIngestor {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Parses one data row into its readings.
    ///
    /// The row is read as a single CSV record with the configured delimiter, so quoted
    /// fields and `\r\n` line endings are accepted.
    ///
    /// # Errors
    ///
    /// * [`IngestError::UnsupportedDelimiter`] if the delimiter is not a single ASCII
    ///   character.
    /// * [`IngestError::MalformedRow`] if the row is not valid CSV.
    /// * [`IngestError::MalformedHeader`] if the year or month field is missing or not
    ///   a number, or the month is outside 1-12.
    /// * [`IngestError::MalformedAmount`] if a non-empty amount field is not a finite,
    ///   non-negative number.
    /// * [`IngestError::TooManyDays`] if the row carries more than 31 amount fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use rainfall_normals::{DayReading, RecordIngestor};
    ///
    /// let row = RecordIngestor::default().parse("1961,1,0.0,,\"5.0\"")?;
    /// assert_eq!(row.readings.len(), 3);
    /// assert!(matches!(row.readings[1], DayReading::Skip { day: 2, .. }));
    /// assert_eq!(row.records().map(|r| r.amount).collect::<Vec<_>>(), vec![0.0, 5.0]);
    /// # Ok::<(), rainfall_normals::IngestError>(())
    /// ```
    pub fn parse(&self, line: &str) -> Result<ParsedRow, IngestError> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(IngestError::UnsupportedDelimiter(self.delimiter))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(line.as_bytes());
        let record = match reader.records().next() {
            Some(result) => result.map_err(|e| IngestError::MalformedRow(e.to_string()))?,
            None => StringRecord::new(),
        };
        self.parse_record(&record)
    }

    /// Parses an already split CSV record laid out as `year, month, amount_1, ...`.
    pub fn parse_record(&self, record: &StringRecord) -> Result<ParsedRow, IngestError> {
        let year = parse_header_field(record.get(0), "year")?;
        let month: u32 = parse_header_field(record.get(1), "month")?;
        if !(1..=12).contains(&month) {
            return Err(IngestError::MalformedHeader {
                field: "month",
                value: month.to_string(),
            });
        }

        let readings = record
            .iter()
            .skip(2)
            .enumerate()
            .map(|(index, field)| parse_amount(year, month, index as u32 + 1, field))
            .collect::<Result<Vec<_>, _>>()?;

        if readings.len() > MAX_DAYS_IN_MONTH {
            return Err(IngestError::TooManyDays {
                year,
                month,
                found: readings.len(),
            });
        }

        Ok(ParsedRow {
            year,
            month,
            readings,
        })
    }
}

fn parse_header_field<T: std::str::FromStr>(
    field: Option<&str>,
    name: &'static str,
) -> Result<T, IngestError> {
    let raw = field.unwrap_or_default();
    raw.trim().parse().map_err(|_| IngestError::MalformedHeader {
        field: name,
        value: raw.to_string(),
    })
}

fn parse_amount(year: i32, month: u32, day: u32, field: &str) -> Result<DayReading, IngestError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(DayReading::Skip { year, month, day });
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => {
            // -0.0 passes the check above; store it as plain zero
            Ok(DayReading::Observed(RawRecord::new(year, month, day, amount.abs())))
        }
        _ => Err(IngestError::MalformedAmount {
            year,
            month,
            day,
            value: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_maps_field_position_to_day() -> Result<(), IngestError> {
        let row = RecordIngestor::default().parse("1961,3,0.0,1.5,,2.25\r\n")?;
        assert_eq!(row.year, 1961);
        assert_eq!(row.month, 3);
        assert_eq!(
            row.readings,
            vec![
                DayReading::Observed(RawRecord::new(1961, 3, 1, 0.0)),
                DayReading::Observed(RawRecord::new(1961, 3, 2, 1.5)),
                DayReading::Skip {
                    year: 1961,
                    month: 3,
                    day: 3
                },
                DayReading::Observed(RawRecord::new(1961, 3, 4, 2.25)),
            ]
        );
        assert_eq!(row.skipped(), 1);
        Ok(())
    }

    #[test]
    fn test_trailing_empty_fields_are_skips() -> Result<(), IngestError> {
        // February rows of fixed-width files pad days 29-31 with empty fields
        let mut line = String::from("1962,2");
        for _ in 0..28 {
            line.push_str(",0.1");
        }
        line.push_str(",,,");
        let row = RecordIngestor::default().parse(&line)?;
        assert_eq!(row.readings.len(), 31);
        assert_eq!(row.records().count(), 28);
        assert_eq!(row.skipped(), 3);
        Ok(())
    }

    #[test]
    fn test_custom_delimiter() -> Result<(), IngestError> {
        let row = RecordIngestor::new(';').parse("1999;12;4.0; ;0")?;
        assert_eq!(row.records().count(), 2);
        assert_eq!(row.skipped(), 1);
        Ok(())
    }

    #[test]
    fn test_quoted_fields_are_unquoted() -> Result<(), IngestError> {
        let row = RecordIngestor::default().parse("1961,1,\"0.5\",1.0,\"\"")?;
        assert_eq!(
            row.records().map(|r| r.amount).collect::<Vec<_>>(),
            vec![0.5, 1.0]
        );
        assert_eq!(row.skipped(), 1);

        let row = RecordIngestor::new(';').parse("\"1961\";\"7\";\"1,5\"");
        assert!(matches!(
            row,
            Err(IngestError::MalformedAmount { day: 1, ref value, .. }) if value == "1,5"
        ));
        Ok(())
    }

    #[test]
    fn test_unsupported_delimiter() {
        assert_eq!(
            RecordIngestor::new('§').parse("1961§1§0.5"),
            Err(IngestError::UnsupportedDelimiter('§'))
        );
    }

    #[test]
    fn test_malformed_header() {
        let ingestor = RecordIngestor::default();
        assert_eq!(
            ingestor.parse("year,1,0.0"),
            Err(IngestError::MalformedHeader {
                field: "year",
                value: "year".to_string()
            })
        );
        assert_eq!(
            ingestor.parse("1961,13,0.0"),
            Err(IngestError::MalformedHeader {
                field: "month",
                value: "13".to_string()
            })
        );
        assert_eq!(
            ingestor.parse("1961"),
            Err(IngestError::MalformedHeader {
                field: "month",
                value: String::new()
            })
        );
    }

    #[test]
    fn test_malformed_amount() {
        let ingestor = RecordIngestor::default();
        assert_eq!(
            ingestor.parse("1961,1,0.0,abc"),
            Err(IngestError::MalformedAmount {
                year: 1961,
                month: 1,
                day: 2,
                value: "abc".to_string()
            })
        );
        assert!(matches!(
            ingestor.parse("1961,1,-1.0"),
            Err(IngestError::MalformedAmount { day: 1, .. })
        ));
        assert!(matches!(
            ingestor.parse("1961,1,NaN"),
            Err(IngestError::MalformedAmount { day: 1, .. })
        ));
    }

    #[test]
    fn test_too_many_days() {
        let line = format!("1961,1{}", ",0.0".repeat(32));
        assert_eq!(
            RecordIngestor::default().parse(&line),
            Err(IngestError::TooManyDays {
                year: 1961,
                month: 1,
                found: 32
            })
        );
    }
}
