use crate::calendar::calendar_index::CalendarIndex;

/// One x-axis tick per month, placed halfway through the month.
///
/// Each tick is `start + (end - start) / 2` with both bounds in epoch milliseconds;
/// December ends on January 1st of the following year. Integer division truncates
/// to whole milliseconds.
///
/// ```
/// use rainfall_normals::{month_ticks, CalendarIndex, DAY_IN_MS};
///
/// let calendar = CalendarIndex::shared();
/// let ticks = month_ticks(calendar);
/// assert_eq!(ticks.len(), 12);
/// // January 16th, 12:00 UTC
/// assert_eq!(ticks[0], calendar.year_start_ms() + 15 * DAY_IN_MS + DAY_IN_MS / 2);
/// ```
pub fn month_ticks(calendar: &CalendarIndex) -> [i64; 12] {
    let mut ticks = [0i64; 12];
    for (tick, month) in ticks.iter_mut().zip(1..=12u32) {
        // month is always in 1..=12
        let bounds = calendar.month_bounds(month).unwrap_or(0..0);
        let start = calendar.boundary_ms(bounds.start);
        let end = calendar.boundary_ms(bounds.end);
        *tick = start + (end - start) / 2;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::calendar_index::DAY_IN_MS;

    #[test]
    fn test_ticks_sit_between_month_bounds() {
        let calendar = CalendarIndex::shared();
        let ticks = month_ticks(calendar);
        for (index, tick) in ticks.iter().enumerate() {
            let bounds = calendar.month_bounds(index as u32 + 1).unwrap();
            assert!(*tick > calendar.boundary_ms(bounds.start));
            assert!(*tick < calendar.boundary_ms(bounds.end));
        }
        assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_known_midpoints() {
        let calendar = CalendarIndex::shared();
        let ticks = month_ticks(calendar);
        // 31-day January: offset 15.5
        assert_eq!(
            ticks[0],
            calendar.timestamp_ms(15).unwrap() + DAY_IN_MS / 2
        );
        // 29-day February in 2000: offset 31 + 14.5
        assert_eq!(
            ticks[1],
            calendar.timestamp_ms(45).unwrap() + DAY_IN_MS / 2
        );
        // 30-day April: offset 91 + 15
        assert_eq!(ticks[3], calendar.timestamp_ms(106).unwrap());
        // December runs into January 1st, 2001
        assert_eq!(ticks[11], calendar.timestamp_ms(350).unwrap() + DAY_IN_MS / 2);
    }

    #[test]
    fn test_non_leap_february_midpoint() {
        let calendar = CalendarIndex::build(2001).unwrap();
        let ticks = month_ticks(&calendar);
        // 28-day February: offset 31 + 14
        assert_eq!(ticks[1], calendar.timestamp_ms(45).unwrap());
    }
}
