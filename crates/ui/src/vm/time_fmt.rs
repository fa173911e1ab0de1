use chrono::Duration;

/// Elapsed time as `m:ss`, or `h:mm:ss` past the hour. Negative spans clamp to zero.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::seconds(0)), "0:00");
        assert_eq!(format_elapsed(Duration::seconds(65)), "1:05");
        assert_eq!(format_elapsed(Duration::seconds(3_725)), "1:02:05");
    }

    #[test]
    fn negative_spans_clamp_to_zero() {
        assert_eq!(format_elapsed(Duration::seconds(-5)), "0:00");
    }
}
