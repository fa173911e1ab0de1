/// Where a session stands, for progress bars and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based number of the question on screen (equals `total` once finished).
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub is_finished: bool,
}

impl SessionProgress {
    /// `position / total`, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.position as f64 / self.total as f64;
        fraction.clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.fraction() * 100.0).round() as u8;
        percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_uses_one_based_position() {
        let progress = SessionProgress {
            position: 1,
            total: 4,
            answered: 0,
            is_finished: false,
        };
        assert!((progress.fraction() - 0.25).abs() < f64::EPSILON);
        assert_eq!(progress.percent(), 25);
    }

    #[test]
    fn empty_total_is_zero_progress() {
        let progress = SessionProgress {
            position: 0,
            total: 0,
            answered: 0,
            is_finished: false,
        };
        assert_eq!(progress.percent(), 0);
    }
}
