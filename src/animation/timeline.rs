use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("time step must be greater than zero")]
    ZeroStep,
}

/// Frame times `0, step, 2·step, ...` strictly below `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    duration_s: f64,
    step_s: f64,
}

impl Timeline {
    pub fn new(duration: Duration, step: Duration) -> Result<Self, TimelineError> {
        if step.is_zero() {
            return Err(TimelineError::ZeroStep);
        }
        Ok(Self {
            duration_s: duration.as_secs_f64(),
            step_s: step.as_secs_f64(),
        })
    }

    pub fn frame_count(&self) -> usize {
        (self.duration_s / self.step_s).ceil() as usize
    }

    pub fn frame_time(&self, index: usize) -> f64 {
        index as f64 * self.step_s
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.frame_count()).map(|i| self.frame_time(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hour_by_minute() {
        let tl = Timeline::new(Duration::from_secs(3600), Duration::from_secs(60)).unwrap();
        assert_eq!(tl.frame_count(), 60);
        assert_eq!(tl.frame_time(0), 0.0);
        assert_eq!(tl.frame_time(59), 3540.0);
        assert_eq!(tl.times().last(), Some(3540.0));
    }

    #[test]
    fn test_partial_last_step() {
        let tl = Timeline::new(Duration::from_secs(100), Duration::from_secs(30)).unwrap();
        let times: Vec<f64> = tl.times().collect();
        assert_eq!(times, vec![0.0, 30.0, 60.0, 90.0]);
    }

    #[test]
    fn test_empty_and_invalid() {
        let tl = Timeline::new(Duration::ZERO, Duration::from_secs(1)).unwrap();
        assert_eq!(tl.frame_count(), 0);
        assert_eq!(
            Timeline::new(Duration::from_secs(1), Duration::ZERO),
            Err(TimelineError::ZeroStep)
        );
    }
}
