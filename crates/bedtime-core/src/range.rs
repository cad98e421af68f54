use crate::angle::{angle_to_minutes, snap_to_granularity};
use crate::drag::RangeState;
use derive_more::{From, Into};
use std::fmt;
use strum::Display;

/// Minutes since midnight, snapped to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, From, Into)]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    pub fn from_angle(angle: f64) -> Self {
        Self(snap_to_granularity(angle_to_minutes(angle)))
    }

    pub fn minutes(&self) -> f64 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        (self.0 as u32 / 60) % 24
    }

    pub fn minute(&self) -> u32 {
        self.0 as u32 % 60
    }

    pub fn period(&self) -> Period {
        Period::of(*self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Period {
    Morning,
    Evening,
}

impl Period {
    /// Morning covers minutes 0..=359 only. This is not a 12 hour split: 06:00
    /// onward already reads as evening, and the boundary is kept as is.
    pub fn of(time: TimeOfDay) -> Self {
        match time.minutes() as i64 {
            0..=359 => Self::Morning,
            _ => Self::Evening,
        }
    }
}

impl RangeState {
    pub fn bed_time(&self) -> TimeOfDay {
        TimeOfDay::from_angle(self.bed_angle())
    }

    pub fn wake_time(&self) -> TimeOfDay {
        TimeOfDay::from_angle(self.wake_angle())
    }

    pub fn bed_period(&self) -> Period {
        self.bed_time().period()
    }

    pub fn wake_period(&self) -> Period {
        self.wake_time().period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_and_wake_times_from_angles() {
        let state = RangeState::new(0.0, 180.0, false);

        assert_eq!(state.bed_time().minutes(), 0.0);
        assert_eq!(state.bed_period(), Period::Morning);
        assert_eq!(state.wake_time().minutes(), 720.0);
        assert_eq!(state.wake_period(), Period::Evening);
    }

    #[test]
    fn test_minutes_are_truncated() {
        assert_eq!(TimeOfDay::from_angle(90.2).minutes(), 360.0);
        assert_eq!(TimeOfDay::from_angle(0.24).minutes(), 0.0);
        assert_eq!(TimeOfDay::from_angle(359.99).minutes(), 1439.0);
    }

    #[test]
    fn test_period_boundary_is_minute_359() {
        let cases = vec![
            (0.0, Period::Morning),
            (359.0, Period::Morning),
            (359.9, Period::Morning),
            (360.0, Period::Evening),
            (719.0, Period::Evening),
            (1439.0, Period::Evening),
        ];

        for (minutes, expected) in cases {
            assert_eq!(Period::of(TimeOfDay::from(minutes)), expected, "{minutes}");
        }
    }

    #[test]
    fn test_time_of_day_display() {
        assert_eq!(TimeOfDay::from(0.0).to_string(), "00:00");
        assert_eq!(TimeOfDay::from(445.0).to_string(), "07:25");
        assert_eq!(TimeOfDay::from_angle(345.0).to_string(), "23:00");
        assert_eq!(Period::Evening.to_string(), "Evening");
    }
}
