//! Daily irrigation schedule: time-of-day values and next-run computation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

const MINUTES_PER_HOUR: u16 = 60;

/// A wall-clock time of day with minute precision, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Factory morning slot, `07:00`.
    pub const MORNING: Self = Self { hour: 7, minute: 0 };
    /// Factory evening slot, `19:00`.
    pub const EVENING: Self = Self { hour: 19, minute: 0 };

    /// Build a time of day, rejecting out-of-range components.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimeOfDay`] if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidTimeOfDay(format!("{hour}:{minute}")));
        }
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub fn minutes_of_day(self) -> u16 {
        u16::from(self.hour) * MINUTES_PER_HOUR + u16::from(self.minute)
    }
}

impl<T: chrono::Timelike> From<&T> for TimeOfDay {
    fn from(value: &T) -> Self {
        // Timelike guarantees hour < 24 and minute < 60.
        Self {
            hour: u8::try_from(value.hour()).unwrap_or(0),
            minute: u8::try_from(value.minute()).unwrap_or(0),
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTimeOfDay(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The next irrigation slot relative to some current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextIrrigation {
    pub time: TimeOfDay,
    /// `true` when the slot falls on the following day.
    pub tomorrow: bool,
}

impl std::fmt::Display for NextIrrigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.tomorrow {
            write!(f, "{} (tomorrow)", self.time)
        } else {
            self.time.fmt(f)
        }
    }
}

/// Pick the next of the two daily irrigation slots.
///
/// Before `first` the answer is `first`; before `second` it is `second`;
/// otherwise it is `first` on the next day. Slots are compared in the
/// order given, they are not sorted.
#[must_use]
pub fn next_irrigation(now: TimeOfDay, first: TimeOfDay, second: TimeOfDay) -> NextIrrigation {
    let current = now.minutes_of_day();
    if current < first.minutes_of_day() {
        NextIrrigation {
            time: first,
            tomorrow: false,
        }
    } else if current < second.minutes_of_day() {
        NextIrrigation {
            time: second,
            tomorrow: false,
        }
    } else {
        NextIrrigation {
            time: first,
            tomorrow: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tod(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn should_parse_and_display_padded_time() {
        let t = tod("7:05");
        assert_eq!(t.hour(), 7);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.to_string(), "07:05");
        assert_eq!(t.minutes_of_day(), 425);
    }

    #[test]
    fn should_reject_out_of_range_time() {
        assert!(matches!(
            "24:00".parse::<TimeOfDay>(),
            Err(DomainError::InvalidTimeOfDay(raw)) if raw == "24:00"
        ));
        assert!("12:60".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn should_reject_malformed_time() {
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("0700".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn should_return_first_slot_when_before_first() {
        let next = next_irrigation(tod("06:59"), tod("07:00"), tod("19:00"));
        assert_eq!(next.time, tod("07:00"));
        assert!(!next.tomorrow);
        assert_eq!(next.to_string(), "07:00");
    }

    #[test]
    fn should_return_second_slot_when_between_slots() {
        let next = next_irrigation(tod("07:00"), tod("07:00"), tod("19:00"));
        assert_eq!(next.time, tod("19:00"));
        assert!(!next.tomorrow);

        let next = next_irrigation(tod("18:59"), tod("07:00"), tod("19:00"));
        assert_eq!(next.time, tod("19:00"));
    }

    #[test]
    fn should_return_first_slot_tomorrow_when_after_second() {
        let next = next_irrigation(tod("19:00"), tod("07:00"), tod("19:00"));
        assert_eq!(next.time, tod("07:00"));
        assert!(next.tomorrow);
        assert_eq!(next.to_string(), "07:00 (tomorrow)");
    }

    #[test]
    fn should_convert_from_chrono_time() {
        let naive = chrono::NaiveTime::from_hms_opt(21, 4, 59).unwrap();
        assert_eq!(TimeOfDay::from(&naive), tod("21:04"));
    }

    #[test]
    fn should_serialize_as_hh_mm_string() {
        let json = serde_json::to_string(&tod("7:30")).unwrap();
        assert_eq!(json, "\"07:30\"");
        let parsed: TimeOfDay = serde_json::from_str("\"19:00\"").unwrap();
        assert_eq!(parsed, tod("19:00"));
        assert!(serde_json::from_str::<TimeOfDay>("\"nope\"").is_err());
    }
}
