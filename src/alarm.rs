//! Alarm match rates and day selection.
//!
//! Each alarm register carries a match-disable bit; the combination of
//! those bits selects how often the alarm fires. The day-date registers
//! additionally select between matching a date of the month and a
//! weekday.

use crate::regs::{bcd_to_dec, dec_to_bcd, ALARM_DY_DT};
use crate::time::Weekday;

/// What alarm 1 compares against the running clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alarm1Rate {
    /// Fire once per second.
    EverySecond,
    /// Fire when the seconds match.
    SecondsMatch,
    /// Fire when minutes and seconds match.
    MinutesSecondsMatch,
    /// Fire when hours, minutes and seconds match.
    HoursMinutesSecondsMatch,
    /// Fire when the date of the month and the time match.
    DateHoursMinutesSecondsMatch,
    /// Fire when the weekday and the time match.
    WeekdayHoursMinutesSecondsMatch,
    /// Alarm interrupt off.
    Disabled,
}

impl Alarm1Rate {
    /// Match-disable bit for each alarm 1 register, seconds first.
    /// `None` when the rate does not drive the mask bits.
    pub(crate) fn masks(self) -> Option<[bool; 4]> {
        match self {
            Alarm1Rate::EverySecond => Some([true, true, true, true]),
            Alarm1Rate::SecondsMatch => Some([false, true, true, true]),
            Alarm1Rate::MinutesSecondsMatch => Some([false, false, true, true]),
            Alarm1Rate::HoursMinutesSecondsMatch => Some([false, false, false, true]),
            Alarm1Rate::DateHoursMinutesSecondsMatch
            | Alarm1Rate::WeekdayHoursMinutesSecondsMatch => Some([false; 4]),
            Alarm1Rate::Disabled => None,
        }
    }

    /// Whether the day-date register should match a weekday.
    pub(crate) fn matches_weekday(self) -> bool {
        matches!(self, Alarm1Rate::WeekdayHoursMinutesSecondsMatch)
    }

    /// Decodes the rate from the mask bits (seconds first), the weekday
    /// select and the interrupt enable. Mask combinations the chip can
    /// hold but the rate table does not name decode by the most frequent
    /// firing field.
    pub(crate) fn from_bits(masks: [bool; 4], weekday: bool, enabled: bool) -> Alarm1Rate {
        if !enabled {
            Alarm1Rate::Disabled
        } else if masks[0] {
            Alarm1Rate::EverySecond
        } else if masks[1] {
            Alarm1Rate::SecondsMatch
        } else if masks[2] {
            Alarm1Rate::MinutesSecondsMatch
        } else if masks[3] {
            Alarm1Rate::HoursMinutesSecondsMatch
        } else if weekday {
            Alarm1Rate::WeekdayHoursMinutesSecondsMatch
        } else {
            Alarm1Rate::DateHoursMinutesSecondsMatch
        }
    }
}

/// What alarm 2 compares against the running clock. Alarm 2 has no
/// seconds register and fires on second zero of the matched minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alarm2Rate {
    /// Fire once per minute.
    EveryMinute,
    /// Fire when the minutes match.
    MinutesMatch,
    /// Fire when hours and minutes match.
    HoursMinutesMatch,
    /// Fire when the date of the month and the time match.
    DateHoursMinutesMatch,
    /// Fire when the weekday and the time match.
    WeekdayHoursMinutesMatch,
    /// Alarm interrupt off.
    Disabled,
}

impl Alarm2Rate {
    /// Match-disable bit for each alarm 2 register, minutes first.
    pub(crate) fn masks(self) -> Option<[bool; 3]> {
        match self {
            Alarm2Rate::EveryMinute => Some([true, true, true]),
            Alarm2Rate::MinutesMatch => Some([false, true, true]),
            Alarm2Rate::HoursMinutesMatch => Some([false, false, true]),
            Alarm2Rate::DateHoursMinutesMatch | Alarm2Rate::WeekdayHoursMinutesMatch => {
                Some([false; 3])
            }
            Alarm2Rate::Disabled => None,
        }
    }

    pub(crate) fn matches_weekday(self) -> bool {
        matches!(self, Alarm2Rate::WeekdayHoursMinutesMatch)
    }

    pub(crate) fn from_bits(masks: [bool; 3], weekday: bool, enabled: bool) -> Alarm2Rate {
        if !enabled {
            Alarm2Rate::Disabled
        } else if masks[0] {
            Alarm2Rate::EveryMinute
        } else if masks[1] {
            Alarm2Rate::MinutesMatch
        } else if masks[2] {
            Alarm2Rate::HoursMinutesMatch
        } else if weekday {
            Alarm2Rate::WeekdayHoursMinutesMatch
        } else {
            Alarm2Rate::DateHoursMinutesMatch
        }
    }
}

/// Day part of an alarm match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmDay {
    /// Match a date of the month, 1-31.
    Date(u8),
    /// Match a day of the week.
    Weekday(Weekday),
}

impl AlarmDay {
    /// Day-date register payload, `None` for out-of-range values.
    pub(crate) fn to_bits(self) -> Option<u8> {
        match self {
            AlarmDay::Date(day) if (1..=31).contains(&day) => Some(dec_to_bcd(day)),
            AlarmDay::Weekday(weekday) if weekday != Weekday::Unknown => {
                Some(ALARM_DY_DT | weekday.index())
            }
            _ => None,
        }
    }

    /// Decodes the day-date register payload.
    pub(crate) fn from_bits(bits: u8) -> AlarmDay {
        if bits & ALARM_DY_DT != 0 {
            AlarmDay::Weekday(Weekday::from_index(bits & 0x0F))
        } else {
            AlarmDay::Date(bcd_to_dec(bits & 0x3F))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alarm1_rate_round_trip() {
        let rates = [
            Alarm1Rate::EverySecond,
            Alarm1Rate::SecondsMatch,
            Alarm1Rate::MinutesSecondsMatch,
            Alarm1Rate::HoursMinutesSecondsMatch,
            Alarm1Rate::DateHoursMinutesSecondsMatch,
            Alarm1Rate::WeekdayHoursMinutesSecondsMatch,
        ];
        for rate in rates {
            let masks = rate.masks().unwrap();
            assert_eq!(
                Alarm1Rate::from_bits(masks, rate.matches_weekday(), true),
                rate
            );
        }
        assert_eq!(Alarm1Rate::Disabled.masks(), None);
    }

    #[test]
    fn alarm1_rate_disabled_wins() {
        assert_eq!(
            Alarm1Rate::from_bits([true, true, true, true], false, false),
            Alarm1Rate::Disabled
        );
    }

    #[test]
    fn alarm1_rate_odd_masks_decode() {
        // Seconds masked but the rest unmasked still fires every second.
        assert_eq!(
            Alarm1Rate::from_bits([true, false, false, false], false, true),
            Alarm1Rate::EverySecond
        );
    }

    #[test]
    fn alarm2_rate_round_trip() {
        let rates = [
            Alarm2Rate::EveryMinute,
            Alarm2Rate::MinutesMatch,
            Alarm2Rate::HoursMinutesMatch,
            Alarm2Rate::DateHoursMinutesMatch,
            Alarm2Rate::WeekdayHoursMinutesMatch,
        ];
        for rate in rates {
            let masks = rate.masks().unwrap();
            assert_eq!(
                Alarm2Rate::from_bits(masks, rate.matches_weekday(), true),
                rate
            );
        }
        assert_eq!(Alarm2Rate::Disabled.masks(), None);
    }

    #[test]
    fn alarm_day_encoding() {
        assert_eq!(AlarmDay::Date(30).to_bits(), Some(0x30));
        assert_eq!(
            AlarmDay::Weekday(Weekday::Friday).to_bits(),
            Some(ALARM_DY_DT | 5)
        );
        assert_eq!(AlarmDay::Date(0).to_bits(), None);
        assert_eq!(AlarmDay::Date(32).to_bits(), None);
        assert_eq!(AlarmDay::Weekday(Weekday::Unknown).to_bits(), None);

        assert_eq!(AlarmDay::from_bits(0x31), AlarmDay::Date(31));
        assert_eq!(
            AlarmDay::from_bits(ALARM_DY_DT | 7),
            AlarmDay::Weekday(Weekday::Sunday)
        );
    }
}
