//! Calendar types and the rules the chip itself does not enforce.

/// Day of the week as stored by the chip, 1 = Monday through 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Weekday {
    /// Placeholder for dates whose weekday has not been computed. The
    /// driver never stores it; callers pass it when setting a date.
    Unknown = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Maps a raw register value back to a weekday.
    pub fn from_index(index: u8) -> Weekday {
        match index {
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            6 => Weekday::Saturday,
            7 => Weekday::Sunday,
            _ => Weekday::Unknown,
        }
    }

    /// The register encoding of this weekday.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Wall-clock time, 24-hour format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    /// Hours, 0-23.
    pub hour: u8,
    /// Minutes, 0-59.
    pub minute: u8,
    /// Seconds, 0-59.
    pub second: u8,
}

impl Time {
    pub(crate) fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60 && self.second < 60
    }
}

/// Calendar date.
///
/// The driver computes `weekday` itself whenever a date is written, so
/// callers may fill it with [`Weekday::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    /// Full year, 1900-2099.
    pub year: u16,
    /// Month, 1 = January through 12 = December.
    pub month: u8,
    /// Day of the month, 1-31.
    pub day: u8,
    /// Day of the week.
    pub weekday: Weekday,
}

impl Date {
    pub(crate) fn is_valid(&self) -> bool {
        (1900..=2099).contains(&self.year)
            && (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
    }
}

/// `true` for Gregorian leap years.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month of the given year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of a date, via the year/month/century code method (a variant
/// of Zeller's congruence). Exact over the chip's 1900-2099 range.
pub fn weekday_for(year: u16, month: u8, day: u8) -> Weekday {
    const MONTH_CODES: [u16; 12] = [0, 3, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5];

    let yy = year % 100;
    let year_code = (yy + yy / 4) % 7;
    let month_code = MONTH_CODES[usize::from(month - 1)];
    let century_code = if year >= 2000 { 6 } else { 0 };
    // January and February of a leap year sit before the leap day and
    // shift back by one.
    let leap_shift = u16::from(is_leap_year(year) && month <= 2);

    let mut index = (year_code + month_code + century_code + u16::from(day) - leap_shift) % 7;
    if index == 0 {
        index = 7;
    }
    Weekday::from_index(index as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_weekdays() {
        assert_eq!(weekday_for(1900, 1, 1), Weekday::Monday);
        assert_eq!(weekday_for(1999, 12, 31), Weekday::Friday);
        assert_eq!(weekday_for(2000, 1, 1), Weekday::Saturday);
        assert_eq!(weekday_for(2000, 2, 29), Weekday::Tuesday);
        assert_eq!(weekday_for(2025, 5, 30), Weekday::Friday);
        assert_eq!(weekday_for(2099, 12, 31), Weekday::Thursday);
    }

    #[test]
    fn weekdays_advance_across_month_ends() {
        // 2024-02-29 Thursday, 2024-03-01 Friday
        assert_eq!(weekday_for(2024, 2, 29), Weekday::Thursday);
        assert_eq!(weekday_for(2024, 3, 1), Weekday::Friday);
        // 1999-12-31 Friday rolls into 2000-01-01 Saturday
        assert_eq!(weekday_for(1999, 12, 31), Weekday::Friday);
        assert_eq!(weekday_for(2000, 1, 1), Weekday::Saturday);
    }

    #[test]
    fn leap_years() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2096));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn time_validity() {
        assert!(Time { hour: 23, minute: 59, second: 59 }.is_valid());
        assert!(Time { hour: 0, minute: 0, second: 0 }.is_valid());
        assert!(!Time { hour: 24, minute: 0, second: 0 }.is_valid());
        assert!(!Time { hour: 0, minute: 60, second: 0 }.is_valid());
        assert!(!Time { hour: 0, minute: 0, second: 60 }.is_valid());
    }

    #[test]
    fn date_validity() {
        let date = |year, month, day| Date {
            year,
            month,
            day,
            weekday: Weekday::Unknown,
        };
        assert!(date(1900, 1, 1).is_valid());
        assert!(date(2099, 12, 31).is_valid());
        assert!(date(2024, 2, 29).is_valid());
        assert!(!date(2023, 2, 29).is_valid());
        assert!(!date(1899, 12, 31).is_valid());
        assert!(!date(2100, 1, 1).is_valid());
        assert!(!date(2024, 0, 1).is_valid());
        assert!(!date(2024, 13, 1).is_valid());
        assert!(!date(2024, 4, 31).is_valid());
        assert!(!date(2024, 1, 0).is_valid());
    }

    #[test]
    fn weekday_round_trip() {
        for index in 0..=7 {
            assert_eq!(Weekday::from_index(index).index(), index);
        }
        assert_eq!(Weekday::from_index(0xF5 & 0x07), Weekday::Friday);
    }
}
