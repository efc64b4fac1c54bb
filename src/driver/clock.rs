//! Time and date access.

use embedded_hal::i2c::I2c;

use super::Pt7c4339;
use crate::error::Error;
use crate::regs::{self, bcd_to_dec, dec_to_bcd};
use crate::time::{days_in_month, weekday_for, Date, Time, Weekday};

impl<I2C: I2c> Pt7c4339<I2C> {
    /// Reads the current time.
    pub fn time(&mut self) -> Result<Time, Error<I2C::Error>> {
        Ok(Time {
            hour: self.hour()?,
            minute: self.minute()?,
            second: self.second()?,
        })
    }

    /// Sets the time. No register is touched unless all fields are
    /// valid.
    pub fn set_time(&mut self, time: Time) -> Result<(), Error<I2C::Error>> {
        if !time.is_valid() {
            return Err(Error::InvalidTime);
        }
        self.set_hour(time.hour)?;
        self.set_minute(time.minute)?;
        self.set_second(time.second)
    }

    /// Reads the current date, weekday included.
    pub fn date(&mut self) -> Result<Date, Error<I2C::Error>> {
        Ok(Date {
            year: self.year()?,
            month: self.month()?,
            day: self.day()?,
            weekday: self.weekday()?,
        })
    }

    /// Sets the date. The `weekday` field of `date` is ignored; the real
    /// weekday is computed and stored. No register is touched unless the
    /// whole date is valid.
    pub fn set_date(&mut self, date: Date) -> Result<(), Error<I2C::Error>> {
        if !date.is_valid() {
            return Err(Error::InvalidDate);
        }
        self.set_year(date.year)?;
        self.set_month(date.month)?;
        self.set_day(date.day)
    }

    /// Current seconds.
    pub fn second(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(bcd_to_dec(self.read_register(regs::REG_SECONDS)? & 0x7F))
    }

    /// Sets the seconds, 0-59.
    pub fn set_second(&mut self, second: u8) -> Result<(), Error<I2C::Error>> {
        if second >= 60 {
            return Err(Error::InvalidTime);
        }
        self.write_register(regs::REG_SECONDS, dec_to_bcd(second))
    }

    /// Current minutes.
    pub fn minute(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(bcd_to_dec(self.read_register(regs::REG_MINUTES)? & 0x7F))
    }

    /// Sets the minutes, 0-59.
    pub fn set_minute(&mut self, minute: u8) -> Result<(), Error<I2C::Error>> {
        if minute >= 60 {
            return Err(Error::InvalidTime);
        }
        self.write_register(regs::REG_MINUTES, dec_to_bcd(minute))
    }

    /// Current hour, 24-hour format.
    pub fn hour(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(bcd_to_dec(self.read_register(regs::REG_HOURS)? & 0x3F))
    }

    /// Sets the hour, 0-23.
    pub fn set_hour(&mut self, hour: u8) -> Result<(), Error<I2C::Error>> {
        if hour >= 24 {
            return Err(Error::InvalidTime);
        }
        self.write_register(regs::REG_HOURS, dec_to_bcd(hour))
    }

    /// Current weekday as stored on the chip.
    pub fn weekday(&mut self) -> Result<Weekday, Error<I2C::Error>> {
        Ok(Weekday::from_index(
            self.read_register(regs::REG_DAYS_OF_WEEK)? & 0x07,
        ))
    }

    /// Current day of the month.
    pub fn day(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(bcd_to_dec(self.read_register(regs::REG_DATES)? & 0x3F))
    }

    /// Sets the day of the month, validated against the stored month and
    /// year. On a failed write the previous day is restored.
    pub fn set_day(&mut self, day: u8) -> Result<(), Error<I2C::Error>> {
        let old = self.date()?;
        if day == 0 || day > days_in_month(old.year, old.month) {
            return Err(Error::InvalidDate);
        }

        if let Err(e) = self
            .write_register(regs::REG_DATES, dec_to_bcd(day))
            .and_then(|_| self.update_weekday())
        {
            let _ = self.write_register(regs::REG_DATES, dec_to_bcd(old.day));
            let _ = self.update_weekday();
            return Err(e);
        }
        Ok(())
    }

    /// Current month.
    pub fn month(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(bcd_to_dec(self.read_register(regs::REG_MONTHS)? & 0x1F))
    }

    /// Sets the month, 1-12, preserving the century flag. On a failed
    /// write the previous month is restored.
    pub fn set_month(&mut self, month: u8) -> Result<(), Error<I2C::Error>> {
        if month == 0 || month > 12 {
            return Err(Error::InvalidDate);
        }

        let century = if self.year()? > 1999 {
            regs::MONTH_CENTURY
        } else {
            0
        };
        let old = century | dec_to_bcd(self.month()?);

        if let Err(e) = self
            .write_register(regs::REG_MONTHS, century | dec_to_bcd(month))
            .and_then(|_| self.update_weekday())
        {
            let _ = self.write_register(regs::REG_MONTHS, old);
            let _ = self.update_weekday();
            return Err(e);
        }
        Ok(())
    }

    /// Current year, century flag folded in.
    pub fn year(&mut self) -> Result<u16, Error<I2C::Error>> {
        let year = u16::from(bcd_to_dec(self.read_register(regs::REG_YEARS)?));
        let months = self.read_register(regs::REG_MONTHS)?;
        if months & regs::MONTH_CENTURY != 0 {
            Ok(2000 + year)
        } else {
            Ok(1900 + year)
        }
    }

    /// Sets the year, 1900-2099. The century flag in the months register
    /// is updated to match. On a failed write the previous year is
    /// restored.
    pub fn set_year(&mut self, year: u16) -> Result<(), Error<I2C::Error>> {
        if !(1900..=2099).contains(&year) {
            return Err(Error::InvalidDate);
        }

        let old_year = self.year()?;
        let month = dec_to_bcd(self.month()?);

        let (century, yy) = Self::split_year(year);
        let (old_century, old_yy) = Self::split_year(old_year);

        if let Err(e) = self.write_register(regs::REG_YEARS, dec_to_bcd(yy)) {
            let _ = self.write_register(regs::REG_YEARS, dec_to_bcd(old_yy));
            let _ = self.update_weekday();
            return Err(e);
        }

        if let Err(e) = self
            .write_register(regs::REG_MONTHS, century | month)
            .and_then(|_| self.update_weekday())
        {
            let _ = self.write_register(regs::REG_MONTHS, old_century | month);
            let _ = self.write_register(regs::REG_YEARS, dec_to_bcd(old_yy));
            let _ = self.update_weekday();
            return Err(e);
        }
        Ok(())
    }

    /// Recomputes the weekday from the stored date and writes it back.
    /// Called by every date setter; exposed for callers that write the
    /// date registers by other means.
    pub fn update_weekday(&mut self) -> Result<(), Error<I2C::Error>> {
        let weekday = weekday_for(self.year()?, self.month()?, self.day()?);
        self.write_register(regs::REG_DAYS_OF_WEEK, weekday.index())
    }

    fn split_year(year: u16) -> (u8, u8) {
        if year > 1999 {
            (regs::MONTH_CENTURY, (year - 2000) as u8)
        } else {
            (0, (year - 1900) as u8)
        }
    }
}
