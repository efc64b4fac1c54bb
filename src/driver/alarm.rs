//! Alarm 1 and alarm 2 access.

use embedded_hal::i2c::I2c;

use super::Pt7c4339;
use crate::alarm::{Alarm1Rate, Alarm2Rate, AlarmDay};
use crate::error::Error;
use crate::regs::{self, bcd_to_dec, dec_to_bcd, Control, Status};
use crate::time::Time;

const A1_REGS: [u8; 4] = [
    regs::REG_A1_SECONDS,
    regs::REG_A1_MINUTES,
    regs::REG_A1_HOURS,
    regs::REG_A1_DAY_DATE,
];
const A2_REGS: [u8; 3] = [regs::REG_A2_MINUTES, regs::REG_A2_HOURS, regs::REG_A2_DAY_DATE];

impl<I2C: I2c> Pt7c4339<I2C> {
    /// Alarm 1 match time.
    pub fn alarm1_time(&mut self) -> Result<Time, Error<I2C::Error>> {
        Ok(Time {
            hour: bcd_to_dec(self.read_register(regs::REG_A1_HOURS)? & 0x3F),
            minute: bcd_to_dec(self.read_register(regs::REG_A1_MINUTES)? & 0x7F),
            second: bcd_to_dec(self.read_register(regs::REG_A1_SECONDS)? & 0x7F),
        })
    }

    /// Sets the alarm 1 match time. Match-disable bits are preserved, so
    /// this can be called before or after [`Pt7c4339::set_alarm1_rate`].
    pub fn set_alarm1_time(&mut self, time: Time) -> Result<(), Error<I2C::Error>> {
        if !time.is_valid() {
            return Err(Error::InvalidTime);
        }
        self.write_alarm_field(regs::REG_A1_SECONDS, dec_to_bcd(time.second))?;
        self.write_alarm_field(regs::REG_A1_MINUTES, dec_to_bcd(time.minute))?;
        self.write_alarm_field(regs::REG_A1_HOURS, dec_to_bcd(time.hour))
    }

    /// Alarm 1 day-date match value.
    pub fn alarm1_day(&mut self) -> Result<AlarmDay, Error<I2C::Error>> {
        Ok(AlarmDay::from_bits(
            self.read_register(regs::REG_A1_DAY_DATE)?,
        ))
    }

    /// Sets the day alarm 1 matches on, selecting date or weekday
    /// matching to go with it.
    pub fn set_alarm1_day(&mut self, day: AlarmDay) -> Result<(), Error<I2C::Error>> {
        let bits = day.to_bits().ok_or(Error::InvalidDate)?;
        self.write_alarm_field(regs::REG_A1_DAY_DATE, bits)
    }

    /// Current alarm 1 rate, `Disabled` while the interrupt is off.
    pub fn alarm1_rate(&mut self) -> Result<Alarm1Rate, Error<I2C::Error>> {
        let mut masks = [false; 4];
        for (mask, reg) in masks.iter_mut().zip(A1_REGS) {
            *mask = self.read_register(reg)? & regs::ALARM_MASK != 0;
        }
        let weekday = self.read_register(regs::REG_A1_DAY_DATE)? & regs::ALARM_DY_DT != 0;
        let enabled = self.control()?.contains(Control::A1IE);
        Ok(Alarm1Rate::from_bits(masks, weekday, enabled))
    }

    /// Programs the alarm 1 match rate and enables its interrupt.
    /// `Disabled` leaves the match bits alone and turns the interrupt
    /// off. Routing the interrupt to the pin still takes
    /// [`Pt7c4339::set_output`].
    pub fn set_alarm1_rate(&mut self, rate: Alarm1Rate) -> Result<(), Error<I2C::Error>> {
        let masks = match rate.masks() {
            Some(masks) => masks,
            None => return self.enable_alarm1_interrupt(false),
        };

        for (reg, mask) in A1_REGS.iter().zip(masks) {
            self.write_alarm_mask(*reg, mask, rate.matches_weekday())?;
        }
        self.enable_alarm1_interrupt(true)
    }

    /// Whether the alarm 1 interrupt is enabled.
    pub fn alarm1_interrupt_enabled(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.control()?.contains(Control::A1IE))
    }

    /// Enables or disables the alarm 1 interrupt.
    pub fn enable_alarm1_interrupt(&mut self, enable: bool) -> Result<(), Error<I2C::Error>> {
        if enable {
            self.modify_control(Control::A1IE, Control::empty())
        } else {
            self.modify_control(Control::empty(), Control::A1IE)
        }
    }

    /// Whether alarm 1 matched since its flag was last cleared.
    pub fn alarm1_fired(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.status()?.contains(Status::A1F))
    }

    /// Clears the alarm 1 flag, releasing the interrupt line.
    pub fn clear_alarm1_flag(&mut self) -> Result<(), Error<I2C::Error>> {
        self.modify_status(Status::empty(), Status::A1F)
    }

    /// Alarm 2 match time. Alarm 2 has no seconds register; the seconds
    /// field reads zero.
    pub fn alarm2_time(&mut self) -> Result<Time, Error<I2C::Error>> {
        Ok(Time {
            hour: bcd_to_dec(self.read_register(regs::REG_A2_HOURS)? & 0x3F),
            minute: bcd_to_dec(self.read_register(regs::REG_A2_MINUTES)? & 0x7F),
            second: 0,
        })
    }

    /// Sets the alarm 2 match time. The seconds field is ignored.
    pub fn set_alarm2_time(&mut self, time: Time) -> Result<(), Error<I2C::Error>> {
        if time.hour >= 24 || time.minute >= 60 {
            return Err(Error::InvalidTime);
        }
        self.write_alarm_field(regs::REG_A2_MINUTES, dec_to_bcd(time.minute))?;
        self.write_alarm_field(regs::REG_A2_HOURS, dec_to_bcd(time.hour))
    }

    /// Alarm 2 day-date match value.
    pub fn alarm2_day(&mut self) -> Result<AlarmDay, Error<I2C::Error>> {
        Ok(AlarmDay::from_bits(
            self.read_register(regs::REG_A2_DAY_DATE)?,
        ))
    }

    /// Sets the day alarm 2 matches on.
    pub fn set_alarm2_day(&mut self, day: AlarmDay) -> Result<(), Error<I2C::Error>> {
        let bits = day.to_bits().ok_or(Error::InvalidDate)?;
        self.write_alarm_field(regs::REG_A2_DAY_DATE, bits)
    }

    /// Current alarm 2 rate, `Disabled` while the interrupt is off.
    pub fn alarm2_rate(&mut self) -> Result<Alarm2Rate, Error<I2C::Error>> {
        let mut masks = [false; 3];
        for (mask, reg) in masks.iter_mut().zip(A2_REGS) {
            *mask = self.read_register(reg)? & regs::ALARM_MASK != 0;
        }
        let weekday = self.read_register(regs::REG_A2_DAY_DATE)? & regs::ALARM_DY_DT != 0;
        let enabled = self.control()?.contains(Control::A2IE);
        Ok(Alarm2Rate::from_bits(masks, weekday, enabled))
    }

    /// Programs the alarm 2 match rate and enables its interrupt.
    pub fn set_alarm2_rate(&mut self, rate: Alarm2Rate) -> Result<(), Error<I2C::Error>> {
        let masks = match rate.masks() {
            Some(masks) => masks,
            None => return self.enable_alarm2_interrupt(false),
        };

        for (reg, mask) in A2_REGS.iter().zip(masks) {
            self.write_alarm_mask(*reg, mask, rate.matches_weekday())?;
        }
        self.enable_alarm2_interrupt(true)
    }

    /// Whether the alarm 2 interrupt is enabled.
    pub fn alarm2_interrupt_enabled(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.control()?.contains(Control::A2IE))
    }

    /// Enables or disables the alarm 2 interrupt.
    pub fn enable_alarm2_interrupt(&mut self, enable: bool) -> Result<(), Error<I2C::Error>> {
        if enable {
            self.modify_control(Control::A2IE, Control::empty())
        } else {
            self.modify_control(Control::empty(), Control::A2IE)
        }
    }

    /// Whether alarm 2 matched since its flag was last cleared.
    pub fn alarm2_fired(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.status()?.contains(Status::A2F))
    }

    /// Clears the alarm 2 flag.
    pub fn clear_alarm2_flag(&mut self) -> Result<(), Error<I2C::Error>> {
        self.modify_status(Status::empty(), Status::A2F)
    }

    /// Rewrites an alarm register payload, preserving its match-disable
    /// bit.
    fn write_alarm_field(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        let mask = self.read_register(reg)? & regs::ALARM_MASK;
        self.write_register(reg, mask | value)
    }

    /// Rewrites an alarm register's match-disable bit, preserving its
    /// payload. For an unmasked day-date register the weekday select is
    /// driven too.
    fn write_alarm_mask(&mut self, reg: u8, mask: bool, weekday: bool) -> Result<(), Error<I2C::Error>> {
        let mut value = self.read_register(reg)?;
        if mask {
            value |= regs::ALARM_MASK;
        } else {
            value &= !regs::ALARM_MASK;
        }
        if (reg == regs::REG_A1_DAY_DATE || reg == regs::REG_A2_DAY_DATE) && !mask {
            if weekday {
                value |= regs::ALARM_DY_DT;
            } else {
                value &= !regs::ALARM_DY_DT;
            }
        }
        self.write_register(reg, value)
    }
}
