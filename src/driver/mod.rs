//! The device driver proper.

use embedded_hal::i2c::I2c;

use crate::error::Error;
use crate::regs::{self, Control, Status};

mod alarm;
mod clock;
pub mod control;

#[cfg(test)]
pub(crate) mod mock;

/// Outcome of [`Pt7c4339::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Startup {
    /// The clock was running and its timekeeping can be trusted.
    Running,
    /// The oscillator stop flag is set: power was lost or the chip is
    /// fresh, so the kept time cannot be trusted.
    OscillatorStopped,
}

/// PT7C4339 real-time clock attached to an I2C bus.
pub struct Pt7c4339<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Pt7c4339<I2C> {
    /// Constructs a driver over an already configured bus.
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: regs::I2C_ADDRESS,
        }
    }

    /// Releases the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Pt7c4339<I2C> {
    /// Brings the chip into a known mode.
    ///
    /// Forces 24-hour timekeeping if the chip was left in 12-hour mode
    /// and reports whether the oscillator stopped since the flag was
    /// last cleared.
    pub fn init(&mut self) -> Result<Startup, Error<I2C::Error>> {
        let hours = self.read_register(regs::REG_HOURS)?;
        if hours & regs::HOURS_12H != 0 {
            self.write_register(regs::REG_HOURS, hours & !regs::HOURS_12H)?;
        }

        if self.oscillator_stop_flag()? {
            Ok(Startup::OscillatorStopped)
        } else {
            Ok(Startup::Running)
        }
    }

    /// Rewrites every register with its power-on value.
    pub fn reset(&mut self) -> Result<(), Error<I2C::Error>> {
        for (reg, value) in regs::POWER_ON_DEFAULTS.iter().enumerate() {
            self.write_register(reg as u8, *value)?;
        }
        Ok(())
    }

    pub(crate) fn read_register(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut data = [0];
        self.i2c
            .write_read(self.address, &[reg], &mut data)
            .map_err(Error::Bus)?;
        Ok(data[0])
    }

    /// Writes a register and reads it back to verify the transfer.
    pub(crate) fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(Error::Bus)?;
        if self.read_register(reg)? != value {
            return Err(Error::WriteVerify);
        }
        Ok(())
    }

    pub(crate) fn control(&mut self) -> Result<Control, Error<I2C::Error>> {
        Ok(Control::from_bits_truncate(
            self.read_register(regs::REG_CONTROL)?,
        ))
    }

    pub(crate) fn modify_control(
        &mut self,
        set: Control,
        clear: Control,
    ) -> Result<(), Error<I2C::Error>> {
        let mut flags = self.control()?;
        flags.insert(set);
        flags.remove(clear);
        self.write_register(regs::REG_CONTROL, flags.bits())
    }

    pub(crate) fn status(&mut self) -> Result<Status, Error<I2C::Error>> {
        Ok(Status::from_bits_truncate(
            self.read_register(regs::REG_STATUS)?,
        ))
    }

    pub(crate) fn modify_status(
        &mut self,
        set: Status,
        clear: Status,
    ) -> Result<(), Error<I2C::Error>> {
        let mut flags = self.status()?;
        flags.insert(set);
        flags.remove(clear);
        self.write_register(regs::REG_STATUS, flags.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{FakeChip, FakeError};
    use super::*;

    #[test]
    fn init_reports_stop_flag() {
        let mut rtc = Pt7c4339::new(FakeChip::new());
        // Power-on status has OSF set
        assert_eq!(rtc.init(), Ok(Startup::OscillatorStopped));

        rtc.clear_oscillator_stop_flag().unwrap();
        assert_eq!(rtc.init(), Ok(Startup::Running));
    }

    #[test]
    fn init_forces_24_hour_mode() {
        let mut chip = FakeChip::new();
        chip.regs[regs::REG_HOURS as usize] = regs::HOURS_12H | 0x32;
        let mut rtc = Pt7c4339::new(chip);

        rtc.init().unwrap();
        assert_eq!(rtc.i2c.regs[regs::REG_HOURS as usize], 0x32);
    }

    #[test]
    fn reset_restores_power_on_values() {
        let mut chip = FakeChip::new();
        chip.regs = [0x25; regs::REG_COUNT];
        let mut rtc = Pt7c4339::new(chip);

        rtc.reset().unwrap();
        assert_eq!(rtc.i2c.regs, regs::POWER_ON_DEFAULTS);
    }

    #[test]
    fn write_verify_detects_stuck_register() {
        let mut chip = FakeChip::new();
        chip.stuck = Some(regs::REG_TRICKLE_CHARGER);
        let mut rtc = Pt7c4339::new(chip);

        assert_eq!(
            rtc.write_register(regs::REG_TRICKLE_CHARGER, 0xA5),
            Err(Error::WriteVerify)
        );
    }

    #[test]
    fn bus_errors_propagate() {
        let mut chip = FakeChip::new();
        chip.fail_on = Some(regs::REG_SECONDS);
        let mut rtc = Pt7c4339::new(chip);

        assert_eq!(
            rtc.write_register(regs::REG_SECONDS, 0x00),
            Err(Error::Bus(FakeError))
        );
    }

    #[test]
    fn release_returns_the_bus() {
        let rtc = Pt7c4339::new(FakeChip::new());
        let chip = rtc.release();
        assert_eq!(chip.regs, regs::POWER_ON_DEFAULTS);
    }
}
