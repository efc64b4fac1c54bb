//! Oscillator, output pin and trickle charger controls.

use embedded_hal::i2c::I2c;

use super::Pt7c4339;
use crate::error::Error;
use crate::regs::{self, Control, Status};

/// Square wave output frequency, encoded in the RS2:RS1 control bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SqwFrequency {
    /// 1 Hz.
    Hz1 = 0x00,
    /// 4.96 kHz.
    Khz4_96 = 0x01,
    /// 8.192 kHz.
    Khz8_192 = 0x02,
    /// 32.768 kHz.
    Khz32_768 = 0x03,
}

impl SqwFrequency {
    fn from_bits(bits: u8) -> SqwFrequency {
        match bits & 0x03 {
            0x00 => SqwFrequency::Hz1,
            0x01 => SqwFrequency::Khz4_96,
            0x02 => SqwFrequency::Khz8_192,
            _ => SqwFrequency::Khz32_768,
        }
    }
}

/// What the INT/SQW pin carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Output {
    /// Free-running square wave at the configured frequency.
    SquareWave,
    /// Alarm interrupt, active low while an enabled alarm flag is set.
    Interrupt,
}

/// Trickle charger master switch. Only the 0b1010 nibble enables the
/// charger; every other pattern reads back as disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TrickleCharger {
    Disabled = 0x00,
    Enabled = 0x0A,
}

/// Series diode between Vcc and the backup supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TrickleDiode {
    Disabled = 0x01,
    Enabled = 0x02,
}

/// Series resistor between Vcc and the backup supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TrickleResistor {
    /// No resistor, charging path open.
    Disabled = 0x00,
    /// 200 Ohm.
    Ohm200 = 0x01,
    /// 2 kOhm.
    Kohm2 = 0x02,
    /// 4 kOhm.
    Kohm4 = 0x03,
}

impl<I2C: I2c> Pt7c4339<I2C> {
    /// Whether the oscillator is running.
    pub fn oscillator_enabled(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(!self.control()?.contains(Control::EOSC))
    }

    /// Starts or stops the oscillator. Stopping sets the stop flag;
    /// clear it with [`Pt7c4339::clear_oscillator_stop_flag`] after
    /// restarting.
    pub fn enable_oscillator(&mut self, enable: bool) -> Result<(), Error<I2C::Error>> {
        if enable {
            self.modify_control(Control::empty(), Control::EOSC)
        } else {
            self.modify_control(Control::EOSC, Control::empty())
        }
    }

    /// Whether the oscillator stopped since the flag was last cleared.
    /// While set, the kept time cannot be trusted.
    pub fn oscillator_stop_flag(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.status()?.contains(Status::OSF))
    }

    /// Clears the oscillator stop flag.
    pub fn clear_oscillator_stop_flag(&mut self) -> Result<(), Error<I2C::Error>> {
        self.modify_status(Status::empty(), Status::OSF)
    }

    /// Whether alarms and the square wave stay active on battery power.
    pub fn battery_output_enabled(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.control()?.contains(Control::BBSQI))
    }

    /// Enables or disables alarm and square wave output on battery
    /// power.
    pub fn enable_battery_output(&mut self, enable: bool) -> Result<(), Error<I2C::Error>> {
        if enable {
            self.modify_control(Control::BBSQI, Control::empty())
        } else {
            self.modify_control(Control::empty(), Control::BBSQI)
        }
    }

    /// Current role of the INT/SQW pin.
    pub fn output(&mut self) -> Result<Output, Error<I2C::Error>> {
        if self.control()?.contains(Control::INTCN) {
            Ok(Output::Interrupt)
        } else {
            Ok(Output::SquareWave)
        }
    }

    /// Selects what the INT/SQW pin carries.
    pub fn set_output(&mut self, output: Output) -> Result<(), Error<I2C::Error>> {
        match output {
            Output::Interrupt => self.modify_control(Control::INTCN, Control::empty()),
            Output::SquareWave => self.modify_control(Control::empty(), Control::INTCN),
        }
    }

    /// Current square wave frequency.
    pub fn sqw_frequency(&mut self) -> Result<SqwFrequency, Error<I2C::Error>> {
        Ok(SqwFrequency::from_bits(self.control()?.bits() >> 3))
    }

    /// Sets the square wave frequency.
    pub fn set_sqw_frequency(&mut self, frequency: SqwFrequency) -> Result<(), Error<I2C::Error>> {
        let bits = self.control()?.bits() & !(Control::RS2 | Control::RS1).bits();
        self.write_register(regs::REG_CONTROL, bits | (frequency as u8) << 3)
    }

    /// Trickle charger master state.
    pub fn trickle_charger(&mut self) -> Result<TrickleCharger, Error<I2C::Error>> {
        let nibble = self.read_register(regs::REG_TRICKLE_CHARGER)? >> 4;
        if nibble == TrickleCharger::Enabled as u8 {
            Ok(TrickleCharger::Enabled)
        } else {
            Ok(TrickleCharger::Disabled)
        }
    }

    /// Trickle charger diode selection. Encodings the chip can hold but
    /// the datasheet does not name read back as disabled.
    pub fn trickle_diode(&mut self) -> Result<TrickleDiode, Error<I2C::Error>> {
        match (self.read_register(regs::REG_TRICKLE_CHARGER)? >> 2) & 0x03 {
            0x02 => Ok(TrickleDiode::Enabled),
            _ => Ok(TrickleDiode::Disabled),
        }
    }

    /// Trickle charger resistor selection.
    pub fn trickle_resistor(&mut self) -> Result<TrickleResistor, Error<I2C::Error>> {
        match self.read_register(regs::REG_TRICKLE_CHARGER)? & 0x03 {
            0x01 => Ok(TrickleResistor::Ohm200),
            0x02 => Ok(TrickleResistor::Kohm2),
            0x03 => Ok(TrickleResistor::Kohm4),
            _ => Ok(TrickleResistor::Disabled),
        }
    }

    /// Writes the whole trickle charger configuration in one register
    /// update.
    pub fn set_trickle_charger(
        &mut self,
        charger: TrickleCharger,
        diode: TrickleDiode,
        resistor: TrickleResistor,
    ) -> Result<(), Error<I2C::Error>> {
        self.write_register(
            regs::REG_TRICKLE_CHARGER,
            (charger as u8) << 4 | (diode as u8) << 2 | resistor as u8,
        )
    }
}
