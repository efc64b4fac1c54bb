//! Driver for the PT7C4339 I2C real-time clock.
//!
//! The chip keeps wall-clock time and date, drives two alarms, outputs a
//! square wave or an interrupt on its INT/SQW pin, and can trickle-charge
//! a backup supply. This crate talks to it through any bus implementing
//! the blocking [`embedded_hal::i2c::I2c`] trait.
//!
//! Time is kept in 24-hour format and dates are valid from 1900-01-01 to
//! 2099-12-31; the century is tracked through a flag in the month
//! register.
#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod alarm;
pub mod error;
pub mod time;

mod driver;
mod regs;

pub use alarm::{Alarm1Rate, Alarm2Rate, AlarmDay};
pub use driver::control::{
    Output, SqwFrequency, TrickleCharger, TrickleDiode, TrickleResistor,
};
pub use driver::{Pt7c4339, Startup};
pub use error::Error;
pub use time::{Date, Time, Weekday};
