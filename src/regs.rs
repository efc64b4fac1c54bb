//! Register map of the PT7C4339.

use bitflags::bitflags;

/// Fixed 7-bit bus address of the chip.
pub const I2C_ADDRESS: u8 = 0x68;

pub const REG_SECONDS: u8 = 0x00;
pub const REG_MINUTES: u8 = 0x01;
pub const REG_HOURS: u8 = 0x02;
pub const REG_DAYS_OF_WEEK: u8 = 0x03;
pub const REG_DATES: u8 = 0x04;
pub const REG_MONTHS: u8 = 0x05;
pub const REG_YEARS: u8 = 0x06;
pub const REG_A1_SECONDS: u8 = 0x07;
pub const REG_A1_MINUTES: u8 = 0x08;
pub const REG_A1_HOURS: u8 = 0x09;
pub const REG_A1_DAY_DATE: u8 = 0x0A;
pub const REG_A2_MINUTES: u8 = 0x0B;
pub const REG_A2_HOURS: u8 = 0x0C;
pub const REG_A2_DAY_DATE: u8 = 0x0D;
pub const REG_CONTROL: u8 = 0x0E;
pub const REG_STATUS: u8 = 0x0F;
pub const REG_TRICKLE_CHARGER: u8 = 0x10;

/// Number of registers on the chip.
pub const REG_COUNT: usize = 0x11;

/// 12-hour mode select in the hours register.
pub const HOURS_12H: u8 = 1 << 6;
/// Century select in the months register, set for 20xx years.
pub const MONTH_CENTURY: u8 = 1 << 7;
/// Match-disable bit carried in every alarm register.
pub const ALARM_MASK: u8 = 1 << 7;
/// Weekday (set) vs date (clear) select in the alarm day-date registers.
pub const ALARM_DY_DT: u8 = 1 << 6;

bitflags! {
    /// Control register (0x0E) bits.
    pub struct Control: u8 {
        /// Oscillator disable, active low.
        const EOSC = 1 << 7;
        /// Keep alarms and the square wave running on battery power.
        const BBSQI = 1 << 5;
        /// Square wave rate select, high bit.
        const RS2 = 1 << 4;
        /// Square wave rate select, low bit.
        const RS1 = 1 << 3;
        /// Route alarms to the INT/SQW pin instead of the square wave.
        const INTCN = 1 << 2;
        /// Alarm 2 interrupt enable.
        const A2IE = 1 << 1;
        /// Alarm 1 interrupt enable.
        const A1IE = 1 << 0;
    }
}

bitflags! {
    /// Status register (0x0F) bits.
    pub struct Status: u8 {
        /// Oscillator stop flag, timekeeping is not trusted while set.
        const OSF = 1 << 7;
        /// Alarm 2 match flag.
        const A2F = 1 << 1;
        /// Alarm 1 match flag.
        const A1F = 1 << 0;
    }
}

/// Power-on value of every register, indexed by register address.
pub const POWER_ON_DEFAULTS: [u8; REG_COUNT] = [
    0x00, 0x00, 0x00, 0x01, 0x01, 0x81, 0x00, // clock, 2000-01-01 Monday
    0x00, 0x00, 0x00, 0x00, // alarm 1
    0x00, 0x00, 0x00, // alarm 2
    0x18, 0x80, 0x00, // control, status, trickle charger
];

/// Decodes a two-digit BCD field.
pub fn bcd_to_dec(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

/// Encodes a value 0-99 as two-digit BCD.
pub fn dec_to_bcd(dec: u8) -> u8 {
    ((dec / 10) << 4) | (dec % 10)
}
