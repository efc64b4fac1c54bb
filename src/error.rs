//! Driver error type.

/// Errors returned by driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The underlying bus transfer failed.
    Bus(E),
    /// A register readback after a write did not match the written value.
    WriteVerify,
    /// A time field was out of range.
    InvalidTime,
    /// A date was outside 1900-01-01..=2099-12-31 or not a real calendar
    /// day.
    InvalidDate,
}
