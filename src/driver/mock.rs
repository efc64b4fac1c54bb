//! In-memory stand-in for the chip, used by the driver tests.

use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

use crate::regs;

/// Bus error injected by [`FakeChip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError;

impl i2c::Error for FakeError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Register-file emulation of the chip behind the I2C trait.
///
/// Transfers follow the chip's framing: the first written byte sets the
/// register pointer, subsequent bytes land in consecutive registers, and
/// reads return registers from the pointer onward with wrap-around.
pub struct FakeChip {
    pub regs: [u8; regs::REG_COUNT],
    pointer: u8,
    /// Writes addressed at this register fail with a bus error.
    pub fail_on: Option<u8>,
    /// Writes addressed at this register are silently dropped.
    pub stuck: Option<u8>,
}

impl FakeChip {
    pub fn new() -> Self {
        Self {
            regs: regs::POWER_ON_DEFAULTS,
            pointer: 0,
            fail_on: None,
            stuck: None,
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), FakeError> {
        let (first, data) = match bytes.split_first() {
            Some(split) => split,
            None => return Ok(()),
        };
        self.pointer = *first % regs::REG_COUNT as u8;
        for value in data {
            if Some(self.pointer) == self.fail_on {
                return Err(FakeError);
            }
            if Some(self.pointer) != self.stuck {
                self.regs[usize::from(self.pointer)] = *value;
            }
            self.pointer = (self.pointer + 1) % regs::REG_COUNT as u8;
        }
        Ok(())
    }

    fn read_bytes(&mut self, buffer: &mut [u8]) {
        for value in buffer.iter_mut() {
            *value = self.regs[usize::from(self.pointer)];
            self.pointer = (self.pointer + 1) % regs::REG_COUNT as u8;
        }
    }
}

impl ErrorType for FakeChip {
    type Error = FakeError;
}

impl I2c<SevenBitAddress> for FakeChip {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), FakeError> {
        assert_eq!(address, regs::I2C_ADDRESS);
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.write_bytes(bytes)?,
                Operation::Read(buffer) => self.read_bytes(buffer),
            }
        }
        Ok(())
    }
}
