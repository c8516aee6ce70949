//! Register level access to the eFuse controller
//!
//! The [EfuseInterface] trait is the only way the rest of this crate talks to
//! hardware. An implementation is supplied by the HAL of the target device,
//! or by [VirtualEfuse](crate::virtual_efuse::VirtualEfuse) for host side
//! work and testing.

use crate::Error;

/// Error counters the eFuse controller reports for a block
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HardwareErrorStatus {
    /// Number of errors the controller counted
    pub err_num: u32,
    /// The controller could not recover the block
    pub fail: bool,
}

impl HardwareErrorStatus {
    pub fn has_error(&self) -> bool {
        self.err_num != 0 || self.fail
    }
}

/// Primitive block operations of an eFuse controller
pub trait EfuseInterface {
    /// Read physical words of `block`, check words included, into `words`.
    fn read_block_words(&mut self, block: u8, words: &mut [u32]) -> Result<(), Error>;

    /// Load the program registers of `block` with `words`.
    ///
    /// Only bits which are set in `words` are burned.
    fn write_program_words(&mut self, block: u8, words: &[u32]) -> Result<(), Error>;

    /// Trigger the burn of the loaded program registers.
    fn begin_program(&mut self, block: u8) -> Result<(), Error>;

    /// Block until the controller is idle again.
    ///
    /// Returns `Ok(false)` if the controller never reported completion.
    fn wait_program_done(&mut self, block: u8) -> Result<bool, Error>;

    /// Zero the program registers so they do not leak the burned contents.
    fn clear_program_registers(&mut self, block: u8) -> Result<(), Error>;

    /// Error status bits of `block`, if the controller has any.
    fn error_status(&mut self, _block: u8) -> Result<Option<HardwareErrorStatus>, Error> {
        Ok(None)
    }
}

impl<T: EfuseInterface + ?Sized> EfuseInterface for &mut T {
    fn read_block_words(&mut self, block: u8, words: &mut [u32]) -> Result<(), Error> {
        (**self).read_block_words(block, words)
    }

    fn write_program_words(&mut self, block: u8, words: &[u32]) -> Result<(), Error> {
        (**self).write_program_words(block, words)
    }

    fn begin_program(&mut self, block: u8) -> Result<(), Error> {
        (**self).begin_program(block)
    }

    fn wait_program_done(&mut self, block: u8) -> Result<bool, Error> {
        (**self).wait_program_done(block)
    }

    fn clear_program_registers(&mut self, block: u8) -> Result<(), Error> {
        (**self).clear_program_registers(block)
    }

    fn error_status(&mut self, block: u8) -> Result<Option<HardwareErrorStatus>, Error> {
        (**self).error_status(block)
    }
}
