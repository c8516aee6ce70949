//! Block shadows and the burn protocol
//!
//! A [BlockShadow] caches what was last read from one eFuse block, both as
//! raw physical words and as decoded logical bytes. Writes never touch the
//! shadow directly: they accumulate in a [SetMask] until the batch is
//! committed and the block has been burned and read back.

use log::{trace, warn};
use strum::Display;

use crate::{
    coding::{self, CodingScheme, DecodeStatus},
    field,
    interface::{EfuseInterface, HardwareErrorStatus},
    targets::EfuseBlock,
    Error,
};

/// Commit state of a single block
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Display)]
pub enum BlockState {
    /// The shadow matches the hardware
    #[default]
    Idle,
    /// Writes are pending in an open batch
    Staging,
    /// The new block contents are being encoded
    Encoding,
    /// The burn sequence is running
    Programming,
    /// The block is being read back and compared
    Verifying,
    /// A burn did not produce the intended contents
    Failed,
}

/// Bits requested to be set in a block
///
/// There is no way to clear a bit once set, matching the hardware which
/// can only ever turn a 0 into a 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMask {
    bits: Vec<u8>,
}

impl SetMask {
    /// An empty mask covering `len` logical bytes.
    pub fn new(len: usize) -> Self {
        Self { bits: vec![0; len] }
    }

    /// Number of bytes covered by the mask.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the mask requests no bits at all.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|b| *b == 0)
    }

    /// Request a single bit.
    pub fn set(&mut self, bit: usize) {
        field::set_bit(&mut self.bits, bit);
    }

    /// Request every bit which is set in `count` bits of `src` starting at
    /// `src_off`, placing them at `dst_off`.
    pub fn set_from(&mut self, src: &[u8], src_off: usize, dst_off: usize, count: usize) {
        field::or_bits(src, src_off, &mut self.bits, dst_off, count);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// `base` with all requested bits set.
    pub fn apply(&self, base: &[u8]) -> Vec<u8> {
        base.iter()
            .zip(self.bits.iter().chain(std::iter::repeat(&0)))
            .map(|(b, m)| b | m)
            .collect()
    }

    /// The requested bits which are not already set in `base`.
    pub fn new_bits(&self, base: &[u8]) -> SetMask {
        let bits = self
            .bits
            .iter()
            .zip(base.iter().chain(std::iter::repeat(&0)))
            .map(|(m, b)| m & !b)
            .collect();

        SetMask { bits }
    }

    /// Whether any requested bit lies within `bytes`.
    pub fn intersects(&self, bytes: std::ops::Range<usize>) -> bool {
        self.bits
            .get(bytes)
            .is_some_and(|range| range.iter().any(|b| *b != 0))
    }
}

/// Cached contents of one eFuse block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockShadow {
    /// Physical words as read, check words included
    pub physical: Vec<u32>,
    /// Decoded logical bytes
    pub logical: Vec<u8>,
    /// Coding scheme used to decode the block
    pub scheme: CodingScheme,
    /// Outcome of the software decode
    pub status: DecodeStatus,
    /// Error status reported by the controller, if it provides one
    pub hardware_status: Option<HardwareErrorStatus>,
    pub state: BlockState,
}

impl BlockShadow {
    /// Read and decode `block` from the hardware.
    pub(crate) fn read<I: EfuseInterface + ?Sized>(
        interface: &mut I,
        block: &EfuseBlock,
        scheme: CodingScheme,
    ) -> Result<Self, Error> {
        let mut physical = vec![0u32; scheme.physical_words(block.length as usize)];
        interface.read_block_words(block.index, &mut physical)?;
        let hardware_status = interface.error_status(block.index)?;

        let decoded = coding::decode(scheme, &physical)?;
        trace!(
            "BLOCK{} ({scheme}): {:08x?} -> {:02x?}",
            block.index,
            physical,
            decoded.bytes
        );

        if decoded.status.corrected > 0 {
            warn!(
                "BLOCK{}: {} coding error(s) were corrected",
                block.index, decoded.status.corrected
            );
        }

        Ok(Self {
            physical,
            logical: decoded.bytes,
            scheme,
            status: decoded.status,
            hardware_status,
            state: BlockState::Idle,
        })
    }

    /// Whether the last read saw any coding error, corrected or not.
    pub fn has_coding_error(&self) -> bool {
        self.status.has_error() || self.hardware_status.is_some_and(|s| s.has_error())
    }

    /// Whether the logical contents can not be trusted.
    pub fn is_corrupted(&self) -> bool {
        !self.status.is_recoverable() || self.hardware_status.is_some_and(|s| s.fail)
    }
}

/// Load the program registers, burn them and wait for the controller.
///
/// The program registers are always cleared afterwards, even when an earlier
/// step failed. Returns `Ok(false)` if completion was never reported.
pub(crate) fn program<I: EfuseInterface + ?Sized>(
    interface: &mut I,
    block: u8,
    words: &[u32],
) -> Result<bool, Error> {
    let burned = interface
        .write_program_words(block, words)
        .and_then(|_| interface.begin_program(block))
        .and_then(|_| interface.wait_program_done(block));

    let cleared = interface.clear_program_registers(block);

    let done = burned?;
    cleared?;

    Ok(done)
}

/// Compare a block read back after burning against what was intended.
pub(crate) fn verify(
    block: u8,
    previous: &[u32],
    target: &[u32],
    intended: &[u8],
    readback: &BlockShadow,
) -> Result<(), Error> {
    let lost = previous
        .iter()
        .zip(readback.physical.iter())
        .any(|(prev, read)| prev & !read != 0);
    if lost {
        warn!("BLOCK{block}: previously burned bits are no longer set");
        return Err(Error::VerifyFailed(block));
    }

    if readback.is_corrupted() || readback.logical != intended {
        return Err(Error::VerifyFailed(block));
    }

    let missing: u32 = target
        .iter()
        .zip(readback.physical.iter())
        .map(|(wr, rd)| (wr & !rd).count_ones())
        .sum();
    if missing > 0 {
        warn!(
            "BLOCK{block}: {missing} bit(s) did not burn, the value was recovered by {} coding",
            readback.scheme
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_only_sets_bits() {
        let mut mask = SetMask::new(4);
        assert!(mask.is_empty());

        mask.set(3);
        mask.set_from(&[0xff], 0, 12, 4);
        assert_eq!(mask.as_bytes(), &[0x08, 0xf0, 0, 0]);

        assert_eq!(mask.apply(&[0x01, 0x0f, 0, 0x80]), vec![0x09, 0xff, 0, 0x80]);
        assert_eq!(mask.new_bits(&[0x08, 0x30, 0, 0]).as_bytes(), &[0, 0xc0, 0, 0]);
        assert!(mask.new_bits(&[0xff, 0xff, 0, 0]).is_empty());
    }

    #[test]
    fn mask_intersection() {
        let mut mask = SetMask::new(12);
        mask.set(8 * 7);

        assert!(!mask.intersects(0..6));
        assert!(mask.intersects(6..12));
        assert!(!mask.intersects(12..18));
    }

    #[test]
    fn verify_detects_lost_bits() {
        let readback = BlockShadow {
            physical: vec![0x01],
            logical: vec![0x01, 0, 0, 0],
            scheme: CodingScheme::None,
            status: DecodeStatus::default(),
            hardware_status: None,
            state: BlockState::Verifying,
        };

        assert!(verify(0, &[0x00], &[0x01], &[0x01, 0, 0, 0], &readback).is_ok());
        assert!(matches!(
            verify(0, &[0x02], &[0x03], &[0x03, 0, 0, 0], &readback),
            Err(Error::VerifyFailed(0))
        ));
        assert!(matches!(
            verify(0, &[0x00], &[0x03], &[0x03, 0, 0, 0], &readback),
            Err(Error::VerifyFailed(0))
        ));
    }
}
