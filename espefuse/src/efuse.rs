//! Field access and batched burning
//!
//! [Efuse] owns the hardware interface of one device together with a shadow
//! of every block. Reads are served from the shadow. Writes are staged in a
//! [Batch], which holds the hardware lock until it is committed or dropped,
//! so there is only ever one burn sequence in flight.

use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, TryLockError};

use bytemuck::Pod;
use log::{debug, error, info, warn};

use crate::{
    block::{self, BlockShadow, BlockState, SetMask},
    coding::{self, CodingScheme},
    field::{self, EfuseField},
    interface::EfuseInterface,
    targets::{EfuseBlock, EfuseLayout},
    Error,
};

/// eFuse controller of a single device
pub struct Efuse<I> {
    layout: &'static EfuseLayout,
    shadow: RwLock<Vec<BlockShadow>>,
    hardware: Mutex<I>,
}

impl<I> std::fmt::Debug for Efuse<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Efuse")
            .field("layout", &self.layout.name)
            .finish_non_exhaustive()
    }
}

fn slot(layout: &EfuseLayout, block: u8) -> Result<usize, Error> {
    layout
        .blocks
        .iter()
        .position(|b| b.index == block)
        .ok_or(Error::InvalidBlock(block))
}

/// Whether a single-bit BLOCK0 flag is set.
fn flag_set(flag: Option<EfuseField>, block0: &[u8]) -> bool {
    flag.and_then(|flag| flag.extents.first().copied())
        .is_some_and(|extent| {
            let bit = extent.bit_start as usize;
            bit / 8 < block0.len() && field::get_bit(block0, bit)
        })
}

fn write_protected(def: &EfuseBlock, shadow: &[BlockShadow]) -> bool {
    flag_set(def.write_disable, &shadow[0].logical)
}

fn read_protected(def: &EfuseBlock, shadow: &[BlockShadow]) -> bool {
    flag_set(def.read_disable, &shadow[0].logical)
}

fn read_all<I: EfuseInterface>(
    interface: &mut I,
    layout: &EfuseLayout,
) -> Result<Vec<BlockShadow>, Error> {
    let block0 = layout.block(0)?;
    if layout.blocks.first() != Some(block0) {
        return Err(Error::InvalidBlock(0));
    }

    let mut shadow = vec![BlockShadow::read(interface, block0, CodingScheme::None)?];
    for def in &layout.blocks[1..] {
        let scheme = layout.coding_scheme(def.index, &shadow[0].logical)?;
        shadow.push(BlockShadow::read(interface, def, scheme)?);
    }

    Ok(shadow)
}

impl<I: EfuseInterface> Efuse<I> {
    /// Read every block of `layout` through `interface`.
    ///
    /// BLOCK0 is read first, as it determines the coding scheme of the other
    /// blocks on some devices.
    pub fn new(mut interface: I, layout: &'static EfuseLayout) -> Result<Self, Error> {
        let shadow = read_all(&mut interface, layout)?;
        debug!(
            "Read {} eFuse blocks of the {}",
            shadow.len(),
            layout.name
        );

        Ok(Self {
            layout,
            shadow: RwLock::new(shadow),
            hardware: Mutex::new(interface),
        })
    }

    /// The layout this controller was created with.
    pub fn layout(&self) -> &'static EfuseLayout {
        self.layout
    }

    fn shadow(&self) -> Result<RwLockReadGuard<'_, Vec<BlockShadow>>, Error> {
        self.shadow.read().map_err(|_| Error::Poisoned)
    }

    fn set_state(&self, slot: usize, state: BlockState) -> Result<(), Error> {
        let mut shadow = self.shadow.write().map_err(|_| Error::Poisoned)?;
        let previous = std::mem::replace(&mut shadow[slot].state, state);
        if previous != state {
            debug!(
                "BLOCK{}: {previous} -> {state}",
                self.layout.blocks[slot].index
            );
        }
        Ok(())
    }

    fn store(&self, slot: usize, mut readback: BlockShadow, state: BlockState) -> Result<(), Error> {
        readback.state = state;
        let mut shadow = self.shadow.write().map_err(|_| Error::Poisoned)?;
        debug!(
            "BLOCK{}: {} -> {state}",
            self.layout.blocks[slot].index, shadow[slot].state
        );
        shadow[slot] = readback;
        Ok(())
    }

    /// Logical bytes of a block which may be read by software.
    fn readable<'s>(&self, shadow: &'s [BlockShadow], block: u8) -> Result<&'s [u8], Error> {
        let slot = slot(self.layout, block)?;
        if read_protected(&self.layout.blocks[slot], shadow) {
            return Err(Error::ReadProtected(block));
        }

        let blk = &shadow[slot];
        if blk.is_corrupted() {
            return Err(Error::Coding {
                block,
                failed: blk.status.failed.max(1),
            });
        }

        Ok(&blk.logical)
    }

    /// Read up to `max_bits` bits of a field.
    ///
    /// `max_bits` may exceed the declared width of the field up to the next
    /// whole byte. The result holds `ceil(min(max_bits, width) / 8)` bytes,
    /// least significant first.
    pub fn read_field_blob(&self, field: &EfuseField, max_bits: u32) -> Result<Vec<u8>, Error> {
        field.validate()?;
        if max_bits == 0 || max_bits as usize > field.byte_len() * 8 {
            return Err(Error::InvalidBitCount {
                field: field.name,
                requested: max_bits,
                width: field.bit_count,
            });
        }

        let bits = max_bits.min(field.bit_count) as usize;
        let mut out = vec![0u8; bits.div_ceil(8)];

        let shadow = self.shadow()?;
        let mut pos = 0usize;
        for extent in field.extents {
            if pos >= bits {
                break;
            }

            let logical = self.readable(&shadow, extent.block)?;
            check_extent(field, extent.block, extent.end(), logical.len())?;

            let count = (extent.bit_count as usize).min(bits - pos);
            field::or_bits(logical, extent.bit_start as usize, &mut out, pos, count);
            pos += count;
        }

        Ok(out)
    }

    /// Read a single-bit field.
    pub fn read_field_bit(&self, field: &EfuseField) -> Result<bool, Error> {
        field.validate()?;
        if field.bit_count != 1 {
            return Err(Error::NotABit {
                field: field.name,
                width: field.bit_count,
            });
        }

        Ok(self.read_field_blob(field, 1)?[0] & 1 != 0)
    }

    /// Number of bits set in a field.
    pub fn read_field_cnt(&self, field: &EfuseField) -> Result<u32, Error> {
        let bytes = self.read_field_blob(field, field.bit_count)?;
        Ok(field::count_ones(&bytes, field.bit_count as usize))
    }

    /// Read a field as a little-endian value.
    ///
    /// Fields wider than `T` are truncated, narrower ones are zero-extended.
    pub fn read_field_le<T: Pod>(&self, field: &EfuseField) -> Result<T, Error> {
        let size = std::mem::size_of::<T>();
        let bits = field.bit_count.min(size as u32 * 8);
        let bytes = self.read_field_blob(field, bits)?;

        let mut value = T::zeroed();
        bytemuck::bytes_of_mut(&mut value)[..bytes.len()].copy_from_slice(&bytes);
        Ok(value)
    }

    /// Declared width of a field, once it has been checked for consistency.
    pub fn field_size(&self, field: &EfuseField) -> Result<u32, Error> {
        field.validate()?;
        Ok(field.bit_count)
    }

    /// Decoded contents of a whole block.
    pub fn read_block(&self, block: u8) -> Result<Vec<u8>, Error> {
        let shadow = self.shadow()?;
        Ok(self.readable(&shadow, block)?.to_vec())
    }

    /// Physical words of a block as last read, check words included.
    pub fn raw_block_words(&self, block: u8) -> Result<Vec<u32>, Error> {
        let slot = slot(self.layout, block)?;
        Ok(self.shadow()?[slot].physical.clone())
    }

    /// Coding scheme currently in effect for a block.
    pub fn coding_scheme(&self, block: u8) -> Result<CodingScheme, Error> {
        let slot = slot(self.layout, block)?;
        Ok(self.shadow()?[slot].scheme)
    }

    /// Number of logical bytes a block currently holds.
    pub fn block_len(&self, block: u8) -> Result<usize, Error> {
        let slot = slot(self.layout, block)?;
        Ok(self.shadow()?[slot].logical.len())
    }

    /// Whether the last read of a block saw any coding error.
    ///
    /// Both software decoding and the controller's error status bits are
    /// considered. Errors which were corrected count as well.
    pub fn has_coding_error(&self, block: u8) -> Result<bool, Error> {
        let slot = slot(self.layout, block)?;
        Ok(self.shadow()?[slot].has_coding_error())
    }

    /// Check every readable block for uncorrectable coding errors.
    pub fn check_errors(&self) -> Result<(), Error> {
        let shadow = self.shadow()?;
        let mut first = None;

        for (def, blk) in self.layout.blocks.iter().zip(shadow.iter()) {
            if read_protected(def, &shadow) {
                continue;
            }

            if blk.is_corrupted() {
                error!("{} (BLOCK{}) can not be decoded", def.name, def.index);
                first.get_or_insert(Error::Coding {
                    block: def.index,
                    failed: blk.status.failed.max(1),
                });
            } else if blk.has_coding_error() {
                warn!("{} (BLOCK{}) has corrected coding errors", def.name, def.index);
            }
        }

        first.map_or(Ok(()), Err)
    }

    pub fn is_write_protected(&self, block: u8) -> Result<bool, Error> {
        let slot = slot(self.layout, block)?;
        Ok(write_protected(&self.layout.blocks[slot], &self.shadow()?))
    }

    pub fn is_read_protected(&self, block: u8) -> Result<bool, Error> {
        let slot = slot(self.layout, block)?;
        Ok(read_protected(&self.layout.blocks[slot], &self.shadow()?))
    }

    /// Whether a block holds no data and is neither write- nor read-protected.
    pub fn block_is_empty(&self, block: u8) -> Result<bool, Error> {
        let slot = slot(self.layout, block)?;
        let def = &self.layout.blocks[slot];
        let shadow = self.shadow()?;

        Ok(!write_protected(def, &shadow)
            && !read_protected(def, &shadow)
            && shadow[slot].physical.iter().all(|w| *w == 0))
    }

    pub fn block_state(&self, block: u8) -> Result<BlockState, Error> {
        let slot = slot(self.layout, block)?;
        Ok(self.shadow()?[slot].state)
    }

    /// Start a batch of writes.
    ///
    /// Blocks until no other batch is open. Must not be called while the
    /// same thread already holds a batch.
    pub fn batch(&self) -> Result<Batch<'_, I>, Error> {
        let hardware = self.hardware.lock().map_err(|_| Error::Poisoned)?;
        Ok(Batch::new(self, hardware))
    }

    /// Start a batch of writes if no other batch is open.
    pub fn try_batch(&self) -> Result<Option<Batch<'_, I>>, Error> {
        match self.hardware.try_lock() {
            Ok(hardware) => Ok(Some(Batch::new(self, hardware))),
            Err(TryLockError::WouldBlock) => Ok(None),
            Err(TryLockError::Poisoned(_)) => Err(Error::Poisoned),
        }
    }

    /// Read every block from hardware again.
    ///
    /// Blocks which are in the failed state stay failed.
    pub fn refresh(&self) -> Result<(), Error> {
        let mut hardware = self.hardware.lock().map_err(|_| Error::Poisoned)?;
        let fresh = read_all(&mut *hardware, self.layout)?;

        let mut shadow = self.shadow.write().map_err(|_| Error::Poisoned)?;
        for (old, mut new) in shadow.iter_mut().zip(fresh) {
            if old.state == BlockState::Failed {
                new.state = BlockState::Failed;
            }
            *old = new;
        }

        Ok(())
    }

    /// Re-read a failed block and return it to the idle state.
    ///
    /// Failed blocks reject further writes until their failure has been
    /// acknowledged, so burning them again is always an explicit decision.
    pub fn acknowledge_failure(&self, block: u8) -> Result<(), Error> {
        let slot = slot(self.layout, block)?;
        let mut hardware = self.hardware.lock().map_err(|_| Error::Poisoned)?;

        let scheme = self.coding_scheme(block)?;
        let readback = BlockShadow::read(&mut *hardware, &self.layout.blocks[slot], scheme)?;
        info!("BLOCK{block}: failure acknowledged");
        self.store(slot, readback, BlockState::Idle)
    }

    /// Give back the hardware interface.
    pub fn into_interface(self) -> Result<I, Error> {
        self.hardware.into_inner().map_err(|_| Error::Poisoned)
    }

    /// Re-resolve coding schemes after BLOCK0 changed and re-read the blocks
    /// whose scheme is different now.
    fn rescan_schemes(&self, interface: &mut I) -> Result<(), Error> {
        for (slot, def) in self.layout.blocks.iter().enumerate().skip(1) {
            let (current, scheme) = {
                let shadow = self.shadow()?;
                (
                    shadow[slot].scheme,
                    self.layout.coding_scheme(def.index, &shadow[0].logical)?,
                )
            };

            if current != scheme {
                info!("BLOCK{}: coding scheme changed from {current} to {scheme}", def.index);
                let readback = BlockShadow::read(interface, def, scheme)?;
                let state = self.shadow()?[slot].state;
                self.store(slot, readback, state)?;
            }
        }

        Ok(())
    }
}

fn check_extent(field: &EfuseField, block: u8, end: u32, logical_len: usize) -> Result<(), Error> {
    let available = logical_len as u32 * 8;
    if end > available {
        return Err(Error::ExtentOutOfRange {
            field: field.name,
            block,
            end,
            available,
        });
    }
    Ok(())
}

/// A set of pending writes
///
/// Writes only ever request bits to be set and do not touch the hardware.
/// [Batch::commit] burns every block with new bits, dropping the batch
/// discards them.
pub struct Batch<'a, I: EfuseInterface> {
    efuse: &'a Efuse<I>,
    hardware: MutexGuard<'a, I>,
    overlays: Vec<Option<SetMask>>,
}

impl<I: EfuseInterface> std::fmt::Debug for Batch<'_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Batch")
            .field("overlays", &self.overlays)
            .finish_non_exhaustive()
    }
}

impl<'a, I: EfuseInterface> Batch<'a, I> {
    fn new(efuse: &'a Efuse<I>, hardware: MutexGuard<'a, I>) -> Self {
        Self {
            efuse,
            hardware,
            overlays: vec![None; efuse.layout.blocks.len()],
        }
    }

    /// Whether a write to `block` may be staged at all.
    fn check_writable(&self, shadow: &[BlockShadow], block: u8) -> Result<usize, Error> {
        let slot = slot(self.efuse.layout, block)?;
        let def = &self.efuse.layout.blocks[slot];

        if write_protected(def, shadow) {
            return Err(Error::WriteProtected(block));
        }
        if read_protected(def, shadow) {
            return Err(Error::ReadProtected(block));
        }
        if shadow[slot].state == BlockState::Failed {
            return Err(Error::BlockFailed(block));
        }

        Ok(slot)
    }

    fn stage(&mut self, slots: Vec<usize>, apply: impl Fn(usize, &mut SetMask)) -> Result<(), Error> {
        {
            let shadow = self.efuse.shadow()?;
            for &slot in &slots {
                let len = shadow[slot].logical.len();
                apply(slot, self.overlays[slot].get_or_insert_with(|| SetMask::new(len)));
            }
        }

        for slot in slots {
            self.efuse.set_state(slot, BlockState::Staging)?;
        }

        Ok(())
    }

    /// Stage the bits of `bytes` for a field.
    ///
    /// `bytes` must cover the declared width of the field. Zero bits leave the
    /// field untouched, a burned bit can never be cleared.
    pub fn write_field_blob(&mut self, field: &EfuseField, bytes: &[u8]) -> Result<(), Error> {
        field.validate()?;

        if bytes.len() < field.byte_len() {
            return Err(Error::BufferTooSmall {
                field: field.name,
                needed: field.byte_len(),
                got: bytes.len(),
            });
        }
        if (field.bit_count as usize..bytes.len() * 8).any(|bit| field::get_bit(bytes, bit)) {
            return Err(Error::ValueExceedsField {
                field: field.name,
                width: field.bit_count,
            });
        }

        let mut slots = Vec::new();
        {
            let shadow = self.efuse.shadow()?;
            for extent in field.extents {
                let slot = self.check_writable(&shadow, extent.block)?;
                check_extent(field, extent.block, extent.end(), shadow[slot].logical.len())?;
                if !slots.contains(&slot) {
                    slots.push(slot);
                }
            }
        }

        let layout = self.efuse.layout;
        debug!("Staging {} ({} bits)", field.name, field.bit_count);
        self.stage(slots, |slot, mask| {
            let mut pos = 0;
            for extent in field.extents {
                let count = extent.bit_count as usize;
                if layout.blocks[slot].index == extent.block {
                    mask.set_from(bytes, pos, extent.bit_start as usize, count);
                }
                pos += count;
            }
        })
    }

    /// Stage a single-bit field.
    pub fn write_field_bit(&mut self, field: &EfuseField) -> Result<(), Error> {
        field.validate()?;
        if field.bit_count != 1 {
            return Err(Error::NotABit {
                field: field.name,
                width: field.bit_count,
            });
        }

        self.write_field_blob(field, &[1])
    }

    /// Stage a run of `count` set bits starting at bit 0 of a field.
    pub fn write_field_cnt(&mut self, field: &EfuseField, count: u32) -> Result<(), Error> {
        field.validate()?;
        if count == 0 || count > field.bit_count {
            return Err(Error::InvalidBitCount {
                field: field.name,
                requested: count,
                width: field.bit_count,
            });
        }

        let mut bytes = vec![0u8; field.byte_len()];
        for bit in 0..count as usize {
            field::set_bit(&mut bytes, bit);
        }

        self.write_field_blob(field, &bytes)
    }

    /// Stage the logical contents of a whole block, e.g. a key.
    pub fn write_block(&mut self, block: u8, bytes: &[u8]) -> Result<(), Error> {
        let slot = {
            let shadow = self.efuse.shadow()?;
            let slot = self.check_writable(&shadow, block)?;
            let blk = &shadow[slot];
            if bytes.len() > blk.logical.len() {
                return Err(Error::InvalidLength {
                    scheme: blk.scheme,
                    len: bytes.len(),
                });
            }
            slot
        };

        debug!("Staging {} bytes for BLOCK{block}", bytes.len());
        self.stage(vec![slot], |_, mask| {
            mask.set_from(bytes, 0, 0, bytes.len() * 8);
        })
    }

    /// Stage the write-protect bit of a block.
    pub fn set_write_protect(&mut self, block: u8) -> Result<(), Error> {
        let def = self.efuse.layout.block(block)?;
        let flag = def
            .write_disable
            .ok_or(Error::NoProtectionBit(block, "write-protect"))?;
        self.write_field_bit(&flag)
    }

    /// Stage the read-protect bit of a block.
    pub fn set_read_protect(&mut self, block: u8) -> Result<(), Error> {
        let def = self.efuse.layout.block(block)?;
        let flag = def
            .read_disable
            .ok_or(Error::NoProtectionBit(block, "read-protect"))?;
        self.write_field_bit(&flag)
    }

    /// Bits staged for `block` which are not burned yet.
    pub fn pending(&self, block: u8) -> Result<Option<SetMask>, Error> {
        let slot = slot(self.efuse.layout, block)?;
        let shadow = self.efuse.shadow()?;
        Ok(self.overlays[slot]
            .as_ref()
            .map(|mask| mask.new_bits(&shadow[slot].logical)))
    }

    /// Check the staged writes against the current device state.
    ///
    /// Returns the new bits of every block which needs burning.
    fn validate(&self) -> Result<Vec<(usize, SetMask)>, Error> {
        let layout = self.efuse.layout;
        let shadow = self.efuse.shadow()?;
        let mut burns = Vec::new();

        for (slot, overlay) in self.overlays.iter().enumerate() {
            let Some(overlay) = overlay else {
                continue;
            };

            // Staging already checked this, the shadow can not change while
            // the batch holds the hardware lock
            let def = &layout.blocks[slot];
            self.check_writable(&shadow, def.index)?;

            let current = &shadow[slot];
            let new = overlay.new_bits(&current.logical);
            if new.is_empty() {
                debug!("BLOCK{}: all requested bits are already burned", def.index);
                continue;
            }

            if let Some(unit) = current.scheme.program_unit(current.logical.len()) {
                for (i, chunk) in current.logical.chunks(unit).enumerate() {
                    let range = i * unit..i * unit + chunk.len();
                    if new.intersects(range) && chunk.iter().any(|b| *b != 0) {
                        return Err(Error::RepeatedProgramming {
                            block: def.index,
                            scheme: current.scheme,
                        });
                    }
                }
            }

            burns.push((slot, new));
        }

        // A coding scheme change must be burned on its own
        if let Some((_, block0)) = burns.iter().find(|(slot, _)| *slot == 0) {
            for (slot, _) in &burns {
                let Some(selector) = layout.scheme_selector(layout.blocks[*slot].index) else {
                    continue;
                };
                let selector_changes = selector.field.extents.iter().any(|extent| {
                    (extent.bit_start as usize..extent.end() as usize)
                        .any(|bit| field::get_bit(block0.as_bytes(), bit))
                });
                if selector_changes {
                    return Err(Error::CodingSchemeChangePending(layout.blocks[*slot].index));
                }
            }
        }

        Ok(burns)
    }

    /// Burn every staged block.
    ///
    /// Nothing is burned if any staged block fails validation. Once burning
    /// has started, every block is attempted even when an earlier one failed,
    /// and the first error is returned. Blocks are burned from the highest
    /// index down, so protection bits in BLOCK0 take effect last.
    pub fn commit(mut self) -> Result<(), Error> {
        if self.overlays.iter().all(Option::is_none) {
            return Err(Error::NothingStaged);
        }

        let mut burns = self.validate()?;
        burns.sort_by(|a, b| b.0.cmp(&a.0));

        let mut first_error = None;
        for (slot, new) in &burns {
            if let Err(err) = self.burn(*slot, new) {
                error!("BLOCK{}: {err}", self.efuse.layout.blocks[*slot].index);
                first_error.get_or_insert(err);
            }
        }

        if burns.iter().any(|(slot, _)| *slot == 0) {
            if let Err(err) = self.efuse.rescan_schemes(&mut *self.hardware) {
                first_error.get_or_insert(err);
            }
        }

        for overlay in &mut self.overlays {
            overlay.take();
        }
        self.reset_staging();

        first_error.map_or(Ok(()), Err)
    }

    fn burn(&mut self, slot: usize, new: &SetMask) -> Result<(), Error> {
        let def = &self.efuse.layout.blocks[slot];
        let (scheme, previous, intended) = {
            let shadow = self.efuse.shadow()?;
            let current = &shadow[slot];
            (
                current.scheme,
                current.physical.clone(),
                new.apply(&current.logical),
            )
        };

        self.efuse.set_state(slot, BlockState::Encoding)?;
        let target = match coding::encode(scheme, &intended) {
            Ok(target) => target,
            Err(err) => {
                self.efuse.set_state(slot, BlockState::Idle)?;
                return Err(err);
            }
        };

        // Only bits which are not set yet need programming
        let program: Vec<u32> = target
            .iter()
            .zip(previous.iter().chain(std::iter::repeat(&0)))
            .map(|(wr, rd)| wr & !rd)
            .collect();

        self.efuse.set_state(slot, BlockState::Programming)?;
        debug!("BLOCK{}: programming {:08x?}", def.index, program);
        let programmed = block::program(&mut *self.hardware, def.index, &program);

        self.efuse.set_state(slot, BlockState::Verifying)?;
        let readback = match BlockShadow::read(&mut *self.hardware, def, scheme) {
            Ok(readback) => readback,
            Err(err) => {
                self.efuse.set_state(slot, BlockState::Failed)?;
                return Err(err);
            }
        };

        let result = match programmed {
            Ok(true) => block::verify(def.index, &previous, &target, &intended, &readback),
            Ok(false) => Err(Error::ProgramTimeout(def.index)),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                info!("{} (BLOCK{}) burned successfully", def.name, def.index);
                self.efuse.store(slot, readback, BlockState::Idle)
            }
            Err(err) => {
                self.efuse.store(slot, readback, BlockState::Failed)?;
                Err(err)
            }
        }
    }

    fn reset_staging(&self) {
        let Ok(mut shadow) = self.efuse.shadow.write() else {
            warn!("eFuse shadow lock is poisoned, block states were not reset");
            return;
        };

        for blk in shadow.iter_mut() {
            if blk.state == BlockState::Staging {
                blk.state = BlockState::Idle;
            }
        }
    }
}

impl<I: EfuseInterface> Drop for Batch<'_, I> {
    fn drop(&mut self) {
        if self.overlays.iter().any(Option::is_some) {
            debug!("Discarding uncommitted eFuse writes");
        }
        self.reset_staging();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{targets::Chip, VirtualEfuse};

    fn blank(chip: Chip) -> Efuse<VirtualEfuse> {
        Efuse::new(VirtualEfuse::new(chip.layout()), chip.layout()).unwrap()
    }

    #[test]
    fn staging_is_discarded_on_drop() {
        let efuse = blank(Chip::Esp32s3);
        let field = Chip::Esp32s3.field("SPI_BOOT_CRYPT_CNT").unwrap();

        {
            let mut batch = efuse.batch().unwrap();
            batch.write_field_cnt(field, 2).unwrap();
            assert_eq!(efuse.block_state(0).unwrap(), BlockState::Staging);
            assert_eq!(efuse.block_state(1).unwrap(), BlockState::Idle);
            assert!(!batch.pending(0).unwrap().unwrap().is_empty());
        }

        assert_eq!(efuse.block_state(0).unwrap(), BlockState::Idle);
        assert_eq!(efuse.read_field_cnt(field).unwrap(), 0);
        assert_eq!(efuse.into_interface().unwrap().burn_count(), 0);
    }

    #[test]
    fn only_one_batch_at_a_time() {
        let efuse = blank(Chip::Esp32);

        let batch = efuse.batch().unwrap();
        assert!(efuse.try_batch().unwrap().is_none());
        drop(batch);
        assert!(efuse.try_batch().unwrap().is_some());
    }

    #[test]
    fn dropping_a_batch_survives_a_poisoned_shadow() {
        let efuse = blank(Chip::Esp32);
        let field = Chip::Esp32.field("FLASH_CRYPT_CNT").unwrap();

        let mut batch = efuse.batch().unwrap();
        batch.write_field_cnt(field, 1).unwrap();

        std::thread::scope(|s| {
            let result = s
                .spawn(|| {
                    let _shadow = efuse.shadow.write().unwrap();
                    panic!("shadow update interrupted");
                })
                .join();
            assert!(result.is_err());
        });

        drop(batch);
        assert!(matches!(efuse.block_state(0), Err(Error::Poisoned)));
        assert!(efuse.try_batch().unwrap().is_some());
    }

    #[test]
    fn unknown_blocks() {
        let efuse = blank(Chip::Esp32);

        assert!(matches!(efuse.read_block(4), Err(Error::InvalidBlock(4))));
        assert!(matches!(efuse.coding_scheme(9), Err(Error::InvalidBlock(9))));
        assert!(matches!(
            efuse.batch().unwrap().write_block(4, &[1]),
            Err(Error::InvalidBlock(4))
        ));
    }

    #[test]
    fn le_values_are_truncated_or_extended() {
        let chip = Chip::Esp32s3;
        let efuse = blank(chip);
        let mac = chip.field("MAC").unwrap();

        let mut batch = efuse.batch().unwrap();
        batch
            .write_field_blob(mac, &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66])
            .unwrap();
        batch.commit().unwrap();

        assert_eq!(efuse.read_field_le::<u64>(mac).unwrap(), 0x6655_4433_2211);
        assert_eq!(efuse.read_field_le::<u16>(mac).unwrap(), 0x2211);
        assert_eq!(efuse.field_size(mac).unwrap(), 48);
    }
}
