//! eFuse field descriptors
//!
//! A field is a named value made up of one or more [Extent]s. Extents are
//! concatenated in declaration order, least significant bit first, so a
//! field may gather bits scattered over a block or continued in another one.

use crate::Error;

/// A contiguous run of bits within the logical view of a block
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Extent {
    /// The block in which the bits are located
    pub block: u8,
    /// Offset of the first bit within the block
    pub bit_start: u16,
    /// Number of bits
    pub bit_count: u16,
}

impl Extent {
    /// Creates a new extent.
    pub const fn new(block: u8, bit_start: u16, bit_count: u16) -> Self {
        Self {
            block,
            bit_start,
            bit_count,
        }
    }

    /// One past the last bit covered by this extent.
    pub fn end(&self) -> u32 {
        self.bit_start as u32 + self.bit_count as u32
    }
}

/// A named eFuse field
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct EfuseField {
    /// Name of the field, as used by ESP-IDF
    pub name: &'static str,
    /// Declared width of the field in bits
    pub bit_count: u32,
    /// Bit ranges making up the field, least significant first
    pub extents: &'static [Extent],
}

impl EfuseField {
    /// Creates a new eFuse field definition.
    pub const fn new(name: &'static str, bit_count: u32, extents: &'static [Extent]) -> Self {
        Self {
            name,
            bit_count,
            extents,
        }
    }

    /// Checks that the extents add up to the declared width.
    pub fn validate(&self) -> Result<(), Error> {
        let extents: u32 = self.extents.iter().map(|e| e.bit_count as u32).sum();

        if extents != self.bit_count || self.bit_count == 0 {
            return Err(Error::FieldWidthMismatch {
                field: self.name,
                declared: self.bit_count,
                extents,
            });
        }

        Ok(())
    }

    /// Number of bytes needed to hold the field.
    pub fn byte_len(&self) -> usize {
        (self.bit_count as usize).div_ceil(8)
    }

    /// Whether any extent of the field lives in `block`.
    pub fn touches(&self, block: u8) -> bool {
        self.extents.iter().any(|e| e.block == block)
    }

    /// Blocks touched by the field, in extent order without duplicates.
    pub fn blocks(&self) -> Vec<u8> {
        let mut blocks: Vec<u8> = Vec::new();
        for extent in self.extents {
            if !blocks.contains(&extent.block) {
                blocks.push(extent.block);
            }
        }
        blocks
    }
}

pub(crate) fn get_bit(bytes: &[u8], bit: usize) -> bool {
    bytes[bit / 8] & (1 << (bit % 8)) != 0
}

pub(crate) fn set_bit(bytes: &mut [u8], bit: usize) {
    bytes[bit / 8] |= 1 << (bit % 8);
}

/// Copy `count` bits from `src` starting at `src_off` into `dst` starting at
/// `dst_off`. Only ones are transferred, bits already set in `dst` stay set.
pub(crate) fn or_bits(src: &[u8], src_off: usize, dst: &mut [u8], dst_off: usize, count: usize) {
    for i in 0..count {
        if get_bit(src, src_off + i) {
            set_bit(dst, dst_off + i);
        }
    }
}

/// Number of set bits in the first `count` bits of `bytes`.
pub(crate) fn count_ones(bytes: &[u8], count: usize) -> u32 {
    (0..count).filter(|bit| get_bit(bytes, *bit)).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPLIT: EfuseField = EfuseField::new(
        "SPLIT",
        16,
        &[Extent::new(0, 4, 4), Extent::new(1, 20, 12)],
    );

    const BROKEN: EfuseField = EfuseField::new("BROKEN", 8, &[Extent::new(0, 0, 7)]);

    #[test]
    fn validates_width() {
        assert!(SPLIT.validate().is_ok());
        assert!(matches!(
            BROKEN.validate(),
            Err(Error::FieldWidthMismatch {
                declared: 8,
                extents: 7,
                ..
            })
        ));
    }

    #[test]
    fn lists_blocks() {
        assert_eq!(SPLIT.blocks(), vec![0, 1]);
        assert!(SPLIT.touches(1));
        assert!(!SPLIT.touches(2));
        assert_eq!(SPLIT.byte_len(), 2);
    }

    #[test]
    fn bit_copy_is_lsb_first() {
        let src = [0b1011_0000, 0b0000_0001];
        let mut dst = [0u8; 2];
        or_bits(&src, 4, &mut dst, 3, 5);
        assert_eq!(dst, [0b1101_1000, 0]);
        assert_eq!(count_ones(&src, 16), 4);
    }
}
