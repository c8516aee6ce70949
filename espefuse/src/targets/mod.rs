//! Supported target devices
//!
//! Each device is described by an [EfuseLayout]: the list of its eFuse blocks
//! together with how each block is coded and protected, plus the table of
//! named fields. A layout is handed to [Efuse::new](crate::Efuse::new), so
//! custom layouts can be used in the same way as the built-in ones.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

use crate::{
    coding::CodingScheme,
    field::{self, EfuseField},
    Error,
};

pub mod efuse;

mod esp32;
mod esp32s2;
mod esp32s3;

/// How the coding scheme of a block is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCoding {
    /// The scheme is fixed by the hardware
    Fixed(CodingScheme),
    /// The scheme is selected by a field in BLOCK0
    Selected(&'static SchemeSelector),
}

/// A BLOCK0 field whose value selects a coding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeSelector {
    pub field: EfuseField,
    /// Field values and the scheme each of them selects
    pub schemes: &'static [(u32, CodingScheme)],
}

impl SchemeSelector {
    /// Scheme selected by the current contents of BLOCK0.
    fn select(&self, block: u8, block0: &[u8]) -> Result<CodingScheme, Error> {
        let mut value = 0u32;
        let mut bit = 0usize;
        for extent in self.field.extents {
            for i in 0..extent.bit_count as usize {
                let src = extent.bit_start as usize + i;
                if src / 8 < block0.len() && field::get_bit(block0, src) {
                    value |= 1 << bit;
                }
                bit += 1;
            }
        }

        self.schemes
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, scheme)| *scheme)
            .ok_or(Error::UnknownCodingScheme { block, value })
    }
}

/// A single eFuse block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EfuseBlock {
    /// Index of the block
    pub index: u8,
    /// Name of the block as used by ESP-IDF
    pub name: &'static str,
    /// Number of data registers this block contains.
    ///
    /// Each register is a single 4-byte word. Check registers of
    /// Reed-Solomon blocks are not included.
    pub length: u8,
    /// Coding scheme of the block
    pub coding: BlockCoding,
    /// BLOCK0 bit disabling further writes to this block
    pub write_disable: Option<EfuseField>,
    /// BLOCK0 bit disabling software reads of this block
    pub read_disable: Option<EfuseField>,
}

impl EfuseBlock {
    /// Largest number of physical words any selectable scheme needs.
    pub fn max_physical_words(&self) -> usize {
        match self.coding {
            BlockCoding::Fixed(scheme) => scheme.physical_words(self.length as usize),
            BlockCoding::Selected(selector) => selector
                .schemes
                .iter()
                .map(|(_, scheme)| scheme.physical_words(self.length as usize))
                .max()
                .unwrap_or(self.length as usize),
        }
    }
}

/// eFuse description of a device
#[derive(Debug)]
pub struct EfuseLayout {
    /// Name of the device
    pub name: &'static str,
    /// All eFuse blocks, ordered by index starting at 0
    pub blocks: &'static [EfuseBlock],
    /// All named fields
    pub fields: &'static [EfuseField],
}

impl EfuseLayout {
    /// Look up a block by index.
    pub fn block(&self, index: u8) -> Result<&EfuseBlock, Error> {
        self.blocks
            .iter()
            .find(|block| block.index == index)
            .ok_or(Error::InvalidBlock(index))
    }

    /// Look up a field by its name, ignoring case.
    pub fn field(&self, name: &str) -> Option<&EfuseField> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Resolve the coding scheme of `block` from the logical view of BLOCK0.
    pub fn coding_scheme(&self, block: u8, block0: &[u8]) -> Result<CodingScheme, Error> {
        // BLOCK0 is always stored without coding
        if block == 0 {
            return Ok(CodingScheme::None);
        }

        match self.block(block)?.coding {
            BlockCoding::Fixed(scheme) => Ok(scheme),
            BlockCoding::Selected(selector) => selector.select(block, block0),
        }
    }

    /// Selector field governing the coding scheme of `block`, if any.
    pub fn scheme_selector(&self, block: u8) -> Option<&'static SchemeSelector> {
        match self.block(block).ok()?.coding {
            BlockCoding::Selected(selector) => Some(selector),
            BlockCoding::Fixed(_) => None,
        }
    }
}

/// All supported devices
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    VariantNames,
    Deserialize,
    Serialize,
)]
#[non_exhaustive]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Chip {
    /// ESP32
    Esp32,
    /// ESP32-S2
    Esp32s2,
    /// ESP32-S3
    Esp32s3,
}

impl Chip {
    /// The eFuse layout of this device.
    pub fn layout(&self) -> &'static EfuseLayout {
        match self {
            Chip::Esp32 => &esp32::LAYOUT,
            Chip::Esp32s2 => &esp32s2::LAYOUT,
            Chip::Esp32s3 => &esp32s3::LAYOUT,
        }
    }

    /// All named fields of this device.
    pub fn fields(&self) -> &'static [EfuseField] {
        self.layout().fields
    }

    /// Look up a field of this device by name.
    pub fn field(&self, name: &str) -> Result<&'static EfuseField, Error> {
        self.fields()
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::FieldNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn block_tables_are_ordered() {
        for chip in Chip::iter() {
            for (i, block) in chip.layout().blocks.iter().enumerate() {
                assert_eq!(block.index as usize, i, "{chip}");
            }
        }
    }

    #[test]
    fn fields_are_consistent() {
        for chip in Chip::iter() {
            let layout = chip.layout();
            for field in layout.fields {
                field.validate().unwrap();
                for extent in field.extents {
                    let block = layout.block(extent.block).unwrap();
                    assert!(extent.end() <= block.length as u32 * 32, "{}", field.name);
                }
            }
        }
    }

    #[test]
    fn protection_bits_live_in_block0() {
        for chip in Chip::iter() {
            for block in chip.layout().blocks {
                for bit in [block.write_disable, block.read_disable].into_iter().flatten() {
                    assert_eq!(bit.bit_count, 1);
                    assert!(bit.extents.iter().all(|e| e.block == 0));
                }
            }
        }
    }

    #[test]
    fn esp32_coding_scheme_selection() {
        let layout = Chip::Esp32.layout();
        let mut block0 = vec![0u8; 28];

        assert_eq!(layout.coding_scheme(1, &block0).unwrap(), CodingScheme::None);

        // CODING_SCHEME lives in bits 192..194
        block0[24] = 0b01;
        assert_eq!(layout.coding_scheme(3, &block0).unwrap(), CodingScheme::ThreeFour);
        block0[24] = 0b10;
        assert_eq!(layout.coding_scheme(2, &block0).unwrap(), CodingScheme::Repeat);
        block0[24] = 0b11;
        assert_eq!(layout.coding_scheme(1, &block0).unwrap(), CodingScheme::None);

        assert_eq!(layout.coding_scheme(0, &block0).unwrap(), CodingScheme::None);
    }

    #[test]
    fn field_lookup() {
        assert_eq!(Chip::Esp32s3.field("mac").unwrap().bit_count, 48);
        assert!(matches!(
            Chip::Esp32.field("NOT_A_FIELD"),
            Err(Error::FieldNotFound(_))
        ));
        assert_eq!("esp32s2".parse::<Chip>().unwrap(), Chip::Esp32s2);
    }
}
