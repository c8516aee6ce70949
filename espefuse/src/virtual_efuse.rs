//! An in-memory eFuse controller
//!
//! [VirtualEfuse] behaves like the real controller as far as this crate can
//! observe it: bits only ever go from 0 to 1, and the program registers have
//! to be cleared before they can be loaded again. Faults can be injected to
//! exercise the error paths, and the burned contents can be stored as a TOML
//! image to keep state between runs.

use std::{fs, path::Path};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    interface::{EfuseInterface, HardwareErrorStatus},
    targets::EfuseLayout,
    Error,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct VirtualBlock {
    index: u8,
    words: Vec<u32>,
    program: Vec<u32>,
    /// Bits which refuse to burn
    stuck: Vec<u32>,
    status: Option<HardwareErrorStatus>,
}

/// Serialized form of a virtual device
#[derive(Debug, Default, Deserialize, Serialize)]
struct Image {
    #[serde(default, rename = "block")]
    blocks: Vec<ImageBlock>,
}

#[derive(Debug, Deserialize, Serialize)]
struct ImageBlock {
    index: u8,
    words: Vec<u32>,
}

/// Host-side eFuse controller backed by memory
#[derive(Debug, Clone)]
pub struct VirtualEfuse {
    blocks: Vec<VirtualBlock>,
    hang: bool,
    burns: usize,
}

impl VirtualEfuse {
    /// A blank device with enough room for every block of `layout`.
    pub fn new(layout: &EfuseLayout) -> Self {
        let blocks = layout
            .blocks
            .iter()
            .map(|def| {
                let words = def.max_physical_words();
                VirtualBlock {
                    index: def.index,
                    words: vec![0; words],
                    program: vec![0; words],
                    stuck: vec![0; words],
                    status: None,
                }
            })
            .collect();

        Self {
            blocks,
            hang: false,
            burns: 0,
        }
    }

    /// Restore a device from a TOML image.
    pub fn from_image(layout: &EfuseLayout, image: &str) -> Result<Self, Error> {
        let image: Image = toml::from_str(image).map_err(|e| Error::ImageFormat(e.to_string()))?;
        let mut efuse = Self::new(layout);

        for block in image.blocks {
            let Ok(slot) = efuse.slot(block.index) else {
                return Err(Error::ImageFormat(format!(
                    "BLOCK{} does not exist on the {}",
                    block.index, layout.name
                )));
            };

            let stored = &mut efuse.blocks[slot].words;
            if block.words.len() > stored.len() {
                return Err(Error::ImageFormat(format!(
                    "BLOCK{} holds {} words, the image has {}",
                    block.index,
                    stored.len(),
                    block.words.len()
                )));
            }
            stored[..block.words.len()].copy_from_slice(&block.words);
        }

        Ok(efuse)
    }

    /// The current contents as a TOML image.
    pub fn to_image(&self) -> Result<String, Error> {
        let image = Image {
            blocks: self
                .blocks
                .iter()
                .map(|block| ImageBlock {
                    index: block.index,
                    words: block.words.clone(),
                })
                .collect(),
        };

        toml::to_string(&image).map_err(|e| Error::ImageFormat(e.to_string()))
    }

    /// Load an image file, or start blank if it does not exist yet.
    pub fn load(layout: &EfuseLayout, path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::new(layout));
        }

        Self::from_image(layout, &fs::read_to_string(path)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        fs::write(path, self.to_image()?)?;
        Ok(())
    }

    fn slot(&self, block: u8) -> Result<usize, Error> {
        self.blocks
            .iter()
            .position(|b| b.index == block)
            .ok_or(Error::InvalidBlock(block))
    }

    fn block_mut(&mut self, block: u8) -> Result<&mut VirtualBlock, Error> {
        let slot = self.slot(block)?;
        Ok(&mut self.blocks[slot])
    }

    /// Physical words of a block.
    pub fn words(&self, block: u8) -> Result<&[u32], Error> {
        Ok(&self.blocks[self.slot(block)?].words)
    }

    /// Burn `words` into a block directly, bypassing the program registers.
    pub fn preset(&mut self, block: u8, words: &[u32]) -> Result<(), Error> {
        let stored = &mut self.block_mut(block)?.words;
        if words.len() > stored.len() {
            return Err(Error::Interface(format!(
                "BLOCK{block} holds {} words, got {}",
                stored.len(),
                words.len()
            )));
        }

        for (dst, src) in stored.iter_mut().zip(words) {
            *dst |= src;
        }
        Ok(())
    }

    /// Make a physical bit refuse to burn.
    pub fn stick_bit(&mut self, block: u8, bit: usize) -> Result<(), Error> {
        let stuck = &mut self.block_mut(block)?.stuck;
        let word = stuck
            .get_mut(bit / 32)
            .ok_or_else(|| Error::Interface(format!("bit {bit} is outside of BLOCK{block}")))?;
        *word |= 1 << (bit % 32);
        Ok(())
    }

    /// Clear an already burned physical bit, as if the fuse had decayed.
    pub fn decay_bit(&mut self, block: u8, bit: usize) -> Result<(), Error> {
        let words = &mut self.block_mut(block)?.words;
        let word = words
            .get_mut(bit / 32)
            .ok_or_else(|| Error::Interface(format!("bit {bit} is outside of BLOCK{block}")))?;
        *word &= !(1 << (bit % 32));
        Ok(())
    }

    /// Never report completion of a burn.
    pub fn set_hang(&mut self, hang: bool) {
        self.hang = hang;
    }

    /// Error status reported for a block from now on.
    pub fn set_error_status(
        &mut self,
        block: u8,
        status: Option<HardwareErrorStatus>,
    ) -> Result<(), Error> {
        self.block_mut(block)?.status = status;
        Ok(())
    }

    /// Number of burn sequences triggered so far.
    pub fn burn_count(&self) -> usize {
        self.burns
    }

    /// Whether any program register still holds data.
    pub fn program_registers_loaded(&self) -> bool {
        self.blocks
            .iter()
            .any(|block| block.program.iter().any(|w| *w != 0))
    }
}

impl EfuseInterface for VirtualEfuse {
    fn read_block_words(&mut self, block: u8, words: &mut [u32]) -> Result<(), Error> {
        let stored = &self.blocks[self.slot(block)?].words;
        let Some(src) = stored.get(..words.len()) else {
            return Err(Error::Interface(format!(
                "BLOCK{block} holds {} words, {} were requested",
                stored.len(),
                words.len()
            )));
        };

        words.copy_from_slice(src);
        Ok(())
    }

    fn write_program_words(&mut self, block: u8, words: &[u32]) -> Result<(), Error> {
        let block_data = self.block_mut(block)?;
        if block_data.program.iter().any(|w| *w != 0) {
            return Err(Error::Interface(format!(
                "program registers of BLOCK{block} were not cleared"
            )));
        }
        if words.len() > block_data.program.len() {
            return Err(Error::Interface(format!(
                "BLOCK{block} has {} program registers, got {} words",
                block_data.program.len(),
                words.len()
            )));
        }

        block_data.program[..words.len()].copy_from_slice(words);
        Ok(())
    }

    fn begin_program(&mut self, block: u8) -> Result<(), Error> {
        let block_data = self.block_mut(block)?;
        for ((word, program), stuck) in block_data
            .words
            .iter_mut()
            .zip(&block_data.program)
            .zip(&block_data.stuck)
        {
            *word |= program & !stuck;
        }

        trace!("BLOCK{block}: burned {:08x?}", block_data.words);
        self.burns += 1;
        Ok(())
    }

    fn wait_program_done(&mut self, _block: u8) -> Result<bool, Error> {
        Ok(!self.hang)
    }

    fn clear_program_registers(&mut self, block: u8) -> Result<(), Error> {
        self.block_mut(block)?.program.fill(0);
        Ok(())
    }

    fn error_status(&mut self, block: u8) -> Result<Option<HardwareErrorStatus>, Error> {
        Ok(self.blocks[self.slot(block)?].status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::Chip;

    #[test]
    fn bits_only_go_up() {
        let mut efuse = VirtualEfuse::new(Chip::Esp32.layout());

        efuse.write_program_words(1, &[0x0000_00f0]).unwrap();
        efuse.begin_program(1).unwrap();
        efuse.clear_program_registers(1).unwrap();
        efuse.write_program_words(1, &[0x0000_000f]).unwrap();
        efuse.begin_program(1).unwrap();
        efuse.clear_program_registers(1).unwrap();

        assert_eq!(efuse.words(1).unwrap()[0], 0xff);
        assert_eq!(efuse.burn_count(), 2);
        assert!(!efuse.program_registers_loaded());
    }

    #[test]
    fn program_registers_must_be_cleared() {
        let mut efuse = VirtualEfuse::new(Chip::Esp32.layout());

        efuse.write_program_words(2, &[1]).unwrap();
        assert!(matches!(
            efuse.write_program_words(2, &[2]),
            Err(Error::Interface(_))
        ));
    }

    #[test]
    fn stuck_and_decayed_bits() {
        let mut efuse = VirtualEfuse::new(Chip::Esp32.layout());
        efuse.stick_bit(1, 33).unwrap();

        efuse.write_program_words(1, &[0x1, 0x3]).unwrap();
        efuse.begin_program(1).unwrap();
        assert_eq!(&efuse.words(1).unwrap()[..2], &[0x1, 0x1]);

        efuse.decay_bit(1, 0).unwrap();
        assert_eq!(efuse.words(1).unwrap()[0], 0);
    }

    #[test]
    fn image_round_trip() {
        let layout = Chip::Esp32s3.layout();
        let mut efuse = VirtualEfuse::new(layout);
        efuse.preset(4, &[0xdead_beef, 0, 7]).unwrap();

        let image = efuse.to_image().unwrap();
        let restored = VirtualEfuse::from_image(layout, &image).unwrap();
        assert_eq!(restored.words(4).unwrap(), efuse.words(4).unwrap());
    }

    #[test]
    fn bad_images_are_rejected() {
        let layout = Chip::Esp32.layout();

        assert!(matches!(
            VirtualEfuse::from_image(layout, "[[block]]\nindex = 9\nwords = [1]\n"),
            Err(Error::ImageFormat(_))
        ));
        assert!(matches!(
            VirtualEfuse::from_image(layout, "[[block]]\nindex = 0\nwords = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0]\n"),
            Err(Error::ImageFormat(_))
        ));
        assert!(matches!(
            VirtualEfuse::from_image(layout, "block = 3"),
            Err(Error::ImageFormat(_))
        ));
    }
}
