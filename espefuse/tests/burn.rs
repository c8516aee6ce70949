use espefuse::{block::BlockState, EfuseInterface, Error, ErrorKind, VirtualEfuse};
use pretty_assertions::assert_eq;

mod common;

use common::*;

#[test]
fn burn_and_read_back() {
    let efuse = blank();
    assert_eq!(efuse.read_field_blob(&CHIP_REVISION, 8).unwrap(), vec![0]);

    burn(&efuse, &CHIP_REVISION, &[0x03]).unwrap();

    assert_eq!(efuse.read_field_blob(&CHIP_REVISION, 8).unwrap(), vec![0x03]);
    assert_eq!(efuse.read_field_le::<u8>(&CHIP_REVISION).unwrap(), 0x03);
    assert_eq!(efuse.raw_block_words(0).unwrap()[0], 0x0300);
    assert!(!efuse.has_coding_error(0).unwrap());
    assert_eq!(efuse.block_state(0).unwrap(), BlockState::Idle);

    burn(&efuse, &CHIP_REVISION, &[0x5a]).unwrap();
    assert_eq!(efuse.read_field_le::<u8>(&CHIP_REVISION).unwrap(), 0x5b);
}

#[test]
fn partial_reads() {
    let efuse = blank();
    burn(&efuse, &CHIP_REVISION, &[0xff]).unwrap();

    assert_eq!(efuse.read_field_blob(&CHIP_REVISION, 4).unwrap(), vec![0x0f]);
    assert_eq!(efuse.read_field_blob(&SPLIT, 3).unwrap(), vec![0]);
    assert_eq!(efuse.read_field_blob(&FLASH_CRYPT_CNT, 8).unwrap(), vec![0]);
}

#[test]
fn field_spanning_extents() {
    let efuse = blank();

    burn(&efuse, &SPLIT, &0xabcdu16.to_le_bytes()).unwrap();

    assert_eq!(efuse.read_field_le::<u16>(&SPLIT).unwrap(), 0xabcd);
    let block = efuse.read_block(2).unwrap();
    assert_eq!(block, vec![0, 0, 0, 0xd0, 0, 0xbc, 0x0a, 0]);
}

#[test]
fn bits_accumulate() {
    let efuse = blank();

    burn(&efuse, &FLASH_CRYPT_CNT, &[0b011]).unwrap();
    burn(&efuse, &FLASH_CRYPT_CNT, &[0b100]).unwrap();
    assert_eq!(efuse.read_field_le::<u8>(&FLASH_CRYPT_CNT).unwrap(), 0b111);

    // Zero bits never clear anything
    burn(&efuse, &FLASH_CRYPT_CNT, &[0]).unwrap();
    assert_eq!(efuse.read_field_cnt(&FLASH_CRYPT_CNT).unwrap(), 3);
}

#[test]
fn burning_set_bits_again_is_a_no_op() {
    let efuse = blank();
    burn(&efuse, &CHIP_REVISION, &[0x0f]).unwrap();

    let mut batch = efuse.batch().unwrap();
    batch.write_field_cnt(&CHIP_REVISION, 2).unwrap();
    batch.commit().unwrap();

    assert_eq!(efuse.read_field_le::<u8>(&CHIP_REVISION).unwrap(), 0x0f);
    assert_eq!(efuse.into_interface().unwrap().burn_count(), 1);
}

#[test]
fn counters() {
    let efuse = blank();

    let mut batch = efuse.batch().unwrap();
    batch.write_field_cnt(&FLASH_CRYPT_CNT, 3).unwrap();
    batch.commit().unwrap();

    assert_eq!(efuse.read_field_cnt(&FLASH_CRYPT_CNT).unwrap(), 3);
    assert_eq!(efuse.read_field_le::<u8>(&FLASH_CRYPT_CNT).unwrap(), 0b111);

    let mut batch = efuse.batch().unwrap();
    batch.write_field_cnt(&FLASH_CRYPT_CNT, 7).unwrap();
    batch.commit().unwrap();
    assert_eq!(efuse.read_field_cnt(&FLASH_CRYPT_CNT).unwrap(), 7);
}

#[test]
fn empty_batch() {
    let efuse = blank();

    assert!(matches!(
        efuse.batch().unwrap().commit(),
        Err(Error::NothingStaged)
    ));
}

#[test]
fn invalid_arguments() {
    let efuse = blank();

    assert!(matches!(
        efuse.read_field_blob(&CHIP_REVISION, 0),
        Err(Error::InvalidBitCount { .. })
    ));
    assert!(matches!(
        efuse.read_field_blob(&CHIP_REVISION, 9),
        Err(Error::InvalidBitCount { .. })
    ));
    assert!(matches!(
        efuse.read_field_bit(&CHIP_REVISION),
        Err(Error::NotABit { width: 8, .. })
    ));
    assert!(matches!(
        efuse.read_field_blob(&BROKEN, 8),
        Err(Error::FieldWidthMismatch {
            declared: 9,
            extents: 8,
            ..
        })
    ));

    let mut batch = efuse.batch().unwrap();
    assert!(matches!(
        batch.write_field_blob(&SPLIT, &[0xff]),
        Err(Error::BufferTooSmall {
            needed: 2,
            got: 1,
            ..
        })
    ));
    assert!(matches!(
        batch.write_field_blob(&FLASH_CRYPT_CNT, &[0x80]),
        Err(Error::ValueExceedsField { width: 7, .. })
    ));
    assert!(matches!(
        batch.write_field_cnt(&FLASH_CRYPT_CNT, 8),
        Err(Error::InvalidBitCount { .. })
    ));
    assert!(matches!(
        batch.write_field_cnt(&FLASH_CRYPT_CNT, 0),
        Err(Error::InvalidBitCount { .. })
    ));
    assert!(matches!(
        batch.write_block(1, &[0; 7]),
        Err(Error::InvalidLength { len: 7, .. })
    ));
    assert!(matches!(batch.write_block(7, &[0]), Err(Error::InvalidBlock(7))));
    assert!(matches!(
        batch.set_read_protect(1),
        Err(Error::NoProtectionBit(1, _))
    ));

    // Rejected writes leave nothing behind
    assert!(matches!(batch.commit(), Err(Error::NothingStaged)));
    assert_eq!(
        Error::InvalidBitCount {
            field: "",
            requested: 0,
            width: 1
        }
        .kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn three_four_layout() {
    let efuse = blank();

    burn(&efuse, &KEY6, &[1, 2, 3, 4, 5, 6]).unwrap();

    assert_eq!(efuse.raw_block_words(1).unwrap(), vec![0x0403_0201, 0x2307_0605]);
    assert_eq!(efuse.read_block(1).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    assert!(!efuse.has_coding_error(1).unwrap());
}

#[test]
fn coded_units_are_write_once() {
    let efuse = blank();
    burn(&efuse, &KEY6, &[1, 0, 0, 0, 0, 0]).unwrap();

    let result = burn(&efuse, &KEY6, &[2, 0, 0, 0, 0, 0]);
    assert!(matches!(
        result,
        Err(Error::RepeatedProgramming { block: 1, .. })
    ));

    // Reed-Solomon blocks are a single unit
    burn(&efuse, &USER, &[0x34, 0x12]).unwrap();
    assert!(matches!(
        burn(&efuse, &SPLIT, &[0x01, 0x00]),
        Err(Error::RepeatedProgramming { block: 2, .. })
    ));

    assert_eq!(efuse.read_block(1).unwrap(), vec![1, 0, 0, 0, 0, 0]);
    assert_eq!(efuse.into_interface().unwrap().burn_count(), 2);
}

#[test]
fn write_protection() {
    let efuse = blank();

    // Data and its protection bit in one batch: BLOCK0 burns last
    let mut batch = efuse.batch().unwrap();
    batch.write_field_blob(&KEY6, &[6, 5, 4, 3, 2, 1]).unwrap();
    batch.set_write_protect(1).unwrap();
    batch.commit().unwrap();

    assert!(efuse.is_write_protected(1).unwrap());
    assert!(!efuse.is_write_protected(2).unwrap());
    assert_eq!(efuse.read_block(1).unwrap(), vec![6, 5, 4, 3, 2, 1]);

    let before = efuse.raw_block_words(1).unwrap();

    let mut batch = efuse.batch().unwrap();
    assert!(matches!(
        batch.write_field_blob(&KEY6, &[0xff; 6]),
        Err(Error::WriteProtected(1))
    ));
    assert!(matches!(
        batch.write_block(1, &[0xff]),
        Err(Error::WriteProtected(1))
    ));
    assert!(matches!(batch.commit(), Err(Error::NothingStaged)));

    assert_eq!(efuse.raw_block_words(1).unwrap(), before);
    assert_eq!(efuse.read_block(1).unwrap(), vec![6, 5, 4, 3, 2, 1]);
    assert_eq!(efuse.into_interface().unwrap().burn_count(), 2);
}

#[test]
fn uncoded_blocks_accept_more_bits() {
    let efuse = blank();

    let mut batch = efuse.batch().unwrap();
    batch.write_field_blob(&DATA3, &[1, 0, 0, 0]).unwrap();
    batch.commit().unwrap();

    let mut batch = efuse.batch().unwrap();
    batch.write_field_blob(&DATA3, &[2, 0, 0, 0]).unwrap();
    assert!(!efuse.block_is_empty(3).unwrap());
    batch.commit().unwrap();

    assert_eq!(efuse.read_field_le::<u32>(&DATA3).unwrap(), 3);
}

#[test]
fn read_protection() {
    let efuse = blank();
    burn(&efuse, &USER, &[0x34, 0x12]).unwrap();
    assert!(efuse.block_is_empty(3).unwrap());
    assert!(!efuse.block_is_empty(2).unwrap());

    let mut batch = efuse.batch().unwrap();
    batch.set_read_protect(2).unwrap();
    batch.commit().unwrap();

    assert!(efuse.is_read_protected(2).unwrap());
    assert!(matches!(
        efuse.read_field_blob(&USER, 16),
        Err(Error::ReadProtected(2))
    ));
    assert!(matches!(efuse.read_block(2), Err(Error::ReadProtected(2))));
    assert!(matches!(
        efuse.batch().unwrap().write_field_blob(&SPLIT, &[1, 0]),
        Err(Error::ReadProtected(2))
    ));

    // Read protection hides the value, not the fact that the block is burned
    assert!(!efuse.raw_block_words(2).unwrap().iter().all(|w| *w == 0));
    efuse.check_errors().unwrap();
}

#[test]
fn stuck_bit_fails_verification() {
    let mut device = VirtualEfuse::new(&LAYOUT);
    device.stick_bit(0, 9).unwrap();
    let efuse = with(device);

    let mut batch = efuse.batch().unwrap();
    batch.write_field_blob(&CHIP_REVISION, &[0x03]).unwrap();
    batch.write_field_blob(&USER, &[0x01, 0x00]).unwrap();
    let result = batch.commit();

    assert!(matches!(result, Err(Error::VerifyFailed(0))));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::HardwareFailure);

    // Other blocks in the batch are unaffected
    assert_eq!(efuse.block_state(0).unwrap(), BlockState::Failed);
    assert_eq!(efuse.block_state(2).unwrap(), BlockState::Idle);
    assert_eq!(efuse.read_field_le::<u16>(&USER).unwrap(), 1);

    // The shadow holds what was actually burned
    assert_eq!(efuse.read_field_le::<u8>(&CHIP_REVISION).unwrap(), 0x01);

    assert!(matches!(
        efuse.batch().unwrap().write_field_blob(&FLASH_CRYPT_CNT, &[1]),
        Err(Error::BlockFailed(0))
    ));

    efuse.acknowledge_failure(0).unwrap();
    assert_eq!(efuse.block_state(0).unwrap(), BlockState::Idle);
    burn(&efuse, &FLASH_CRYPT_CNT, &[1]).unwrap();
}

#[test]
fn failed_state_survives_refresh() {
    let mut device = VirtualEfuse::new(&LAYOUT);
    device.stick_bit(0, 24).unwrap();
    let efuse = with(device);

    assert!(burn(&efuse, &FLASH_CRYPT_CNT, &[1]).is_err());
    efuse.refresh().unwrap();
    assert_eq!(efuse.block_state(0).unwrap(), BlockState::Failed);
}

#[test]
fn burn_timeout() {
    let mut device = VirtualEfuse::new(&LAYOUT);
    device.set_hang(true);
    let efuse = with(device);

    assert!(matches!(
        burn(&efuse, &DATA3, &[1, 2, 3, 4]),
        Err(Error::ProgramTimeout(3))
    ));
    assert_eq!(efuse.block_state(3).unwrap(), BlockState::Failed);
    assert!(!efuse.into_interface().unwrap().program_registers_loaded());
}

/// Fails to start every burn
struct Unreliable(VirtualEfuse);

impl EfuseInterface for Unreliable {
    fn read_block_words(&mut self, block: u8, words: &mut [u32]) -> Result<(), Error> {
        self.0.read_block_words(block, words)
    }

    fn write_program_words(&mut self, block: u8, words: &[u32]) -> Result<(), Error> {
        self.0.write_program_words(block, words)
    }

    fn begin_program(&mut self, _block: u8) -> Result<(), Error> {
        Err(Error::Interface("controller busy".into()))
    }

    fn wait_program_done(&mut self, block: u8) -> Result<bool, Error> {
        self.0.wait_program_done(block)
    }

    fn clear_program_registers(&mut self, block: u8) -> Result<(), Error> {
        self.0.clear_program_registers(block)
    }
}

#[test]
fn program_registers_are_cleared_on_error() {
    let efuse =
        espefuse::Efuse::new(Unreliable(VirtualEfuse::new(&LAYOUT)), &LAYOUT).unwrap();

    let mut batch = efuse.batch().unwrap();
    batch.write_field_blob(&CHIP_REVISION, &[1]).unwrap();
    assert!(matches!(batch.commit(), Err(Error::Interface(_))));

    let device = efuse.into_interface().unwrap().0;
    assert!(!device.program_registers_loaded());
    assert_eq!(device.burn_count(), 0);
}

#[test]
fn image_persistence() {
    let efuse = blank();
    burn(&efuse, &KEY6, &[1, 2, 3, 4, 5, 6]).unwrap();

    let image = efuse.into_interface().unwrap().to_image().unwrap();
    let efuse = with(VirtualEfuse::from_image(&LAYOUT, &image).unwrap());
    assert_eq!(efuse.read_block(1).unwrap(), vec![1, 2, 3, 4, 5, 6]);
}
