use espefuse::{CodingScheme, Error, ErrorKind, HardwareErrorStatus, VirtualEfuse};
use pretty_assertions::assert_eq;

mod common;

use common::*;

#[test]
fn reed_solomon_corrects_flipped_bits() {
    let efuse = blank();
    burn(&efuse, &USER, &[0x34, 0x12]).unwrap();

    let mut device = efuse.into_interface().unwrap();
    device.preset(2, &[0x0000_0100]).unwrap();
    let efuse = with(device);

    assert_eq!(efuse.read_field_le::<u16>(&USER).unwrap(), 0x1234);
    assert!(efuse.has_coding_error(2).unwrap());
    efuse.check_errors().unwrap();
}

#[test]
fn three_four_check_mismatch_is_uncorrectable() {
    let efuse = blank();
    burn(&efuse, &KEY6, &[1, 2, 3, 4, 5, 6]).unwrap();

    let mut device = efuse.into_interface().unwrap();
    device.preset(1, &[0x0000_0080]).unwrap();
    let efuse = with(device);

    assert!(efuse.has_coding_error(1).unwrap());
    let err = efuse.read_field_blob(&KEY6, 48).unwrap_err();
    assert!(matches!(err, Error::Coding { block: 1, failed: 1 }));
    assert_eq!(err.kind(), ErrorKind::CodingError);
    assert!(matches!(
        efuse.check_errors(),
        Err(Error::Coding { block: 1, .. })
    ));

    // Other blocks remain readable
    assert_eq!(efuse.read_field_le::<u8>(&CHIP_REVISION).unwrap(), 0);
}

#[test]
fn repeat_copies_vote() {
    let efuse = blank();
    burn(&efuse, &REP, &0x0000_00ffu32.to_le_bytes()).unwrap();
    assert_eq!(efuse.raw_block_words(4).unwrap(), vec![0xff, 0xff]);

    // One copy lost a bit, the tie resolves towards the burned value
    let mut device = efuse.into_interface().unwrap();
    device.decay_bit(4, 0).unwrap();
    let efuse = with(device);

    assert_eq!(efuse.read_field_le::<u32>(&REP).unwrap(), 0xff);
    assert!(efuse.has_coding_error(4).unwrap());
    efuse.check_errors().unwrap();
}

#[test]
fn hardware_error_status() {
    let mut device = VirtualEfuse::new(&LAYOUT);
    device
        .set_error_status(
            2,
            Some(HardwareErrorStatus {
                err_num: 1,
                fail: false,
            }),
        )
        .unwrap();
    device
        .set_error_status(
            3,
            Some(HardwareErrorStatus {
                err_num: 4,
                fail: true,
            }),
        )
        .unwrap();
    let efuse = with(device);

    assert!(efuse.has_coding_error(2).unwrap());
    efuse.read_block(2).unwrap();

    assert!(efuse.has_coding_error(3).unwrap());
    assert!(matches!(
        efuse.read_block(3),
        Err(Error::Coding { block: 3, .. })
    ));
    assert!(matches!(
        efuse.check_errors(),
        Err(Error::Coding { block: 3, .. })
    ));
}

#[test]
fn coding_scheme_follows_block0() {
    let efuse = blank();
    assert_eq!(efuse.coding_scheme(3).unwrap(), CodingScheme::None);
    assert_eq!(efuse.block_len(3).unwrap(), 16);

    let mut batch = efuse.batch().unwrap();
    batch.write_field_blob(&SCHEME, &[1]).unwrap();
    batch.write_field_blob(&DATA3, &[1, 2, 3, 4]).unwrap();
    assert!(matches!(
        batch.commit(),
        Err(Error::CodingSchemeChangePending(3))
    ));
    assert_eq!(efuse.coding_scheme(3).unwrap(), CodingScheme::None);

    burn(&efuse, &SCHEME, &[1]).unwrap();
    assert_eq!(efuse.coding_scheme(3).unwrap(), CodingScheme::ThreeFour);
    assert_eq!(efuse.block_len(3).unwrap(), 12);

    // The last bits of the uncoded block no longer exist
    assert!(matches!(
        efuse.read_field_blob(&TAIL3, 8),
        Err(Error::ExtentOutOfRange {
            block: 3,
            end: 128,
            available: 96,
            ..
        })
    ));

    burn(&efuse, &DATA3, &[1, 2, 3, 4]).unwrap();
    assert_eq!(&efuse.read_block(3).unwrap()[..6], &[1, 2, 3, 4, 0, 0]);
    assert_eq!(
        &efuse.raw_block_words(3).unwrap()[..2],
        &[0x0403_0201, 0x0d04_0000]
    );
}

#[test]
fn unknown_coding_scheme() {
    let mut device = VirtualEfuse::new(&LAYOUT);
    device.preset(0, &[0x0003_0000]).unwrap();

    let err = espefuse::Efuse::new(device, &LAYOUT).unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownCodingScheme { block: 3, value: 3 }
    ));
}
