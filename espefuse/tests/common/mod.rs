#![allow(dead_code)]

use espefuse::{
    targets::{BlockCoding, EfuseBlock, EfuseLayout, SchemeSelector},
    CodingScheme, Efuse, EfuseField, Extent, VirtualEfuse,
};

pub const WR_DIS_BLK1: EfuseField = EfuseField::new("WR_DIS_BLK1", 1, &[Extent::new(0, 0, 1)]);
pub const WR_DIS_BLK2: EfuseField = EfuseField::new("WR_DIS_BLK2", 1, &[Extent::new(0, 1, 1)]);
pub const WR_DIS_BLK3: EfuseField = EfuseField::new("WR_DIS_BLK3", 1, &[Extent::new(0, 2, 1)]);
pub const RD_DIS_BLK2: EfuseField = EfuseField::new("RD_DIS_BLK2", 1, &[Extent::new(0, 4, 1)]);
pub const CHIP_REVISION: EfuseField =
    EfuseField::new("CHIP_REVISION", 8, &[Extent::new(0, 8, 8)]);
pub const SCHEME: EfuseField = EfuseField::new("SCHEME", 2, &[Extent::new(0, 16, 2)]);
pub const FLASH_CRYPT_CNT: EfuseField =
    EfuseField::new("FLASH_CRYPT_CNT", 7, &[Extent::new(0, 24, 7)]);

/// 3/4 coded, fills the whole block
pub const KEY6: EfuseField = EfuseField::new("KEY6", 48, &[Extent::new(1, 0, 48)]);

/// Reed-Solomon coded
pub const USER: EfuseField = EfuseField::new("USER", 16, &[Extent::new(2, 0, 16)]);
pub const SPLIT: EfuseField = EfuseField::new(
    "SPLIT",
    16,
    &[Extent::new(2, 28, 4), Extent::new(2, 40, 12)],
);

/// Coded as selected by SCHEME
pub const DATA3: EfuseField = EfuseField::new("DATA3", 32, &[Extent::new(3, 0, 32)]);
pub const TAIL3: EfuseField = EfuseField::new("TAIL3", 8, &[Extent::new(3, 120, 8)]);

/// Repeat coded
pub const REP: EfuseField = EfuseField::new("REP", 32, &[Extent::new(4, 0, 32)]);

pub const BROKEN: EfuseField = EfuseField::new("BROKEN", 9, &[Extent::new(0, 40, 8)]);

static SELECTOR: SchemeSelector = SchemeSelector {
    field: SCHEME,
    schemes: &[
        (0, CodingScheme::None),
        (1, CodingScheme::ThreeFour),
        (2, CodingScheme::Repeat),
    ],
};

static BLOCKS: &[EfuseBlock] = &[
    EfuseBlock {
        index: 0,
        name: "BLOCK0",
        length: 4,
        coding: BlockCoding::Fixed(CodingScheme::None),
        write_disable: None,
        read_disable: None,
    },
    EfuseBlock {
        index: 1,
        name: "KEYS",
        length: 2,
        coding: BlockCoding::Fixed(CodingScheme::ThreeFour),
        write_disable: Some(WR_DIS_BLK1),
        read_disable: None,
    },
    EfuseBlock {
        index: 2,
        name: "USER_DATA",
        length: 2,
        coding: BlockCoding::Fixed(CodingScheme::ReedSolomon),
        write_disable: Some(WR_DIS_BLK2),
        read_disable: Some(RD_DIS_BLK2),
    },
    EfuseBlock {
        index: 3,
        name: "SELECTED",
        length: 4,
        coding: BlockCoding::Selected(&SELECTOR),
        write_disable: Some(WR_DIS_BLK3),
        read_disable: None,
    },
    EfuseBlock {
        index: 4,
        name: "REPEATED",
        length: 2,
        coding: BlockCoding::Fixed(CodingScheme::Repeat),
        write_disable: None,
        read_disable: None,
    },
];

pub static LAYOUT: EfuseLayout = EfuseLayout {
    name: "test device",
    blocks: BLOCKS,
    fields: &[
        WR_DIS_BLK1,
        WR_DIS_BLK2,
        WR_DIS_BLK3,
        RD_DIS_BLK2,
        CHIP_REVISION,
        SCHEME,
        FLASH_CRYPT_CNT,
        KEY6,
        USER,
        SPLIT,
        DATA3,
        TAIL3,
        REP,
    ],
};

pub fn blank() -> Efuse<VirtualEfuse> {
    Efuse::new(VirtualEfuse::new(&LAYOUT), &LAYOUT).unwrap()
}

pub fn with(device: VirtualEfuse) -> Efuse<VirtualEfuse> {
    Efuse::new(device, &LAYOUT).unwrap()
}

/// Burn `value` into `field` in a batch of its own.
pub fn burn(efuse: &Efuse<VirtualEfuse>, field: &EfuseField, value: &[u8]) -> Result<(), espefuse::Error> {
    let mut batch = efuse.batch()?;
    batch.write_field_blob(field, value)?;
    batch.commit()
}
