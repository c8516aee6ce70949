use super::{efuse::esp32 as fields, BlockCoding, EfuseBlock, EfuseLayout, SchemeSelector};
use crate::coding::CodingScheme;

static CODING_SCHEME: SchemeSelector = SchemeSelector {
    field: fields::CODING_SCHEME,
    schemes: &[
        (0, CodingScheme::None),
        (1, CodingScheme::ThreeFour),
        (2, CodingScheme::Repeat),
        // Recovery value, blocks are read as uncoded
        (3, CodingScheme::None),
    ],
};

static BLOCKS: &[EfuseBlock] = &[
    EfuseBlock {
        index: 0,
        name: "BLOCK0",
        length: 7,
        coding: BlockCoding::Fixed(CodingScheme::None),
        write_disable: None,
        read_disable: None,
    },
    EfuseBlock {
        index: 1,
        name: "BLOCK1",
        length: 8,
        coding: BlockCoding::Selected(&CODING_SCHEME),
        write_disable: Some(fields::WR_DIS_BLK1),
        read_disable: Some(fields::RD_DIS_BLK1),
    },
    EfuseBlock {
        index: 2,
        name: "BLOCK2",
        length: 8,
        coding: BlockCoding::Selected(&CODING_SCHEME),
        write_disable: Some(fields::WR_DIS_BLK2),
        read_disable: Some(fields::RD_DIS_BLK2),
    },
    EfuseBlock {
        index: 3,
        name: "BLOCK3",
        length: 8,
        coding: BlockCoding::Selected(&CODING_SCHEME),
        write_disable: Some(fields::WR_DIS_BLK3),
        read_disable: Some(fields::RD_DIS_BLK3),
    },
];

pub(super) static LAYOUT: EfuseLayout = EfuseLayout {
    name: "ESP32",
    blocks: BLOCKS,
    fields: fields::FIELDS,
};
