use super::{efuse::esp32s3 as fields, BlockCoding, EfuseBlock, EfuseLayout};
use crate::coding::CodingScheme;

const RS: BlockCoding = BlockCoding::Fixed(CodingScheme::ReedSolomon);

static BLOCKS: &[EfuseBlock] = &[
    EfuseBlock {
        index: 0,
        name: "BLOCK0",
        length: 6,
        coding: BlockCoding::Fixed(CodingScheme::None),
        write_disable: None,
        read_disable: None,
    },
    EfuseBlock {
        index: 1,
        name: "MAC_SPI_8M_0",
        length: 6,
        coding: RS,
        write_disable: Some(fields::WR_DIS_BLK1),
        read_disable: None,
    },
    EfuseBlock {
        index: 2,
        name: "BLOCK_SYS_DATA",
        length: 8,
        coding: RS,
        write_disable: Some(fields::WR_DIS_SYS_DATA_PART1),
        read_disable: None,
    },
    EfuseBlock {
        index: 3,
        name: "BLOCK_USR_DATA",
        length: 8,
        coding: RS,
        write_disable: Some(fields::WR_DIS_BLOCK_USR_DATA),
        read_disable: None,
    },
    EfuseBlock {
        index: 4,
        name: "BLOCK_KEY0",
        length: 8,
        coding: RS,
        write_disable: Some(fields::WR_DIS_BLOCK_KEY0),
        read_disable: Some(fields::RD_DIS_BLOCK_KEY0),
    },
    EfuseBlock {
        index: 5,
        name: "BLOCK_KEY1",
        length: 8,
        coding: RS,
        write_disable: Some(fields::WR_DIS_BLOCK_KEY1),
        read_disable: Some(fields::RD_DIS_BLOCK_KEY1),
    },
    EfuseBlock {
        index: 6,
        name: "BLOCK_KEY2",
        length: 8,
        coding: RS,
        write_disable: Some(fields::WR_DIS_BLOCK_KEY2),
        read_disable: Some(fields::RD_DIS_BLOCK_KEY2),
    },
    EfuseBlock {
        index: 7,
        name: "BLOCK_KEY3",
        length: 8,
        coding: RS,
        write_disable: Some(fields::WR_DIS_BLOCK_KEY3),
        read_disable: Some(fields::RD_DIS_BLOCK_KEY3),
    },
    EfuseBlock {
        index: 8,
        name: "BLOCK_KEY4",
        length: 8,
        coding: RS,
        write_disable: Some(fields::WR_DIS_BLOCK_KEY4),
        read_disable: Some(fields::RD_DIS_BLOCK_KEY4),
    },
    EfuseBlock {
        index: 9,
        name: "BLOCK_KEY5",
        length: 8,
        coding: RS,
        write_disable: Some(fields::WR_DIS_BLOCK_KEY5),
        read_disable: Some(fields::RD_DIS_BLOCK_KEY5),
    },
    EfuseBlock {
        index: 10,
        name: "BLOCK_SYS_DATA2",
        length: 8,
        coding: RS,
        write_disable: Some(fields::WR_DIS_BLOCK_SYS_DATA2),
        read_disable: Some(fields::RD_DIS_BLOCK_SYS_DATA2),
    },
];

pub(super) static LAYOUT: EfuseLayout = EfuseLayout {
    name: "ESP32-S3",
    blocks: BLOCKS,
    fields: fields::FIELDS,
};
