use espefuse::{Chip, CodingScheme, Efuse, Error, VirtualEfuse};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

fn open(chip: Chip, device: VirtualEfuse) -> Efuse<VirtualEfuse> {
    Efuse::new(device, chip.layout()).unwrap()
}

#[test]
fn blank_devices() {
    for chip in Chip::iter() {
        let efuse = open(chip, VirtualEfuse::new(chip.layout()));

        efuse.check_errors().unwrap();
        for block in chip.layout().blocks {
            assert!(efuse.block_is_empty(block.index).unwrap(), "{chip}");
        }
        for field in chip.fields() {
            let value = efuse.read_field_blob(field, field.bit_count).unwrap();
            assert!(value.iter().all(|b| *b == 0), "{}", field.name);
        }
    }
}

#[test]
fn esp32_three_four_keys() {
    let chip = Chip::Esp32;
    let mut device = VirtualEfuse::new(chip.layout());
    // CODING_SCHEME = 3/4
    device.preset(0, &[0, 0, 0, 0, 0, 0, 0b01]).unwrap();
    let efuse = open(chip, device);

    assert_eq!(efuse.coding_scheme(1).unwrap(), CodingScheme::ThreeFour);
    assert_eq!(efuse.coding_scheme(0).unwrap(), CodingScheme::None);
    assert_eq!(efuse.block_len(1).unwrap(), 24);

    let key = chip.field("ENCRYPT_FLASH_KEY").unwrap();
    assert!(matches!(
        efuse.read_field_blob(key, 256),
        Err(Error::ExtentOutOfRange {
            end: 256,
            available: 192,
            ..
        })
    ));

    let data: Vec<u8> = (1..=24).collect();
    let mut batch = efuse.batch().unwrap();
    batch.write_block(1, &data).unwrap();
    batch.set_write_protect(1).unwrap();
    batch.set_read_protect(2).unwrap();
    batch.commit().unwrap();

    assert_eq!(efuse.read_block(1).unwrap(), data);
    assert_eq!(efuse.raw_block_words(1).unwrap().len(), 8);
    assert!(efuse.is_write_protected(1).unwrap());
    assert!(efuse.read_field_bit(chip.field("WR_DIS_BLK1").unwrap()).unwrap());
    assert!(efuse.is_read_protected(2).unwrap());
}

#[test]
fn esp32_repeat_scheme() {
    let chip = Chip::Esp32;
    let mut device = VirtualEfuse::new(chip.layout());
    device.preset(0, &[0, 0, 0, 0, 0, 0, 0b10]).unwrap();
    let efuse = open(chip, device);

    assert_eq!(efuse.coding_scheme(3).unwrap(), CodingScheme::Repeat);
    assert_eq!(efuse.block_len(3).unwrap(), 16);

    let mut batch = efuse.batch().unwrap();
    batch.write_block(3, &[0x5a; 16]).unwrap();
    batch.commit().unwrap();

    let words = efuse.raw_block_words(3).unwrap();
    assert_eq!(&words[..4], &words[4..]);
    assert_eq!(efuse.read_block(3).unwrap(), vec![0x5a; 16]);
}

#[test]
fn esp32_coding_scheme_burn() {
    let chip = Chip::Esp32;
    let efuse = open(chip, VirtualEfuse::new(chip.layout()));

    let mut batch = efuse.batch().unwrap();
    batch
        .write_field_blob(chip.field("CODING_SCHEME").unwrap(), &[1])
        .unwrap();
    batch.commit().unwrap();

    for block in 1..=3 {
        assert_eq!(efuse.coding_scheme(block).unwrap(), CodingScheme::ThreeFour);
    }
}

#[test]
fn esp32s3_keys() {
    let chip = Chip::Esp32s3;
    let efuse = open(chip, VirtualEfuse::new(chip.layout()));
    let key: Vec<u8> = (0..32).map(|i| i * 7).collect();

    let mut batch = efuse.batch().unwrap();
    batch.write_block(4, &key).unwrap();
    batch
        .write_field_blob(chip.field("KEY_PURPOSE_0").unwrap(), &[4])
        .unwrap();
    batch.commit().unwrap();

    assert_eq!(efuse.coding_scheme(4).unwrap(), CodingScheme::ReedSolomon);
    assert_eq!(efuse.raw_block_words(4).unwrap().len(), 11);
    assert_eq!(
        efuse.read_field_blob(chip.field("KEY0").unwrap(), 256).unwrap(),
        key
    );
    assert_eq!(
        efuse
            .read_field_le::<u8>(chip.field("KEY_PURPOSE_0").unwrap())
            .unwrap(),
        4
    );

    let mut batch = efuse.batch().unwrap();
    batch.set_read_protect(4).unwrap();
    batch.set_write_protect(4).unwrap();
    batch.commit().unwrap();

    assert!(matches!(efuse.read_block(4), Err(Error::ReadProtected(4))));
    assert!(matches!(
        efuse.batch().unwrap().write_block(4, &[1]),
        Err(Error::WriteProtected(4))
    ));
    assert!(!efuse.block_is_empty(4).unwrap());
    assert!(efuse.block_is_empty(5).unwrap());
}

#[test]
fn esp32s2_mac() {
    let chip = Chip::Esp32s2;
    let efuse = open(chip, VirtualEfuse::new(chip.layout()));
    let mac = chip.field("mac").unwrap();

    let mut batch = efuse.batch().unwrap();
    batch
        .write_field_blob(mac, &[0x60, 0x55, 0xf9, 0x01, 0x02, 0x03])
        .unwrap();
    batch.commit().unwrap();

    assert_eq!(
        efuse.read_field_blob(mac, 48).unwrap(),
        vec![0x60, 0x55, 0xf9, 0x01, 0x02, 0x03]
    );
    assert!(!efuse.has_coding_error(1).unwrap());
    assert!(matches!(
        efuse.batch().unwrap().write_block(0, &[0; 25]),
        Err(Error::InvalidLength { len: 25, .. })
    ));
}
