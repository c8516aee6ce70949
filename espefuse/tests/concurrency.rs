use std::thread;

use espefuse::Error;

mod common;

use common::*;

#[test]
fn concurrent_batches_are_serialized() {
    let efuse = blank();

    thread::scope(|s| {
        for bit in 0..7 {
            let efuse = &efuse;
            s.spawn(move || {
                let mut batch = efuse.batch().unwrap();
                batch.write_field_blob(&FLASH_CRYPT_CNT, &[1 << bit]).unwrap();
                batch.commit().unwrap();
            });
        }

        // Readers never observe a torn value
        s.spawn(|| {
            for _ in 0..100 {
                let value = efuse.read_field_le::<u8>(&FLASH_CRYPT_CNT).unwrap();
                assert_eq!(value & !0x7f, 0);
            }
        });
    });

    assert_eq!(efuse.read_field_cnt(&FLASH_CRYPT_CNT).unwrap(), 7);
    assert_eq!(efuse.into_interface().unwrap().burn_count(), 7);
}

#[test]
fn try_batch_reports_contention() {
    let efuse = blank();
    let batch = efuse.batch().unwrap();

    thread::scope(|s| {
        let busy = s.spawn(|| efuse.try_batch().map(|batch| batch.is_none()));
        assert!(busy.join().unwrap().unwrap());
    });

    drop(batch);
    let mut batch = efuse.try_batch().unwrap().unwrap();
    batch.write_field_blob(&CHIP_REVISION, &[1]).unwrap();
    batch.commit().unwrap();
}

#[test]
fn poisoned_lock() {
    let efuse = blank();

    thread::scope(|s| {
        let result = s
            .spawn(|| {
                let _batch = efuse.batch().unwrap();
                panic!("burn interrupted");
            })
            .join();
        assert!(result.is_err());
    });

    assert!(matches!(efuse.batch(), Err(Error::Poisoned)));
    // Reads only need the shadow
    assert_eq!(efuse.read_field_le::<u8>(&CHIP_REVISION).unwrap(), 0);
}
