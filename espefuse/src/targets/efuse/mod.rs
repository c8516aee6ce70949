//! eFuse field definitions for all supported devices.
//!
//! The tables for the ESP32-S2 and ESP32-S3 are generated from ESP-IDF's
//! `esp_efuse_table.c` files with `cargo xtask generate-efuse-tables`.

#![allow(clippy::empty_docs)]

pub mod esp32;
pub mod esp32s2;
pub mod esp32s3;
