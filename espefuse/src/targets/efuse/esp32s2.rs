//! eFuse field definitions for the ESP32-S2
//!
//! This file was automatically generated, please do not edit it manually!
//!
//! Generated: 2026-10-14 09:12
//! Version:   42c79ddff54c8f03645a832a69f60af2

#![allow(unused)]

use crate::field::{EfuseField, Extent};

/// Disable programming of individual eFuses
pub const WR_DIS: EfuseField = EfuseField::new("WR_DIS", 32, &[Extent::new(0, 0, 32)]);
/// wr_dis of RD_DIS
pub const WR_DIS_RD_DIS: EfuseField = EfuseField::new("WR_DIS_RD_DIS", 1, &[Extent::new(0, 0, 1)]);
/// wr_dis of DIS_ICACHE
pub const WR_DIS_DIS_ICACHE: EfuseField =
    EfuseField::new("WR_DIS_DIS_ICACHE", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of DIS_DCACHE
pub const WR_DIS_DIS_DCACHE: EfuseField =
    EfuseField::new("WR_DIS_DIS_DCACHE", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of DIS_DOWNLOAD_ICACHE
pub const WR_DIS_DIS_DOWNLOAD_ICACHE: EfuseField =
    EfuseField::new("WR_DIS_DIS_DOWNLOAD_ICACHE", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of DIS_DOWNLOAD_DCACHE
pub const WR_DIS_DIS_DOWNLOAD_DCACHE: EfuseField =
    EfuseField::new("WR_DIS_DIS_DOWNLOAD_DCACHE", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of DIS_FORCE_DOWNLOAD
pub const WR_DIS_DIS_FORCE_DOWNLOAD: EfuseField =
    EfuseField::new("WR_DIS_DIS_FORCE_DOWNLOAD", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of DIS_USB
pub const WR_DIS_DIS_USB: EfuseField =
    EfuseField::new("WR_DIS_DIS_USB", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of DIS_TWAI
pub const WR_DIS_DIS_TWAI: EfuseField =
    EfuseField::new("WR_DIS_DIS_TWAI", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of DIS_BOOT_REMAP
pub const WR_DIS_DIS_BOOT_REMAP: EfuseField =
    EfuseField::new("WR_DIS_DIS_BOOT_REMAP", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of SOFT_DIS_JTAG
pub const WR_DIS_SOFT_DIS_JTAG: EfuseField =
    EfuseField::new("WR_DIS_SOFT_DIS_JTAG", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of HARD_DIS_JTAG
pub const WR_DIS_HARD_DIS_JTAG: EfuseField =
    EfuseField::new("WR_DIS_HARD_DIS_JTAG", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of DIS_DOWNLOAD_MANUAL_ENCRYPT
pub const WR_DIS_DIS_DOWNLOAD_MANUAL_ENCRYPT: EfuseField =
    EfuseField::new("WR_DIS_DIS_DOWNLOAD_MANUAL_ENCRYPT", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of VDD_SPI_XPD
pub const WR_DIS_VDD_SPI_XPD: EfuseField =
    EfuseField::new("WR_DIS_VDD_SPI_XPD", 1, &[Extent::new(0, 3, 1)]);
/// wr_dis of VDD_SPI_TIEH
pub const WR_DIS_VDD_SPI_TIEH: EfuseField =
    EfuseField::new("WR_DIS_VDD_SPI_TIEH", 1, &[Extent::new(0, 3, 1)]);
/// wr_dis of VDD_SPI_FORCE
pub const WR_DIS_VDD_SPI_FORCE: EfuseField =
    EfuseField::new("WR_DIS_VDD_SPI_FORCE", 1, &[Extent::new(0, 3, 1)]);
/// wr_dis of WDT_DELAY_SEL
pub const WR_DIS_WDT_DELAY_SEL: EfuseField =
    EfuseField::new("WR_DIS_WDT_DELAY_SEL", 1, &[Extent::new(0, 3, 1)]);
/// wr_dis of SPI_BOOT_CRYPT_CNT
pub const WR_DIS_SPI_BOOT_CRYPT_CNT: EfuseField =
    EfuseField::new("WR_DIS_SPI_BOOT_CRYPT_CNT", 1, &[Extent::new(0, 4, 1)]);
/// wr_dis of SECURE_BOOT_KEY_REVOKE0
pub const WR_DIS_SECURE_BOOT_KEY_REVOKE0: EfuseField =
    EfuseField::new("WR_DIS_SECURE_BOOT_KEY_REVOKE0", 1, &[Extent::new(0, 5, 1)]);
/// wr_dis of SECURE_BOOT_KEY_REVOKE1
pub const WR_DIS_SECURE_BOOT_KEY_REVOKE1: EfuseField =
    EfuseField::new("WR_DIS_SECURE_BOOT_KEY_REVOKE1", 1, &[Extent::new(0, 6, 1)]);
/// wr_dis of SECURE_BOOT_KEY_REVOKE2
pub const WR_DIS_SECURE_BOOT_KEY_REVOKE2: EfuseField =
    EfuseField::new("WR_DIS_SECURE_BOOT_KEY_REVOKE2", 1, &[Extent::new(0, 7, 1)]);
/// wr_dis of KEY_PURPOSE_0
pub const WR_DIS_KEY_PURPOSE_0: EfuseField =
    EfuseField::new("WR_DIS_KEY_PURPOSE_0", 1, &[Extent::new(0, 8, 1)]);
/// wr_dis of KEY_PURPOSE_1
pub const WR_DIS_KEY_PURPOSE_1: EfuseField =
    EfuseField::new("WR_DIS_KEY_PURPOSE_1", 1, &[Extent::new(0, 9, 1)]);
/// wr_dis of KEY_PURPOSE_2
pub const WR_DIS_KEY_PURPOSE_2: EfuseField =
    EfuseField::new("WR_DIS_KEY_PURPOSE_2", 1, &[Extent::new(0, 10, 1)]);
/// wr_dis of KEY_PURPOSE_3
pub const WR_DIS_KEY_PURPOSE_3: EfuseField =
    EfuseField::new("WR_DIS_KEY_PURPOSE_3", 1, &[Extent::new(0, 11, 1)]);
/// wr_dis of KEY_PURPOSE_4
pub const WR_DIS_KEY_PURPOSE_4: EfuseField =
    EfuseField::new("WR_DIS_KEY_PURPOSE_4", 1, &[Extent::new(0, 12, 1)]);
/// wr_dis of KEY_PURPOSE_5
pub const WR_DIS_KEY_PURPOSE_5: EfuseField =
    EfuseField::new("WR_DIS_KEY_PURPOSE_5", 1, &[Extent::new(0, 13, 1)]);
/// wr_dis of SECURE_BOOT_EN
pub const WR_DIS_SECURE_BOOT_EN: EfuseField =
    EfuseField::new("WR_DIS_SECURE_BOOT_EN", 1, &[Extent::new(0, 15, 1)]);
/// wr_dis of SECURE_BOOT_AGGRESSIVE_REVOKE
pub const WR_DIS_SECURE_BOOT_AGGRESSIVE_REVOKE: EfuseField =
    EfuseField::new("WR_DIS_SECURE_BOOT_AGGRESSIVE_REVOKE", 1, &[Extent::new(0, 16, 1)]);
/// wr_dis of FLASH_TPUW
pub const WR_DIS_FLASH_TPUW: EfuseField =
    EfuseField::new("WR_DIS_FLASH_TPUW", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of DIS_DOWNLOAD_MODE
pub const WR_DIS_DIS_DOWNLOAD_MODE: EfuseField =
    EfuseField::new("WR_DIS_DIS_DOWNLOAD_MODE", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of DIS_LEGACY_SPI_BOOT
pub const WR_DIS_DIS_LEGACY_SPI_BOOT: EfuseField =
    EfuseField::new("WR_DIS_DIS_LEGACY_SPI_BOOT", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of UART_PRINT_CHANNEL
pub const WR_DIS_UART_PRINT_CHANNEL: EfuseField =
    EfuseField::new("WR_DIS_UART_PRINT_CHANNEL", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of DIS_USB_DOWNLOAD_MODE
pub const WR_DIS_DIS_USB_DOWNLOAD_MODE: EfuseField =
    EfuseField::new("WR_DIS_DIS_USB_DOWNLOAD_MODE", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of ENABLE_SECURITY_DOWNLOAD
pub const WR_DIS_ENABLE_SECURITY_DOWNLOAD: EfuseField =
    EfuseField::new("WR_DIS_ENABLE_SECURITY_DOWNLOAD", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of UART_PRINT_CONTROL
pub const WR_DIS_UART_PRINT_CONTROL: EfuseField =
    EfuseField::new("WR_DIS_UART_PRINT_CONTROL", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of PIN_POWER_SELECTION
pub const WR_DIS_PIN_POWER_SELECTION: EfuseField =
    EfuseField::new("WR_DIS_PIN_POWER_SELECTION", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of FLASH_TYPE
pub const WR_DIS_FLASH_TYPE: EfuseField =
    EfuseField::new("WR_DIS_FLASH_TYPE", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of FORCE_SEND_RESUME
pub const WR_DIS_FORCE_SEND_RESUME: EfuseField =
    EfuseField::new("WR_DIS_FORCE_SEND_RESUME", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of SECURE_VERSION
pub const WR_DIS_SECURE_VERSION: EfuseField =
    EfuseField::new("WR_DIS_SECURE_VERSION", 1, &[Extent::new(0, 18, 1)]);
/// wr_dis of BLOCK1
pub const WR_DIS_BLK1: EfuseField = EfuseField::new("WR_DIS_BLK1", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of MAC
pub const WR_DIS_MAC: EfuseField = EfuseField::new("WR_DIS_MAC", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_CLK
pub const WR_DIS_SPI_PAD_CONFIG_CLK: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_CLK", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_Q
pub const WR_DIS_SPI_PAD_CONFIG_Q: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_Q", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_D
pub const WR_DIS_SPI_PAD_CONFIG_D: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_D", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_CS
pub const WR_DIS_SPI_PAD_CONFIG_CS: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_CS", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_HD
pub const WR_DIS_SPI_PAD_CONFIG_HD: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_HD", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_WP
pub const WR_DIS_SPI_PAD_CONFIG_WP: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_WP", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_DQS
pub const WR_DIS_SPI_PAD_CONFIG_DQS: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_DQS", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_D4
pub const WR_DIS_SPI_PAD_CONFIG_D4: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_D4", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_D5
pub const WR_DIS_SPI_PAD_CONFIG_D5: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_D5", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_D6
pub const WR_DIS_SPI_PAD_CONFIG_D6: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_D6", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of SPI_PAD_CONFIG_D7
pub const WR_DIS_SPI_PAD_CONFIG_D7: EfuseField =
    EfuseField::new("WR_DIS_SPI_PAD_CONFIG_D7", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of WAFER_VERSION_MAJOR
pub const WR_DIS_WAFER_VERSION_MAJOR: EfuseField =
    EfuseField::new("WR_DIS_WAFER_VERSION_MAJOR", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of WAFER_VERSION_MINOR_HI
pub const WR_DIS_WAFER_VERSION_MINOR_HI: EfuseField =
    EfuseField::new("WR_DIS_WAFER_VERSION_MINOR_HI", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of FLASH_VERSION
pub const WR_DIS_FLASH_VERSION: EfuseField =
    EfuseField::new("WR_DIS_FLASH_VERSION", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of BLK_VERSION_MAJOR
pub const WR_DIS_BLK_VERSION_MAJOR: EfuseField =
    EfuseField::new("WR_DIS_BLK_VERSION_MAJOR", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of PSRAM_VERSION
pub const WR_DIS_PSRAM_VERSION: EfuseField =
    EfuseField::new("WR_DIS_PSRAM_VERSION", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of PKG_VERSION
pub const WR_DIS_PKG_VERSION: EfuseField =
    EfuseField::new("WR_DIS_PKG_VERSION", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of WAFER_VERSION_MINOR_LO
pub const WR_DIS_WAFER_VERSION_MINOR_LO: EfuseField =
    EfuseField::new("WR_DIS_WAFER_VERSION_MINOR_LO", 1, &[Extent::new(0, 20, 1)]);
/// wr_dis of BLOCK2
pub const WR_DIS_SYS_DATA_PART1: EfuseField =
    EfuseField::new("WR_DIS_SYS_DATA_PART1", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of OPTIONAL_UNIQUE_ID
pub const WR_DIS_OPTIONAL_UNIQUE_ID: EfuseField =
    EfuseField::new("WR_DIS_OPTIONAL_UNIQUE_ID", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of ADC_CALIB
pub const WR_DIS_ADC_CALIB: EfuseField =
    EfuseField::new("WR_DIS_ADC_CALIB", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of BLK_VERSION_MINOR
pub const WR_DIS_BLK_VERSION_MINOR: EfuseField =
    EfuseField::new("WR_DIS_BLK_VERSION_MINOR", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of TEMP_CALIB
pub const WR_DIS_TEMP_CALIB: EfuseField =
    EfuseField::new("WR_DIS_TEMP_CALIB", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A10H
pub const WR_DIS_RTCCALIB_V1IDX_A10H: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A10H", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A11H
pub const WR_DIS_RTCCALIB_V1IDX_A11H: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A11H", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A12H
pub const WR_DIS_RTCCALIB_V1IDX_A12H: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A12H", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A13H
pub const WR_DIS_RTCCALIB_V1IDX_A13H: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A13H", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A20H
pub const WR_DIS_RTCCALIB_V1IDX_A20H: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A20H", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A21H
pub const WR_DIS_RTCCALIB_V1IDX_A21H: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A21H", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A22H
pub const WR_DIS_RTCCALIB_V1IDX_A22H: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A22H", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A23H
pub const WR_DIS_RTCCALIB_V1IDX_A23H: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A23H", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A10L
pub const WR_DIS_RTCCALIB_V1IDX_A10L: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A10L", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A11L
pub const WR_DIS_RTCCALIB_V1IDX_A11L: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A11L", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A12L
pub const WR_DIS_RTCCALIB_V1IDX_A12L: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A12L", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A13L
pub const WR_DIS_RTCCALIB_V1IDX_A13L: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A13L", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A20L
pub const WR_DIS_RTCCALIB_V1IDX_A20L: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A20L", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A21L
pub const WR_DIS_RTCCALIB_V1IDX_A21L: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A21L", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A22L
pub const WR_DIS_RTCCALIB_V1IDX_A22L: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A22L", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of RTCCALIB_V1IDX_A23L
pub const WR_DIS_RTCCALIB_V1IDX_A23L: EfuseField =
    EfuseField::new("WR_DIS_RTCCALIB_V1IDX_A23L", 1, &[Extent::new(0, 21, 1)]);
/// wr_dis of BLOCK_USR_DATA
pub const WR_DIS_BLOCK_USR_DATA: EfuseField =
    EfuseField::new("WR_DIS_BLOCK_USR_DATA", 1, &[Extent::new(0, 22, 1)]);
/// wr_dis of CUSTOM_MAC
pub const WR_DIS_CUSTOM_MAC: EfuseField =
    EfuseField::new("WR_DIS_CUSTOM_MAC", 1, &[Extent::new(0, 22, 1)]);
/// wr_dis of BLOCK_KEY0
pub const WR_DIS_BLOCK_KEY0: EfuseField =
    EfuseField::new("WR_DIS_BLOCK_KEY0", 1, &[Extent::new(0, 23, 1)]);
/// wr_dis of BLOCK_KEY1
pub const WR_DIS_BLOCK_KEY1: EfuseField =
    EfuseField::new("WR_DIS_BLOCK_KEY1", 1, &[Extent::new(0, 24, 1)]);
/// wr_dis of BLOCK_KEY2
pub const WR_DIS_BLOCK_KEY2: EfuseField =
    EfuseField::new("WR_DIS_BLOCK_KEY2", 1, &[Extent::new(0, 25, 1)]);
/// wr_dis of BLOCK_KEY3
pub const WR_DIS_BLOCK_KEY3: EfuseField =
    EfuseField::new("WR_DIS_BLOCK_KEY3", 1, &[Extent::new(0, 26, 1)]);
/// wr_dis of BLOCK_KEY4
pub const WR_DIS_BLOCK_KEY4: EfuseField =
    EfuseField::new("WR_DIS_BLOCK_KEY4", 1, &[Extent::new(0, 27, 1)]);
/// wr_dis of BLOCK_KEY5
pub const WR_DIS_BLOCK_KEY5: EfuseField =
    EfuseField::new("WR_DIS_BLOCK_KEY5", 1, &[Extent::new(0, 28, 1)]);
/// wr_dis of BLOCK_SYS_DATA2
pub const WR_DIS_BLOCK_SYS_DATA2: EfuseField =
    EfuseField::new("WR_DIS_BLOCK_SYS_DATA2", 1, &[Extent::new(0, 29, 1)]);
/// wr_dis of USB_EXCHG_PINS
pub const WR_DIS_USB_EXCHG_PINS: EfuseField =
    EfuseField::new("WR_DIS_USB_EXCHG_PINS", 1, &[Extent::new(0, 30, 1)]);
/// wr_dis of USB_EXT_PHY_ENABLE
pub const WR_DIS_USB_EXT_PHY_ENABLE: EfuseField =
    EfuseField::new("WR_DIS_USB_EXT_PHY_ENABLE", 1, &[Extent::new(0, 30, 1)]);
/// wr_dis of USB_FORCE_NOPERSIST
pub const WR_DIS_USB_FORCE_NOPERSIST: EfuseField =
    EfuseField::new("WR_DIS_USB_FORCE_NOPERSIST", 1, &[Extent::new(0, 30, 1)]);
/// wr_dis of BLOCK0_VERSION
pub const WR_DIS_BLOCK0_VERSION: EfuseField =
    EfuseField::new("WR_DIS_BLOCK0_VERSION", 1, &[Extent::new(0, 30, 1)]);
/// Disable reading from BlOCK4-10
pub const RD_DIS: EfuseField = EfuseField::new("RD_DIS", 7, &[Extent::new(0, 32, 7)]);
/// rd_dis of BLOCK_KEY0
pub const RD_DIS_BLOCK_KEY0: EfuseField =
    EfuseField::new("RD_DIS_BLOCK_KEY0", 1, &[Extent::new(0, 32, 1)]);
/// rd_dis of BLOCK_KEY1
pub const RD_DIS_BLOCK_KEY1: EfuseField =
    EfuseField::new("RD_DIS_BLOCK_KEY1", 1, &[Extent::new(0, 33, 1)]);
/// rd_dis of BLOCK_KEY2
pub const RD_DIS_BLOCK_KEY2: EfuseField =
    EfuseField::new("RD_DIS_BLOCK_KEY2", 1, &[Extent::new(0, 34, 1)]);
/// rd_dis of BLOCK_KEY3
pub const RD_DIS_BLOCK_KEY3: EfuseField =
    EfuseField::new("RD_DIS_BLOCK_KEY3", 1, &[Extent::new(0, 35, 1)]);
/// rd_dis of BLOCK_KEY4
pub const RD_DIS_BLOCK_KEY4: EfuseField =
    EfuseField::new("RD_DIS_BLOCK_KEY4", 1, &[Extent::new(0, 36, 1)]);
/// rd_dis of BLOCK_KEY5
pub const RD_DIS_BLOCK_KEY5: EfuseField =
    EfuseField::new("RD_DIS_BLOCK_KEY5", 1, &[Extent::new(0, 37, 1)]);
/// rd_dis of BLOCK_SYS_DATA2
pub const RD_DIS_BLOCK_SYS_DATA2: EfuseField =
    EfuseField::new("RD_DIS_BLOCK_SYS_DATA2", 1, &[Extent::new(0, 38, 1)]);
/// Set this bit to disable Icache
pub const DIS_ICACHE: EfuseField = EfuseField::new("DIS_ICACHE", 1, &[Extent::new(0, 40, 1)]);
/// Set this bit to disable Dcache
pub const DIS_DCACHE: EfuseField = EfuseField::new("DIS_DCACHE", 1, &[Extent::new(0, 41, 1)]);
/// Disables Icache when SoC is in Download mode
pub const DIS_DOWNLOAD_ICACHE: EfuseField =
    EfuseField::new("DIS_DOWNLOAD_ICACHE", 1, &[Extent::new(0, 42, 1)]);
/// Disables Dcache when SoC is in Download mode
pub const DIS_DOWNLOAD_DCACHE: EfuseField =
    EfuseField::new("DIS_DOWNLOAD_DCACHE", 1, &[Extent::new(0, 43, 1)]);
/// Set this bit to disable the function that forces chip into download mode
pub const DIS_FORCE_DOWNLOAD: EfuseField =
    EfuseField::new("DIS_FORCE_DOWNLOAD", 1, &[Extent::new(0, 44, 1)]);
/// Set this bit to disable USB OTG function
pub const DIS_USB: EfuseField = EfuseField::new("DIS_USB", 1, &[Extent::new(0, 45, 1)]);
/// Set this bit to disable the TWAI Controller function
pub const DIS_TWAI: EfuseField = EfuseField::new("DIS_TWAI", 1, &[Extent::new(0, 46, 1)]);
/// Disables capability to Remap RAM to ROM address space
pub const DIS_BOOT_REMAP: EfuseField =
    EfuseField::new("DIS_BOOT_REMAP", 1, &[Extent::new(0, 47, 1)]);
/// Software disables JTAG. When software disabled; JTAG can be activated
/// temporarily by HMAC peripheral
pub const SOFT_DIS_JTAG: EfuseField = EfuseField::new("SOFT_DIS_JTAG", 1, &[Extent::new(0, 49, 1)]);
/// Hardware disables JTAG permanently
pub const HARD_DIS_JTAG: EfuseField = EfuseField::new("HARD_DIS_JTAG", 1, &[Extent::new(0, 50, 1)]);
/// Disables flash encryption when in download boot modes
pub const DIS_DOWNLOAD_MANUAL_ENCRYPT: EfuseField =
    EfuseField::new("DIS_DOWNLOAD_MANUAL_ENCRYPT", 1, &[Extent::new(0, 51, 1)]);
/// Set this bit to exchange USB D+ and D- pins
pub const USB_EXCHG_PINS: EfuseField =
    EfuseField::new("USB_EXCHG_PINS", 1, &[Extent::new(0, 56, 1)]);
/// Set this bit to enable external USB PHY
pub const USB_EXT_PHY_ENABLE: EfuseField =
    EfuseField::new("USB_EXT_PHY_ENABLE", 1, &[Extent::new(0, 57, 1)]);
/// If set; forces USB BVALID to 1
pub const USB_FORCE_NOPERSIST: EfuseField =
    EfuseField::new("USB_FORCE_NOPERSIST", 1, &[Extent::new(0, 58, 1)]);
/// BLOCK0 efuse version
pub const BLOCK0_VERSION: EfuseField =
    EfuseField::new("BLOCK0_VERSION", 2, &[Extent::new(0, 59, 2)]);
/// If VDD_SPI_FORCE is 1; this value determines if the VDD_SPI regulator is
/// powered on
pub const VDD_SPI_XPD: EfuseField = EfuseField::new("VDD_SPI_XPD", 1, &[Extent::new(0, 68, 1)]);
/// If VDD_SPI_FORCE is 1; determines VDD_SPI voltage {0: "VDD_SPI connects to
/// 1.8 V LDO"; 1: "VDD_SPI connects to VDD3P3_RTC_IO"}
pub const VDD_SPI_TIEH: EfuseField = EfuseField::new("VDD_SPI_TIEH", 1, &[Extent::new(0, 69, 1)]);
/// Set this bit to use XPD_VDD_PSI_REG and VDD_SPI_TIEH to configure VDD_SPI
/// LDO
pub const VDD_SPI_FORCE: EfuseField = EfuseField::new("VDD_SPI_FORCE", 1, &[Extent::new(0, 70, 1)]);
/// RTC watchdog timeout threshold; in unit of slow clock cycle {0: "40000"; 1:
/// "80000"; 2: "160000"; 3: "320000"}
pub const WDT_DELAY_SEL: EfuseField = EfuseField::new("WDT_DELAY_SEL", 2, &[Extent::new(0, 80, 2)]);
/// Enables flash encryption when 1 or 3 bits are set and disabled otherwise {0:
/// "Disable"; 1: "Enable"; 3: "Disable"; 7: "Enable"}
pub const SPI_BOOT_CRYPT_CNT: EfuseField =
    EfuseField::new("SPI_BOOT_CRYPT_CNT", 3, &[Extent::new(0, 82, 3)]);
/// Revoke 1st secure boot key
pub const SECURE_BOOT_KEY_REVOKE0: EfuseField =
    EfuseField::new("SECURE_BOOT_KEY_REVOKE0", 1, &[Extent::new(0, 85, 1)]);
/// Revoke 2nd secure boot key
pub const SECURE_BOOT_KEY_REVOKE1: EfuseField =
    EfuseField::new("SECURE_BOOT_KEY_REVOKE1", 1, &[Extent::new(0, 86, 1)]);
/// Revoke 3rd secure boot key
pub const SECURE_BOOT_KEY_REVOKE2: EfuseField =
    EfuseField::new("SECURE_BOOT_KEY_REVOKE2", 1, &[Extent::new(0, 87, 1)]);
/// Purpose of KEY0
pub const KEY_PURPOSE_0: EfuseField = EfuseField::new("KEY_PURPOSE_0", 4, &[Extent::new(0, 88, 4)]);
/// Purpose of KEY1
pub const KEY_PURPOSE_1: EfuseField = EfuseField::new("KEY_PURPOSE_1", 4, &[Extent::new(0, 92, 4)]);
/// Purpose of KEY2
pub const KEY_PURPOSE_2: EfuseField = EfuseField::new("KEY_PURPOSE_2", 4, &[Extent::new(0, 96, 4)]);
/// Purpose of KEY3
pub const KEY_PURPOSE_3: EfuseField =
    EfuseField::new("KEY_PURPOSE_3", 4, &[Extent::new(0, 100, 4)]);
/// Purpose of KEY4
pub const KEY_PURPOSE_4: EfuseField =
    EfuseField::new("KEY_PURPOSE_4", 4, &[Extent::new(0, 104, 4)]);
/// Purpose of KEY5
pub const KEY_PURPOSE_5: EfuseField =
    EfuseField::new("KEY_PURPOSE_5", 4, &[Extent::new(0, 108, 4)]);
/// Set this bit to enable secure boot
pub const SECURE_BOOT_EN: EfuseField =
    EfuseField::new("SECURE_BOOT_EN", 1, &[Extent::new(0, 116, 1)]);
/// Set this bit to enable aggressive secure boot key revocation mode
pub const SECURE_BOOT_AGGRESSIVE_REVOKE: EfuseField =
    EfuseField::new("SECURE_BOOT_AGGRESSIVE_REVOKE", 1, &[Extent::new(0, 117, 1)]);
/// Configures flash startup delay after SoC power-up; in unit of (ms/2). When
/// the value is 15; delay is 7.5 ms
pub const FLASH_TPUW: EfuseField = EfuseField::new("FLASH_TPUW", 4, &[Extent::new(0, 124, 4)]);
/// Set this bit to disable all download boot modes
pub const DIS_DOWNLOAD_MODE: EfuseField =
    EfuseField::new("DIS_DOWNLOAD_MODE", 1, &[Extent::new(0, 128, 1)]);
/// Set this bit to disable Legacy SPI boot mode
pub const DIS_LEGACY_SPI_BOOT: EfuseField =
    EfuseField::new("DIS_LEGACY_SPI_BOOT", 1, &[Extent::new(0, 129, 1)]);
/// Selects the default UART for printing boot messages {0: "UART0"; 1: "UART1"}
pub const UART_PRINT_CHANNEL: EfuseField =
    EfuseField::new("UART_PRINT_CHANNEL", 1, &[Extent::new(0, 130, 1)]);
/// Set this bit to disable use of USB OTG in UART download boot mode
pub const DIS_USB_DOWNLOAD_MODE: EfuseField =
    EfuseField::new("DIS_USB_DOWNLOAD_MODE", 1, &[Extent::new(0, 132, 1)]);
/// Set this bit to enable secure UART download mode (read/write flash only)
pub const ENABLE_SECURITY_DOWNLOAD: EfuseField =
    EfuseField::new("ENABLE_SECURITY_DOWNLOAD", 1, &[Extent::new(0, 133, 1)]);
/// Set the default UART boot message output mode {0: "Enable"; 1: "Enable when
/// GPIO46 is low at reset"; 2: "Enable when GPIO46 is high at reset"; 3:
/// "Disable"}
pub const UART_PRINT_CONTROL: EfuseField =
    EfuseField::new("UART_PRINT_CONTROL", 2, &[Extent::new(0, 134, 2)]);
/// Set default power supply for GPIO33-GPIO37; set when SPI flash is
/// initialized {0: "VDD3P3_CPU"; 1: "VDD_SPI"}
pub const PIN_POWER_SELECTION: EfuseField =
    EfuseField::new("PIN_POWER_SELECTION", 1, &[Extent::new(0, 136, 1)]);
/// SPI flash type {0: "4 data lines"; 1: "8 data lines"}
pub const FLASH_TYPE: EfuseField = EfuseField::new("FLASH_TYPE", 1, &[Extent::new(0, 137, 1)]);
/// If set; forces ROM code to send an SPI flash resume command during SPI boot
pub const FORCE_SEND_RESUME: EfuseField =
    EfuseField::new("FORCE_SEND_RESUME", 1, &[Extent::new(0, 138, 1)]);
/// Secure version (used by ESP-IDF anti-rollback feature)
pub const SECURE_VERSION: EfuseField =
    EfuseField::new("SECURE_VERSION", 16, &[Extent::new(0, 139, 16)]);
/// Disables check of wafer version major
pub const DISABLE_WAFER_VERSION_MAJOR: EfuseField =
    EfuseField::new("DISABLE_WAFER_VERSION_MAJOR", 1, &[Extent::new(0, 160, 1)]);
/// Disables check of blk version major
pub const DISABLE_BLK_VERSION_MAJOR: EfuseField =
    EfuseField::new("DISABLE_BLK_VERSION_MAJOR", 1, &[Extent::new(0, 161, 1)]);
/// MAC address
pub const MAC: EfuseField = EfuseField::new(
    "MAC",
    48,
    &[
        Extent::new(1, 40, 8),
        Extent::new(1, 32, 8),
        Extent::new(1, 24, 8),
        Extent::new(1, 16, 8),
        Extent::new(1, 8, 8),
        Extent::new(1, 0, 8),
    ],
);
/// SPI_PAD_configure CLK
pub const SPI_PAD_CONFIG_CLK: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_CLK", 6, &[Extent::new(1, 48, 6)]);
/// SPI_PAD_configure Q(D1)
pub const SPI_PAD_CONFIG_Q: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_Q", 6, &[Extent::new(1, 54, 6)]);
/// SPI_PAD_configure D(D0)
pub const SPI_PAD_CONFIG_D: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_D", 6, &[Extent::new(1, 60, 6)]);
/// SPI_PAD_configure CS
pub const SPI_PAD_CONFIG_CS: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_CS", 6, &[Extent::new(1, 66, 6)]);
/// SPI_PAD_configure HD(D3)
pub const SPI_PAD_CONFIG_HD: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_HD", 6, &[Extent::new(1, 72, 6)]);
/// SPI_PAD_configure WP(D2)
pub const SPI_PAD_CONFIG_WP: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_WP", 6, &[Extent::new(1, 78, 6)]);
/// SPI_PAD_configure DQS
pub const SPI_PAD_CONFIG_DQS: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_DQS", 6, &[Extent::new(1, 84, 6)]);
/// SPI_PAD_configure D4
pub const SPI_PAD_CONFIG_D4: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_D4", 6, &[Extent::new(1, 90, 6)]);
/// SPI_PAD_configure D5
pub const SPI_PAD_CONFIG_D5: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_D5", 6, &[Extent::new(1, 96, 6)]);
/// SPI_PAD_configure D6
pub const SPI_PAD_CONFIG_D6: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_D6", 6, &[Extent::new(1, 102, 6)]);
/// SPI_PAD_configure D7
pub const SPI_PAD_CONFIG_D7: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_D7", 6, &[Extent::new(1, 108, 6)]);
/// WAFER_VERSION_MAJOR
pub const WAFER_VERSION_MAJOR: EfuseField =
    EfuseField::new("WAFER_VERSION_MAJOR", 2, &[Extent::new(1, 114, 2)]);
/// WAFER_VERSION_MINOR most significant bit
pub const WAFER_VERSION_MINOR_HI: EfuseField =
    EfuseField::new("WAFER_VERSION_MINOR_HI", 1, &[Extent::new(1, 116, 1)]);
/// Flash version
pub const FLASH_VERSION: EfuseField =
    EfuseField::new("FLASH_VERSION", 4, &[Extent::new(1, 117, 4)]);
/// BLK_VERSION_MAJOR
pub const BLK_VERSION_MAJOR: EfuseField =
    EfuseField::new("BLK_VERSION_MAJOR", 2, &[Extent::new(1, 121, 2)]);
/// PSRAM version
pub const PSRAM_VERSION: EfuseField =
    EfuseField::new("PSRAM_VERSION", 4, &[Extent::new(1, 124, 4)]);
/// Package version
pub const PKG_VERSION: EfuseField = EfuseField::new("PKG_VERSION", 4, &[Extent::new(1, 128, 4)]);
/// WAFER_VERSION_MINOR least significant bits
pub const WAFER_VERSION_MINOR_LO: EfuseField =
    EfuseField::new("WAFER_VERSION_MINOR_LO", 3, &[Extent::new(1, 132, 3)]);
/// Optional unique 128-bit ID
pub const OPTIONAL_UNIQUE_ID: EfuseField =
    EfuseField::new("OPTIONAL_UNIQUE_ID", 128, &[Extent::new(2, 0, 128)]);
/// 4 bit of ADC calibration
pub const ADC_CALIB: EfuseField = EfuseField::new("ADC_CALIB", 4, &[Extent::new(2, 128, 4)]);
/// BLK_VERSION_MINOR of BLOCK2 {0: "No calib"; 1: "ADC calib V1"; 2: "ADC calib
/// V2"}
pub const BLK_VERSION_MINOR: EfuseField =
    EfuseField::new("BLK_VERSION_MINOR", 3, &[Extent::new(2, 132, 3)]);
/// Temperature calibration data
pub const TEMP_CALIB: EfuseField = EfuseField::new("TEMP_CALIB", 9, &[Extent::new(2, 135, 9)]);
///
pub const RTCCALIB_V1IDX_A10H: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A10H", 8, &[Extent::new(2, 144, 8)]);
///
pub const RTCCALIB_V1IDX_A11H: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A11H", 8, &[Extent::new(2, 152, 8)]);
///
pub const RTCCALIB_V1IDX_A12H: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A12H", 8, &[Extent::new(2, 160, 8)]);
///
pub const RTCCALIB_V1IDX_A13H: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A13H", 8, &[Extent::new(2, 168, 8)]);
///
pub const RTCCALIB_V1IDX_A20H: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A20H", 8, &[Extent::new(2, 176, 8)]);
///
pub const RTCCALIB_V1IDX_A21H: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A21H", 8, &[Extent::new(2, 184, 8)]);
///
pub const RTCCALIB_V1IDX_A22H: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A22H", 8, &[Extent::new(2, 192, 8)]);
///
pub const RTCCALIB_V1IDX_A23H: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A23H", 8, &[Extent::new(2, 200, 8)]);
///
pub const RTCCALIB_V1IDX_A10L: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A10L", 6, &[Extent::new(2, 208, 6)]);
///
pub const RTCCALIB_V1IDX_A11L: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A11L", 6, &[Extent::new(2, 214, 6)]);
///
pub const RTCCALIB_V1IDX_A12L: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A12L", 6, &[Extent::new(2, 220, 6)]);
///
pub const RTCCALIB_V1IDX_A13L: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A13L", 6, &[Extent::new(2, 226, 6)]);
///
pub const RTCCALIB_V1IDX_A20L: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A20L", 6, &[Extent::new(2, 232, 6)]);
///
pub const RTCCALIB_V1IDX_A21L: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A21L", 6, &[Extent::new(2, 238, 6)]);
///
pub const RTCCALIB_V1IDX_A22L: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A22L", 6, &[Extent::new(2, 244, 6)]);
///
pub const RTCCALIB_V1IDX_A23L: EfuseField =
    EfuseField::new("RTCCALIB_V1IDX_A23L", 6, &[Extent::new(2, 250, 6)]);
/// User data
pub const USER_DATA: EfuseField = EfuseField::new("USER_DATA", 256, &[Extent::new(3, 0, 256)]);
/// Custom MAC
pub const USER_DATA_MAC_CUSTOM: EfuseField =
    EfuseField::new("USER_DATA_MAC_CUSTOM", 48, &[Extent::new(3, 200, 48)]);
/// Key0 or user data
pub const KEY0: EfuseField = EfuseField::new("KEY0", 256, &[Extent::new(4, 0, 256)]);
/// Key1 or user data
pub const KEY1: EfuseField = EfuseField::new("KEY1", 256, &[Extent::new(5, 0, 256)]);
/// Key2 or user data
pub const KEY2: EfuseField = EfuseField::new("KEY2", 256, &[Extent::new(6, 0, 256)]);
/// Key3 or user data
pub const KEY3: EfuseField = EfuseField::new("KEY3", 256, &[Extent::new(7, 0, 256)]);
/// Key4 or user data
pub const KEY4: EfuseField = EfuseField::new("KEY4", 256, &[Extent::new(8, 0, 256)]);
/// Key5 or user data
pub const KEY5: EfuseField = EfuseField::new("KEY5", 256, &[Extent::new(9, 0, 256)]);
/// System data part 2 (reserved)
pub const SYS_DATA_PART2: EfuseField =
    EfuseField::new("SYS_DATA_PART2", 256, &[Extent::new(10, 0, 256)]);

/// Every field defined for this device, in table order
pub const FIELDS: &[EfuseField] = &[
    WR_DIS,
    WR_DIS_RD_DIS,
    WR_DIS_DIS_ICACHE,
    WR_DIS_DIS_DCACHE,
    WR_DIS_DIS_DOWNLOAD_ICACHE,
    WR_DIS_DIS_DOWNLOAD_DCACHE,
    WR_DIS_DIS_FORCE_DOWNLOAD,
    WR_DIS_DIS_USB,
    WR_DIS_DIS_TWAI,
    WR_DIS_DIS_BOOT_REMAP,
    WR_DIS_SOFT_DIS_JTAG,
    WR_DIS_HARD_DIS_JTAG,
    WR_DIS_DIS_DOWNLOAD_MANUAL_ENCRYPT,
    WR_DIS_VDD_SPI_XPD,
    WR_DIS_VDD_SPI_TIEH,
    WR_DIS_VDD_SPI_FORCE,
    WR_DIS_WDT_DELAY_SEL,
    WR_DIS_SPI_BOOT_CRYPT_CNT,
    WR_DIS_SECURE_BOOT_KEY_REVOKE0,
    WR_DIS_SECURE_BOOT_KEY_REVOKE1,
    WR_DIS_SECURE_BOOT_KEY_REVOKE2,
    WR_DIS_KEY_PURPOSE_0,
    WR_DIS_KEY_PURPOSE_1,
    WR_DIS_KEY_PURPOSE_2,
    WR_DIS_KEY_PURPOSE_3,
    WR_DIS_KEY_PURPOSE_4,
    WR_DIS_KEY_PURPOSE_5,
    WR_DIS_SECURE_BOOT_EN,
    WR_DIS_SECURE_BOOT_AGGRESSIVE_REVOKE,
    WR_DIS_FLASH_TPUW,
    WR_DIS_DIS_DOWNLOAD_MODE,
    WR_DIS_DIS_LEGACY_SPI_BOOT,
    WR_DIS_UART_PRINT_CHANNEL,
    WR_DIS_DIS_USB_DOWNLOAD_MODE,
    WR_DIS_ENABLE_SECURITY_DOWNLOAD,
    WR_DIS_UART_PRINT_CONTROL,
    WR_DIS_PIN_POWER_SELECTION,
    WR_DIS_FLASH_TYPE,
    WR_DIS_FORCE_SEND_RESUME,
    WR_DIS_SECURE_VERSION,
    WR_DIS_BLK1,
    WR_DIS_MAC,
    WR_DIS_SPI_PAD_CONFIG_CLK,
    WR_DIS_SPI_PAD_CONFIG_Q,
    WR_DIS_SPI_PAD_CONFIG_D,
    WR_DIS_SPI_PAD_CONFIG_CS,
    WR_DIS_SPI_PAD_CONFIG_HD,
    WR_DIS_SPI_PAD_CONFIG_WP,
    WR_DIS_SPI_PAD_CONFIG_DQS,
    WR_DIS_SPI_PAD_CONFIG_D4,
    WR_DIS_SPI_PAD_CONFIG_D5,
    WR_DIS_SPI_PAD_CONFIG_D6,
    WR_DIS_SPI_PAD_CONFIG_D7,
    WR_DIS_WAFER_VERSION_MAJOR,
    WR_DIS_WAFER_VERSION_MINOR_HI,
    WR_DIS_FLASH_VERSION,
    WR_DIS_BLK_VERSION_MAJOR,
    WR_DIS_PSRAM_VERSION,
    WR_DIS_PKG_VERSION,
    WR_DIS_WAFER_VERSION_MINOR_LO,
    WR_DIS_SYS_DATA_PART1,
    WR_DIS_OPTIONAL_UNIQUE_ID,
    WR_DIS_ADC_CALIB,
    WR_DIS_BLK_VERSION_MINOR,
    WR_DIS_TEMP_CALIB,
    WR_DIS_RTCCALIB_V1IDX_A10H,
    WR_DIS_RTCCALIB_V1IDX_A11H,
    WR_DIS_RTCCALIB_V1IDX_A12H,
    WR_DIS_RTCCALIB_V1IDX_A13H,
    WR_DIS_RTCCALIB_V1IDX_A20H,
    WR_DIS_RTCCALIB_V1IDX_A21H,
    WR_DIS_RTCCALIB_V1IDX_A22H,
    WR_DIS_RTCCALIB_V1IDX_A23H,
    WR_DIS_RTCCALIB_V1IDX_A10L,
    WR_DIS_RTCCALIB_V1IDX_A11L,
    WR_DIS_RTCCALIB_V1IDX_A12L,
    WR_DIS_RTCCALIB_V1IDX_A13L,
    WR_DIS_RTCCALIB_V1IDX_A20L,
    WR_DIS_RTCCALIB_V1IDX_A21L,
    WR_DIS_RTCCALIB_V1IDX_A22L,
    WR_DIS_RTCCALIB_V1IDX_A23L,
    WR_DIS_BLOCK_USR_DATA,
    WR_DIS_CUSTOM_MAC,
    WR_DIS_BLOCK_KEY0,
    WR_DIS_BLOCK_KEY1,
    WR_DIS_BLOCK_KEY2,
    WR_DIS_BLOCK_KEY3,
    WR_DIS_BLOCK_KEY4,
    WR_DIS_BLOCK_KEY5,
    WR_DIS_BLOCK_SYS_DATA2,
    WR_DIS_USB_EXCHG_PINS,
    WR_DIS_USB_EXT_PHY_ENABLE,
    WR_DIS_USB_FORCE_NOPERSIST,
    WR_DIS_BLOCK0_VERSION,
    RD_DIS,
    RD_DIS_BLOCK_KEY0,
    RD_DIS_BLOCK_KEY1,
    RD_DIS_BLOCK_KEY2,
    RD_DIS_BLOCK_KEY3,
    RD_DIS_BLOCK_KEY4,
    RD_DIS_BLOCK_KEY5,
    RD_DIS_BLOCK_SYS_DATA2,
    DIS_ICACHE,
    DIS_DCACHE,
    DIS_DOWNLOAD_ICACHE,
    DIS_DOWNLOAD_DCACHE,
    DIS_FORCE_DOWNLOAD,
    DIS_USB,
    DIS_TWAI,
    DIS_BOOT_REMAP,
    SOFT_DIS_JTAG,
    HARD_DIS_JTAG,
    DIS_DOWNLOAD_MANUAL_ENCRYPT,
    USB_EXCHG_PINS,
    USB_EXT_PHY_ENABLE,
    USB_FORCE_NOPERSIST,
    BLOCK0_VERSION,
    VDD_SPI_XPD,
    VDD_SPI_TIEH,
    VDD_SPI_FORCE,
    WDT_DELAY_SEL,
    SPI_BOOT_CRYPT_CNT,
    SECURE_BOOT_KEY_REVOKE0,
    SECURE_BOOT_KEY_REVOKE1,
    SECURE_BOOT_KEY_REVOKE2,
    KEY_PURPOSE_0,
    KEY_PURPOSE_1,
    KEY_PURPOSE_2,
    KEY_PURPOSE_3,
    KEY_PURPOSE_4,
    KEY_PURPOSE_5,
    SECURE_BOOT_EN,
    SECURE_BOOT_AGGRESSIVE_REVOKE,
    FLASH_TPUW,
    DIS_DOWNLOAD_MODE,
    DIS_LEGACY_SPI_BOOT,
    UART_PRINT_CHANNEL,
    DIS_USB_DOWNLOAD_MODE,
    ENABLE_SECURITY_DOWNLOAD,
    UART_PRINT_CONTROL,
    PIN_POWER_SELECTION,
    FLASH_TYPE,
    FORCE_SEND_RESUME,
    SECURE_VERSION,
    DISABLE_WAFER_VERSION_MAJOR,
    DISABLE_BLK_VERSION_MAJOR,
    MAC,
    SPI_PAD_CONFIG_CLK,
    SPI_PAD_CONFIG_Q,
    SPI_PAD_CONFIG_D,
    SPI_PAD_CONFIG_CS,
    SPI_PAD_CONFIG_HD,
    SPI_PAD_CONFIG_WP,
    SPI_PAD_CONFIG_DQS,
    SPI_PAD_CONFIG_D4,
    SPI_PAD_CONFIG_D5,
    SPI_PAD_CONFIG_D6,
    SPI_PAD_CONFIG_D7,
    WAFER_VERSION_MAJOR,
    WAFER_VERSION_MINOR_HI,
    FLASH_VERSION,
    BLK_VERSION_MAJOR,
    PSRAM_VERSION,
    PKG_VERSION,
    WAFER_VERSION_MINOR_LO,
    OPTIONAL_UNIQUE_ID,
    ADC_CALIB,
    BLK_VERSION_MINOR,
    TEMP_CALIB,
    RTCCALIB_V1IDX_A10H,
    RTCCALIB_V1IDX_A11H,
    RTCCALIB_V1IDX_A12H,
    RTCCALIB_V1IDX_A13H,
    RTCCALIB_V1IDX_A20H,
    RTCCALIB_V1IDX_A21H,
    RTCCALIB_V1IDX_A22H,
    RTCCALIB_V1IDX_A23H,
    RTCCALIB_V1IDX_A10L,
    RTCCALIB_V1IDX_A11L,
    RTCCALIB_V1IDX_A12L,
    RTCCALIB_V1IDX_A13L,
    RTCCALIB_V1IDX_A20L,
    RTCCALIB_V1IDX_A21L,
    RTCCALIB_V1IDX_A22L,
    RTCCALIB_V1IDX_A23L,
    USER_DATA,
    USER_DATA_MAC_CUSTOM,
    KEY0,
    KEY1,
    KEY2,
    KEY3,
    KEY4,
    KEY5,
    SYS_DATA_PART2,
];
