//! eFuse field definitions for the ESP32
//!
//! Unlike the tables of later devices this one is maintained by hand, after
//! the eFuse chapter of the ESP32 technical reference manual. BLOCK1 to
//! BLOCK3 may be 3/4 or Repeat coded, in which case the logical view of
//! those blocks is shortened and fields reaching beyond it can not be
//! accessed.

#![allow(unused)]

use crate::field::{EfuseField, Extent};

/// Disable programming of individual eFuses
pub const WR_DIS: EfuseField = EfuseField::new("WR_DIS", 16, &[Extent::new(0, 0, 16)]);
/// wr_dis of RD_DIS
pub const WR_DIS_RD_DIS: EfuseField = EfuseField::new("WR_DIS_RD_DIS", 1, &[Extent::new(0, 0, 1)]);
/// wr_dis of WR_DIS
pub const WR_DIS_WR_DIS: EfuseField = EfuseField::new("WR_DIS_WR_DIS", 1, &[Extent::new(0, 1, 1)]);
/// wr_dis of FLASH_CRYPT_CNT
pub const WR_DIS_FLASH_CRYPT_CNT: EfuseField =
    EfuseField::new("WR_DIS_FLASH_CRYPT_CNT", 1, &[Extent::new(0, 2, 1)]);
/// wr_dis of MAC and MAC_CRC
pub const WR_DIS_MAC: EfuseField = EfuseField::new("WR_DIS_MAC", 1, &[Extent::new(0, 3, 1)]);
/// wr_dis of BLOCK1
pub const WR_DIS_BLK1: EfuseField = EfuseField::new("WR_DIS_BLK1", 1, &[Extent::new(0, 7, 1)]);
/// wr_dis of BLOCK2
pub const WR_DIS_BLK2: EfuseField = EfuseField::new("WR_DIS_BLK2", 1, &[Extent::new(0, 8, 1)]);
/// wr_dis of BLOCK3
pub const WR_DIS_BLK3: EfuseField = EfuseField::new("WR_DIS_BLK3", 1, &[Extent::new(0, 9, 1)]);
/// wr_dis of FLASH_CRYPT_CONFIG and CODING_SCHEME
pub const WR_DIS_FLASH_CRYPT_CODING_SCHEME: EfuseField =
    EfuseField::new("WR_DIS_FLASH_CRYPT_CODING_SCHEME", 1, &[Extent::new(0, 10, 1)]);
/// Disable reading from BLOCK1-3
pub const RD_DIS: EfuseField = EfuseField::new("RD_DIS", 4, &[Extent::new(0, 16, 4)]);
/// rd_dis of BLOCK1
pub const RD_DIS_BLK1: EfuseField = EfuseField::new("RD_DIS_BLK1", 1, &[Extent::new(0, 16, 1)]);
/// rd_dis of BLOCK2
pub const RD_DIS_BLK2: EfuseField = EfuseField::new("RD_DIS_BLK2", 1, &[Extent::new(0, 17, 1)]);
/// rd_dis of BLOCK3
pub const RD_DIS_BLK3: EfuseField = EfuseField::new("RD_DIS_BLK3", 1, &[Extent::new(0, 18, 1)]);
/// rd_dis of FLASH_CRYPT_CONFIG and CODING_SCHEME
pub const RD_DIS_FLASH_CRYPT_CODING_SCHEME: EfuseField =
    EfuseField::new("RD_DIS_FLASH_CRYPT_CODING_SCHEME", 1, &[Extent::new(0, 19, 1)]);
/// Flash encryption is enabled if this field has an odd number of bits set
pub const FLASH_CRYPT_CNT: EfuseField =
    EfuseField::new("FLASH_CRYPT_CNT", 7, &[Extent::new(0, 20, 7)]);
/// Disable UART download mode. Valid for ESP32 V3 and newer
pub const UART_DOWNLOAD_DIS: EfuseField =
    EfuseField::new("UART_DOWNLOAD_DIS", 1, &[Extent::new(0, 27, 1)]);
/// MAC address
pub const MAC: EfuseField = EfuseField::new(
    "MAC",
    48,
    &[
        Extent::new(0, 72, 8),
        Extent::new(0, 64, 8),
        Extent::new(0, 56, 8),
        Extent::new(0, 48, 8),
        Extent::new(0, 40, 8),
        Extent::new(0, 32, 8),
    ],
);
/// CRC8 for MAC address
pub const MAC_CRC: EfuseField = EfuseField::new("MAC_CRC", 8, &[Extent::new(0, 80, 8)]);
/// Disables APP CPU
pub const DISABLE_APP_CPU: EfuseField =
    EfuseField::new("DISABLE_APP_CPU", 1, &[Extent::new(0, 96, 1)]);
/// Disables Bluetooth
pub const DISABLE_BT: EfuseField = EfuseField::new("DISABLE_BT", 1, &[Extent::new(0, 97, 1)]);
/// Chip package identifier #4bit
pub const CHIP_PACKAGE_4BIT: EfuseField =
    EfuseField::new("CHIP_PACKAGE_4BIT", 1, &[Extent::new(0, 98, 1)]);
/// Disables cache
pub const DIS_CACHE: EfuseField = EfuseField::new("DIS_CACHE", 1, &[Extent::new(0, 99, 1)]);
/// read for SPI_pad_config_hd
pub const SPI_PAD_CONFIG_HD: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_HD", 5, &[Extent::new(0, 100, 5)]);
/// Chip package identifier
pub const CHIP_PACKAGE: EfuseField = EfuseField::new("CHIP_PACKAGE", 3, &[Extent::new(0, 105, 3)]);
/// If set alongside CHIP_CPU_FREQ_RATED; the ESP32's max CPU frequency is rated
/// for 160MHz. 240MHz otherwise
pub const CHIP_CPU_FREQ_LOW: EfuseField =
    EfuseField::new("CHIP_CPU_FREQ_LOW", 1, &[Extent::new(0, 108, 1)]);
/// If set; the ESP32's maximum CPU frequency has been rated
pub const CHIP_CPU_FREQ_RATED: EfuseField =
    EfuseField::new("CHIP_CPU_FREQ_RATED", 1, &[Extent::new(0, 109, 1)]);
/// BLOCK3 partially served for ADC calibration data
pub const BLK3_PART_RESERVE: EfuseField =
    EfuseField::new("BLK3_PART_RESERVE", 1, &[Extent::new(0, 110, 1)]);
/// bit is set to 1 for rev1 silicon
pub const CHIP_VER_REV1: EfuseField =
    EfuseField::new("CHIP_VER_REV1", 1, &[Extent::new(0, 111, 1)]);
/// 8MHz clock freq override
pub const CLK8M_FREQ: EfuseField = EfuseField::new("CLK8M_FREQ", 8, &[Extent::new(0, 128, 8)]);
/// True ADC reference voltage
pub const ADC_VREF: EfuseField = EfuseField::new("ADC_VREF", 5, &[Extent::new(0, 136, 5)]);
/// read for XPD_SDIO_REG
pub const XPD_SDIO_REG: EfuseField = EfuseField::new("XPD_SDIO_REG", 1, &[Extent::new(0, 142, 1)]);
/// If XPD_SDIO_FORCE & XPD_SDIO_REG {1: "3.3V"; 0: "1.8V"}
pub const XPD_SDIO_TIEH: EfuseField =
    EfuseField::new("XPD_SDIO_TIEH", 1, &[Extent::new(0, 143, 1)]);
/// Ignore MTDI pin (GPIO12) for VDD_SDIO on reset
pub const XPD_SDIO_FORCE: EfuseField =
    EfuseField::new("XPD_SDIO_FORCE", 1, &[Extent::new(0, 144, 1)]);
/// Override SD_CLK pad (GPIO6/SPICLK)
pub const SPI_PAD_CONFIG_CLK: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_CLK", 5, &[Extent::new(0, 160, 5)]);
/// Override SD_DATA_0 pad (GPIO7/SPIQ)
pub const SPI_PAD_CONFIG_Q: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_Q", 5, &[Extent::new(0, 165, 5)]);
/// Override SD_DATA_1 pad (GPIO8/SPID)
pub const SPI_PAD_CONFIG_D: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_D", 5, &[Extent::new(0, 170, 5)]);
/// Override SD_CMD pad (GPIO11/SPICS0)
pub const SPI_PAD_CONFIG_CS0: EfuseField =
    EfuseField::new("SPI_PAD_CONFIG_CS0", 5, &[Extent::new(0, 175, 5)]);
/// bit is set to 1 for rev2 silicon
pub const CHIP_VER_REV2: EfuseField =
    EfuseField::new("CHIP_VER_REV2", 1, &[Extent::new(0, 180, 1)]);
/// Power level of the internal voltage regulator
pub const VOL_LEVEL_HP_INV: EfuseField =
    EfuseField::new("VOL_LEVEL_HP_INV", 2, &[Extent::new(0, 182, 2)]);
/// Minor wafer version
pub const WAFER_VERSION_MINOR: EfuseField =
    EfuseField::new("WAFER_VERSION_MINOR", 2, &[Extent::new(0, 184, 2)]);
/// Flash encryption config (key tweak bits)
pub const FLASH_CRYPT_CONFIG: EfuseField =
    EfuseField::new("FLASH_CRYPT_CONFIG", 4, &[Extent::new(0, 188, 4)]);
/// Efuse variable block length scheme {0: "NONE (BLK1-3 len=256 bits)"; 1:
/// "3/4 (BLK1-3 len=192 bits)"; 2: "REPEAT (BLK1-3 len=128 bits) not
/// supported"; 3: "NONE (BLK1-3 len=256 bits)"}
pub const CODING_SCHEME: EfuseField =
    EfuseField::new("CODING_SCHEME", 2, &[Extent::new(0, 192, 2)]);
/// Disable ROM BASIC interpreter fallback
pub const CONSOLE_DEBUG_DISABLE: EfuseField =
    EfuseField::new("CONSOLE_DEBUG_DISABLE", 1, &[Extent::new(0, 194, 1)]);
///
pub const DISABLE_SDIO_HOST: EfuseField =
    EfuseField::new("DISABLE_SDIO_HOST", 1, &[Extent::new(0, 195, 1)]);
/// Secure boot V1 is enabled for bootloader image
pub const ABS_DONE_0: EfuseField = EfuseField::new("ABS_DONE_0", 1, &[Extent::new(0, 196, 1)]);
/// Secure boot V2 is enabled for bootloader image
pub const ABS_DONE_1: EfuseField = EfuseField::new("ABS_DONE_1", 1, &[Extent::new(0, 197, 1)]);
/// Disable JTAG
pub const JTAG_DISABLE: EfuseField = EfuseField::new("JTAG_DISABLE", 1, &[Extent::new(0, 198, 1)]);
/// Disable flash encryption in UART bootloader
pub const DISABLE_DL_ENCRYPT: EfuseField =
    EfuseField::new("DISABLE_DL_ENCRYPT", 1, &[Extent::new(0, 199, 1)]);
/// Disable flash decryption in UART bootloader
pub const DISABLE_DL_DECRYPT: EfuseField =
    EfuseField::new("DISABLE_DL_DECRYPT", 1, &[Extent::new(0, 200, 1)]);
/// Disable flash cache in UART bootloader
pub const DISABLE_DL_CACHE: EfuseField =
    EfuseField::new("DISABLE_DL_CACHE", 1, &[Extent::new(0, 201, 1)]);
/// Usage of efuse block 3 (reserved)
pub const KEY_STATUS: EfuseField = EfuseField::new("KEY_STATUS", 1, &[Extent::new(0, 202, 1)]);
/// Flash encryption key
pub const ENCRYPT_FLASH_KEY: EfuseField =
    EfuseField::new("ENCRYPT_FLASH_KEY", 256, &[Extent::new(1, 0, 256)]);
/// Secure boot key
pub const SECURE_BOOT_KEY: EfuseField =
    EfuseField::new("SECURE_BOOT_KEY", 256, &[Extent::new(2, 0, 256)]);
/// CRC8 for custom MAC address
pub const MAC_CUSTOM_CRC: EfuseField =
    EfuseField::new("MAC_CUSTOM_CRC", 8, &[Extent::new(3, 0, 8)]);
/// Custom MAC address
pub const MAC_CUSTOM: EfuseField = EfuseField::new("MAC_CUSTOM", 48, &[Extent::new(3, 8, 48)]);
/// ADC1 Two Point calibration low point. Only valid if
/// EFUSE_RD_BLK3_PART_RESERVE
pub const ADC1_TP_LOW: EfuseField = EfuseField::new("ADC1_TP_LOW", 7, &[Extent::new(3, 96, 7)]);
/// ADC1 Two Point calibration high point. Only valid if
/// EFUSE_RD_BLK3_PART_RESERVE
pub const ADC1_TP_HIGH: EfuseField = EfuseField::new("ADC1_TP_HIGH", 9, &[Extent::new(3, 103, 9)]);
/// ADC2 Two Point calibration low point. Only valid if
/// EFUSE_RD_BLK3_PART_RESERVE
pub const ADC2_TP_LOW: EfuseField = EfuseField::new("ADC2_TP_LOW", 7, &[Extent::new(3, 112, 7)]);
/// ADC2 Two Point calibration high point. Only valid if
/// EFUSE_RD_BLK3_PART_RESERVE
pub const ADC2_TP_HIGH: EfuseField = EfuseField::new("ADC2_TP_HIGH", 9, &[Extent::new(3, 119, 9)]);
/// Secure version for anti-rollback
pub const SECURE_VERSION: EfuseField =
    EfuseField::new("SECURE_VERSION", 32, &[Extent::new(3, 128, 32)]);
/// Version of the MAC field
pub const MAC_CUSTOM_VER: EfuseField =
    EfuseField::new("MAC_CUSTOM_VER", 8, &[Extent::new(3, 184, 8)]);

/// Every field defined for this device, in table order
pub const FIELDS: &[EfuseField] = &[
    WR_DIS,
    WR_DIS_RD_DIS,
    WR_DIS_WR_DIS,
    WR_DIS_FLASH_CRYPT_CNT,
    WR_DIS_MAC,
    WR_DIS_BLK1,
    WR_DIS_BLK2,
    WR_DIS_BLK3,
    WR_DIS_FLASH_CRYPT_CODING_SCHEME,
    RD_DIS,
    RD_DIS_BLK1,
    RD_DIS_BLK2,
    RD_DIS_BLK3,
    RD_DIS_FLASH_CRYPT_CODING_SCHEME,
    FLASH_CRYPT_CNT,
    UART_DOWNLOAD_DIS,
    MAC,
    MAC_CRC,
    DISABLE_APP_CPU,
    DISABLE_BT,
    CHIP_PACKAGE_4BIT,
    DIS_CACHE,
    SPI_PAD_CONFIG_HD,
    CHIP_PACKAGE,
    CHIP_CPU_FREQ_LOW,
    CHIP_CPU_FREQ_RATED,
    BLK3_PART_RESERVE,
    CHIP_VER_REV1,
    CLK8M_FREQ,
    ADC_VREF,
    XPD_SDIO_REG,
    XPD_SDIO_TIEH,
    XPD_SDIO_FORCE,
    SPI_PAD_CONFIG_CLK,
    SPI_PAD_CONFIG_Q,
    SPI_PAD_CONFIG_D,
    SPI_PAD_CONFIG_CS0,
    CHIP_VER_REV2,
    VOL_LEVEL_HP_INV,
    WAFER_VERSION_MINOR,
    FLASH_CRYPT_CONFIG,
    CODING_SCHEME,
    CONSOLE_DEBUG_DISABLE,
    DISABLE_SDIO_HOST,
    ABS_DONE_0,
    ABS_DONE_1,
    JTAG_DISABLE,
    DISABLE_DL_ENCRYPT,
    DISABLE_DL_DECRYPT,
    DISABLE_DL_CACHE,
    KEY_STATUS,
    ENCRYPT_FLASH_KEY,
    SECURE_BOOT_KEY,
    MAC_CUSTOM_CRC,
    MAC_CUSTOM,
    ADC1_TP_LOW,
    ADC1_TP_HIGH,
    ADC2_TP_LOW,
    ADC2_TP_HIGH,
    SECURE_VERSION,
    MAC_CUSTOM_VER,
];
