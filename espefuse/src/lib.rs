//! Read, stage and burn eFuses of Espressif devices
//!
//! eFuses are one-time programmable bits: once burned a bit can never be
//! cleared again. This crate maps named fields onto the bits of the eFuse
//! blocks of a device, encodes and decodes blocks using the coding scheme
//! the hardware applies to them, and burns new values in verified batches.
//!
//! ## As an application
//!
//! [espefuse] operates on a virtual device image by default and can be
//! installed using `cargo install`:
//!
//! ```bash
//! $ cargo install espefuse
//! ```
//!
//! ## As a library
//!
//! The library is agnostic of how the eFuse controller is reached; anything
//! implementing [EfuseInterface] can be used. Disable the default features
//! to drop the dependencies of the command-line interface:
//!
//! ```toml
//! espefuse = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust
//! use espefuse::{Chip, Efuse, VirtualEfuse};
//!
//! let layout = Chip::Esp32s3.layout();
//! let efuse = Efuse::new(VirtualEfuse::new(layout), layout)?;
//!
//! let mut batch = efuse.batch()?;
//! batch.write_field_cnt(Chip::Esp32s3.field("SPI_BOOT_CRYPT_CNT")?, 1)?;
//! batch.commit()?;
//!
//! assert_eq!(efuse.read_field_cnt(Chip::Esp32s3.field("SPI_BOOT_CRYPT_CNT")?)?, 1);
//! # Ok::<(), espefuse::Error>(())
//! ```
//!
//! [espefuse]: https://crates.io/crates/espefuse

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use self::{
    coding::CodingScheme,
    efuse::{Batch, Efuse},
    error::{Error, ErrorKind},
    field::{EfuseField, Extent},
    interface::{EfuseInterface, HardwareErrorStatus},
    targets::Chip,
    virtual_efuse::VirtualEfuse,
};

pub mod block;
pub mod coding;
pub mod efuse;
pub mod field;
pub mod interface;
pub mod targets;
pub mod virtual_efuse;

mod error;

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;
