//! Library and application errors

use std::io;

use miette::Diagnostic;
use strum::Display;
use thiserror::Error;

use crate::coding::CodingScheme;

/// All possible errors returned by espefuse
#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("eFuse block {0} does not exist on this device")]
    #[diagnostic(code(espefuse::invalid_block))]
    InvalidBlock(u8),

    #[error("Field `{field}` declares {declared} bits but its extents cover {extents} bits")]
    #[diagnostic(
        code(espefuse::field_width_mismatch),
        help("The field descriptor table is inconsistent with itself")
    )]
    FieldWidthMismatch {
        field: &'static str,
        declared: u32,
        extents: u32,
    },

    #[error("Field `{field}` ends at bit {end} of BLOCK{block}, which only holds {available} bits")]
    #[diagnostic(
        code(espefuse::extent_out_of_range),
        help("Check the coding scheme of the block, coded blocks hold fewer logical bits")
    )]
    ExtentOutOfRange {
        field: &'static str,
        block: u8,
        end: u32,
        available: u32,
    },

    #[error("Invalid bit count {requested} for field `{field}` of {width} bits")]
    #[diagnostic(code(espefuse::invalid_bit_count))]
    InvalidBitCount {
        field: &'static str,
        requested: u32,
        width: u32,
    },

    #[error("Field `{field}` is {width} bits wide, it cannot be accessed as a single bit")]
    #[diagnostic(code(espefuse::not_a_bit))]
    NotABit { field: &'static str, width: u32 },

    #[error("Field `{field}` needs {needed} bytes of input, got {got}")]
    #[diagnostic(code(espefuse::buffer_too_small))]
    BufferTooSmall {
        field: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("Value has bits set beyond the {width} bits of field `{field}`")]
    #[diagnostic(code(espefuse::value_exceeds_field))]
    ValueExceedsField { field: &'static str, width: u32 },

    #[error("{len} bytes is not a valid payload length for the {scheme} coding scheme")]
    #[diagnostic(code(espefuse::coding::invalid_length))]
    InvalidLength { scheme: CodingScheme, len: usize },

    #[error("BLOCK{0} has no {1} bit")]
    #[diagnostic(code(espefuse::no_protection_bit))]
    NoProtectionBit(u8, &'static str),

    #[error("Unknown eFuse field: {0}")]
    #[diagnostic(
        code(espefuse::field_not_found),
        help("Use the `summary` subcommand to list the fields of the selected chip")
    )]
    FieldNotFound(String),

    #[error("BLOCK{0} is write-protected")]
    #[diagnostic(code(espefuse::write_protected))]
    WriteProtected(u8),

    #[error("BLOCK{0} is read-protected")]
    #[diagnostic(code(espefuse::read_protected))]
    ReadProtected(u8),

    #[error("BLOCK{block} uses the {scheme} coding scheme and already holds data in the targeted range")]
    #[diagnostic(
        code(espefuse::repeated_programming),
        help("Coded eFuse blocks can only be programmed once per coding unit")
    )]
    RepeatedProgramming { block: u8, scheme: CodingScheme },

    #[error("The coding scheme of BLOCK{0} is changed in the same batch that writes to it")]
    #[diagnostic(
        code(espefuse::coding_scheme_change_pending),
        help("Commit the coding scheme change first, then write the block in a separate batch")
    )]
    CodingSchemeChangePending(u8),

    #[error("Nothing was staged for burning")]
    #[diagnostic(code(espefuse::nothing_staged))]
    NothingStaged,

    #[error("BLOCK{0} is in the failed state after a previous burn")]
    #[diagnostic(
        code(espefuse::block_failed),
        help("Inspect the block and acknowledge the failure before burning it again")
    )]
    BlockFailed(u8),

    #[error("The eFuse controller lock was poisoned by a panicking thread")]
    #[diagnostic(code(espefuse::poisoned))]
    Poisoned,

    #[error("Programming of BLOCK{0} did not report completion")]
    #[diagnostic(code(espefuse::program_timeout))]
    ProgramTimeout(u8),

    #[error("Verification of BLOCK{0} failed after burning")]
    #[diagnostic(
        code(espefuse::verify_failed),
        help("Some bits did not burn, the block is left as read back from the device")
    )]
    VerifyFailed(u8),

    #[error("eFuse interface error: {0}")]
    #[diagnostic(code(espefuse::interface))]
    Interface(String),

    #[error("Failed to load eFuse image: {0}")]
    #[diagnostic(code(espefuse::image_format))]
    ImageFormat(String),

    #[error(transparent)]
    #[diagnostic(code(espefuse::io))]
    Io(#[from] io::Error),

    #[error("BLOCK{block} contains {failed} uncorrectable coding error(s)")]
    #[diagnostic(
        code(espefuse::coding_error),
        help("The stored value cannot be trusted, the block may suffer from bit decay")
    )]
    Coding { block: u8, failed: u32 },

    #[error("BLOCK{block} selects unknown coding scheme {value}")]
    #[diagnostic(code(espefuse::unknown_coding_scheme))]
    UnknownCodingScheme { block: u8, value: u32 },

    #[error("Operation was canceled by the user")]
    #[diagnostic(code(espefuse::canceled))]
    Canceled,

    #[cfg(feature = "cli")]
    #[error("No target device was selected")]
    #[diagnostic(
        code(espefuse::chip_not_selected),
        help("Pass `--chip` or set `chip` in espefuse.toml")
    )]
    ChipNotSelected,

    #[cfg(feature = "cli")]
    #[error(transparent)]
    #[diagnostic(code(espefuse::dialoguer_error))]
    DialoguerError(#[from] dialoguer::Error),
}

impl Error {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidBlock(_)
            | Error::FieldWidthMismatch { .. }
            | Error::ExtentOutOfRange { .. }
            | Error::InvalidBitCount { .. }
            | Error::NotABit { .. }
            | Error::BufferTooSmall { .. }
            | Error::ValueExceedsField { .. }
            | Error::InvalidLength { .. }
            | Error::NoProtectionBit(..)
            | Error::FieldNotFound(_) => ErrorKind::InvalidArgument,

            Error::WriteProtected(_)
            | Error::ReadProtected(_)
            | Error::RepeatedProgramming { .. }
            | Error::CodingSchemeChangePending(_)
            | Error::NothingStaged
            | Error::BlockFailed(_)
            | Error::Poisoned
            | Error::Canceled => ErrorKind::InvalidState,

            Error::ProgramTimeout(_)
            | Error::VerifyFailed(_)
            | Error::Interface(_)
            | Error::ImageFormat(_)
            | Error::Io(_) => ErrorKind::HardwareFailure,

            #[cfg(feature = "cli")]
            Error::ChipNotSelected => ErrorKind::InvalidArgument,
            #[cfg(feature = "cli")]
            Error::DialoguerError(_) => ErrorKind::HardwareFailure,

            Error::Coding { .. } | Error::UnknownCodingScheme { .. } => ErrorKind::CodingError,
        }
    }
}

/// Coarse classification of [Error]s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// The request itself is malformed
    InvalidArgument,
    /// The request is not allowed by protection bits or controller state
    InvalidState,
    /// Burning or verifying did not complete as expected
    HardwareFailure,
    /// A decode found an uncorrectable discrepancy
    CodingError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Error::NothingStaged.kind(), ErrorKind::InvalidState);
        assert_eq!(Error::VerifyFailed(2).kind(), ErrorKind::HardwareFailure);
        assert_eq!(
            Error::Coding {
                block: 3,
                failed: 1
            }
            .kind(),
            ErrorKind::CodingError
        );
        assert_eq!(
            Error::InvalidLength {
                scheme: CodingScheme::ThreeFour,
                len: 5
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
    }
}
