//! Types and functions for the command-line interface
//!
//! The contents of this module are intended for use with the [espefuse]
//! command-line application, and are likely not of much use otherwise.
//!
//! No stability guarantees apply
//!
//! [espefuse]: https://crates.io/crates/espefuse

use std::{fs, path::PathBuf};

use clap::Args;
use comfy_table::{modifiers, presets::UTF8_FULL, Attribute, Cell, Color, Table};
use dialoguer::{theme::ColorfulTheme, Confirm};
use log::{info, warn};
use miette::{IntoDiagnostic, Result, WrapErr};

use self::config::Config;
use crate::{block::BlockState, Batch, Chip, Efuse, EfuseField, Error, VirtualEfuse};

pub mod config;

/// Select the device to operate on
#[derive(Debug, Args)]
#[non_exhaustive]
pub struct DeviceArgs {
    /// Target device
    #[arg(short = 'c', long, value_enum, env = "ESPEFUSE_CHIP")]
    pub chip: Option<Chip>,
    /// Image file backing the virtual device
    #[arg(short = 'i', long, env = "ESPEFUSE_IMAGE")]
    pub image: Option<PathBuf>,
}

/// Arguments shared by every command which burns eFuses
#[derive(Debug, Args)]
#[non_exhaustive]
pub struct BurnArgs {
    /// Burn without asking for confirmation
    #[arg(long)]
    pub do_not_confirm: bool,
}

#[derive(Debug, Args)]
#[non_exhaustive]
pub struct ReadFieldArgs {
    #[clap(flatten)]
    pub device_args: DeviceArgs,
    /// Name of the field
    pub name: String,
    /// Print the number of bits set instead of the value
    #[arg(long)]
    pub count: bool,
}

#[derive(Debug, Args)]
#[non_exhaustive]
pub struct BurnFieldArgs {
    #[clap(flatten)]
    pub device_args: DeviceArgs,
    /// Name of the field
    pub name: String,
    /// New value, decimal or hexadecimal with a `0x` prefix
    pub value: String,
    #[clap(flatten)]
    pub burn_args: BurnArgs,
}

#[derive(Debug, Args)]
#[non_exhaustive]
pub struct BurnBitArgs {
    #[clap(flatten)]
    pub device_args: DeviceArgs,
    /// Name of the single-bit field
    pub name: String,
    #[clap(flatten)]
    pub burn_args: BurnArgs,
}

#[derive(Debug, Args)]
#[non_exhaustive]
pub struct BurnCntArgs {
    #[clap(flatten)]
    pub device_args: DeviceArgs,
    /// Name of the counter field
    pub name: String,
    /// Number of bits which should be set
    pub count: u32,
    #[clap(flatten)]
    pub burn_args: BurnArgs,
}

#[derive(Debug, Args)]
#[non_exhaustive]
pub struct BurnBlockArgs {
    #[clap(flatten)]
    pub device_args: DeviceArgs,
    /// Index of the block
    pub block: u8,
    /// File containing the logical contents of the block
    pub file: PathBuf,
    #[clap(flatten)]
    pub burn_args: BurnArgs,
}

#[derive(Debug, Args)]
#[non_exhaustive]
pub struct ProtectArgs {
    #[clap(flatten)]
    pub device_args: DeviceArgs,
    /// Index of the block
    pub block: u8,
    #[clap(flatten)]
    pub burn_args: BurnArgs,
}

/// A virtual device opened from its image file
pub struct Device {
    pub chip: Chip,
    pub image: PathBuf,
    pub efuse: Efuse<VirtualEfuse>,
}

impl Device {
    /// Open the device selected by `args` and `config`.
    pub fn open(args: &DeviceArgs, config: &Config) -> Result<Self> {
        let chip = config.chip(args.chip)?;
        let image = config.image(args.image.clone(), chip);
        let layout = chip.layout();

        info!("Using {} image {}", layout.name, image.display());
        let interface = VirtualEfuse::load(layout, &image)
            .wrap_err_with(|| format!("Failed to open {}", image.display()))?;
        let efuse = Efuse::new(interface, layout)?;

        Ok(Self { chip, image, efuse })
    }

    fn field(&self, name: &str) -> Result<&'static EfuseField, Error> {
        self.chip.field(name)
    }

    /// Stage writes with `stage`, confirm and burn them, then store the image.
    ///
    /// The image is stored even if burning failed, as some bits may have
    /// been burned regardless.
    fn burn<F>(self, what: &str, burn_args: &BurnArgs, stage: F) -> Result<()>
    where
        F: FnOnce(&mut Batch<'_, VirtualEfuse>) -> Result<(), Error>,
    {
        let committed = {
            let mut batch = self.efuse.batch()?;
            stage(&mut batch)?;
            confirm_burn(what, burn_args)?;
            batch.commit()
        };

        let interface = self.efuse.into_interface()?;
        interface
            .save(&self.image)
            .wrap_err_with(|| format!("Failed to store {}", self.image.display()))?;

        committed?;
        info!("{what}: done");
        Ok(())
    }
}

fn confirm_burn(what: &str, burn_args: &BurnArgs) -> Result<(), Error> {
    if burn_args.do_not_confirm {
        return Ok(());
    }

    warn!("Burning eFuses can not be undone");
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{what}. Continue?"))
        .default(false)
        .interact_opt()?
        .ok_or(Error::Canceled)?;

    if confirmed {
        Ok(())
    } else {
        Err(Error::Canceled)
    }
}

/// Parse a value given on the command line into little-endian bytes.
///
/// Hexadecimal values are written most significant digit first, like any
/// other number.
fn parse_value(value: &str, byte_len: usize) -> Result<Vec<u8>> {
    let mut bytes = if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        let hex = hex.replace('_', "");
        if hex.is_empty() || !hex.is_ascii() {
            return Err(miette::miette!("Invalid hexadecimal value: {value}"));
        }
        let padded = if hex.len() % 2 == 1 {
            format!("0{hex}")
        } else {
            hex
        };

        let mut bytes = (0..padded.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&padded[i..i + 2], 16))
            .collect::<Result<Vec<u8>, _>>()
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid hexadecimal value: {value}"))?;
        bytes.reverse();
        bytes
    } else {
        value
            .replace('_', "")
            .parse::<u128>()
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid value: {value}"))?
            .to_le_bytes()
            .to_vec()
    };

    if bytes.len() < byte_len {
        bytes.resize(byte_len, 0);
    }
    // Drop leading zeroes which do not fit the field
    while bytes.len() > byte_len && bytes.last() == Some(&0) {
        bytes.pop();
    }

    Ok(bytes)
}

/// Format little-endian bytes as a hexadecimal number.
fn format_value(bytes: &[u8]) -> String {
    let digits: String = bytes.iter().rev().map(|b| format!("{b:02x}")).collect();
    format!("0x{digits}")
}

fn header(name: &str, color: Color) -> Cell {
    Cell::new(name).fg(color).add_attribute(Attribute::Bold)
}

/// Print every field of the device along with its current value.
pub fn summary(args: DeviceArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args, config)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_header(vec![
            header("Name", Color::Green),
            header("Block", Color::Cyan),
            header("Bits", Color::Magenta),
            header("Value", Color::Yellow),
        ]);

    for field in device.chip.fields() {
        let blocks = field
            .blocks()
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let value = match device.efuse.read_field_blob(field, field.bit_count) {
            Ok(bytes) if field.bit_count == 1 => (bytes[0] & 1 != 0).to_string(),
            Ok(bytes) => format_value(&bytes),
            Err(Error::ReadProtected(_)) => "read-protected".to_string(),
            Err(err) => format!("error: {err}"),
        };

        table.add_row(vec![
            Cell::new(field.name).fg(Color::Green),
            Cell::new(blocks).fg(Color::Cyan),
            Cell::new(field.bit_count).fg(Color::Magenta),
            Cell::new(value).fg(Color::Yellow),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Print the physical contents of every block.
pub fn dump(args: DeviceArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args, config)?;

    for block in device.efuse.layout().blocks {
        let index = block.index;
        let words = device.efuse.raw_block_words(index)?;
        let scheme = device.efuse.coding_scheme(index)?;

        let mut flags = Vec::new();
        if device.efuse.is_write_protected(index)? {
            flags.push("write-protected");
        }
        if device.efuse.is_read_protected(index)? {
            flags.push("read-protected");
        }
        if device.efuse.has_coding_error(index)? {
            flags.push("coding error");
        }
        if device.efuse.block_state(index)? == BlockState::Failed {
            flags.push("failed");
        }

        println!(
            "BLOCK{index:<2} {:<16} {:<12} {}",
            block.name,
            scheme.to_string(),
            flags.join(", ")
        );
        for chunk in words.chunks(8) {
            let line: Vec<String> = chunk.iter().map(|w| format!("{w:08x}")).collect();
            println!("    {}", line.join(" "));
        }
    }

    Ok(())
}

/// Print the value of a single field.
pub fn read_field(args: ReadFieldArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args.device_args, config)?;
    let field = device.field(&args.name)?;

    if args.count {
        println!("{} = {}", field.name, device.efuse.read_field_cnt(field)?);
    } else if field.bit_count == 1 {
        println!("{} = {}", field.name, device.efuse.read_field_bit(field)?);
    } else {
        let bytes = device.efuse.read_field_blob(field, field.bit_count)?;
        println!("{} = {}", field.name, format_value(&bytes));
    }

    Ok(())
}

pub fn burn_field(args: BurnFieldArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args.device_args, config)?;
    let field = device.field(&args.name)?;
    let bytes = parse_value(&args.value, field.byte_len())?;

    let what = format!("Burning {} = {}", field.name, args.value);
    device.burn(&what, &args.burn_args, |batch| {
        batch.write_field_blob(field, &bytes)
    })
}

pub fn burn_bit(args: BurnBitArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args.device_args, config)?;
    let field = device.field(&args.name)?;

    let what = format!("Burning {}", field.name);
    device.burn(&what, &args.burn_args, |batch| batch.write_field_bit(field))
}

pub fn burn_cnt(args: BurnCntArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args.device_args, config)?;
    let field = device.field(&args.name)?;

    let what = format!("Burning {} bit(s) of {}", args.count, field.name);
    device.burn(&what, &args.burn_args, |batch| {
        batch.write_field_cnt(field, args.count)
    })
}

pub fn burn_block(args: BurnBlockArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args.device_args, config)?;
    let data = fs::read(&args.file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", args.file.display()))?;

    let what = format!("Burning {} bytes into BLOCK{}", data.len(), args.block);
    device.burn(&what, &args.burn_args, |batch| {
        batch.write_block(args.block, &data)
    })
}

pub fn write_protect(args: ProtectArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args.device_args, config)?;

    let what = format!("Disabling writes to BLOCK{}", args.block);
    device.burn(&what, &args.burn_args, |batch| {
        batch.set_write_protect(args.block)
    })
}

pub fn read_protect(args: ProtectArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args.device_args, config)?;

    let what = format!("Disabling software reads of BLOCK{}", args.block);
    device.burn(&what, &args.burn_args, |batch| {
        batch.set_read_protect(args.block)
    })
}

/// Report blocks with coding errors.
pub fn check_errors(args: DeviceArgs, config: &Config) -> Result<()> {
    let device = Device::open(&args, config)?;
    device.efuse.check_errors()?;

    info!("No uncorrectable coding errors found");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_values() {
        assert_eq!(parse_value("0x1234", 2).unwrap(), vec![0x34, 0x12]);
        assert_eq!(parse_value("0xabc", 4).unwrap(), vec![0xbc, 0x0a, 0, 0]);
        assert_eq!(parse_value("0x00ff", 1).unwrap(), vec![0xff]);
        assert_eq!(parse_value("0x1ff", 1).unwrap(), vec![0xff, 0x01]);
        assert!(parse_value("0xzz", 1).is_err());
        assert!(parse_value("0x", 1).is_err());
        assert!(parse_value("0x__", 2).is_err());
    }

    #[test]
    fn parse_decimal_values() {
        assert_eq!(parse_value("7", 1).unwrap(), vec![7]);
        assert_eq!(parse_value("1_000", 2).unwrap(), vec![0xe8, 0x03]);
        assert_eq!(parse_value("0", 24).unwrap(), vec![0; 24]);
        assert!(parse_value("-1", 1).is_err());
    }

    #[test]
    fn format_values() {
        assert_eq!(format_value(&[0x34, 0x12]), "0x1234");
        assert_eq!(format_value(&[0x01]), "0x01");
    }
}
