use std::{
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process::Command,
};

use clap::Args;
use log::info;
use regex::Regex;

use crate::Result;

// ----------------------------------------------------------------------------
// Command-line Interface

#[derive(Debug, Args)]
pub(crate) struct GenerateEfuseTablesArgs {
    /// Local path to the `esp-idf` repository
    idf_path: PathBuf,
}

const HEADER: &str = r#"
//! eFuse field definitions for the $CHIP
//!
//! This file was automatically generated, please do not edit it manually!
//!
//! Generated: $DATE
//! Version:   $VERSION

#![allow(unused)]

use crate::field::{EfuseField, Extent};

"#;

/// Devices whose tables are generated, the ESP32 table is maintained by hand.
const CHIPS: &[&str] = &["esp32s2", "esp32s3"];

/// Longest line emitted before a definition is wrapped.
const MAX_WIDTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Extent {
    block: u8,
    start: u16,
    len: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldDef {
    name: String,
    description: String,
    extents: Vec<Extent>,
}

impl FieldDef {
    fn width(&self) -> u32 {
        self.extents.iter().map(|e| e.len as u32).sum()
    }
}

#[derive(Debug)]
struct Table {
    version: String,
    fields: Vec<FieldDef>,
}

pub(crate) fn generate_efuse_tables(workspace: &Path, args: GenerateEfuseTablesArgs) -> Result<()> {
    let components = args.idf_path.join("components").join("efuse").canonicalize()?;
    let out_dir = workspace
        .join("espefuse")
        .join("src")
        .join("targets")
        .join("efuse")
        .canonicalize()?;

    for chip in CHIPS {
        let source = fs::read_to_string(components.join(chip).join("esp_efuse_table.c"))?;
        let table = parse_efuse_table(&source)?;

        info!("Processing {chip}: {} fields", table.fields.len());
        write_efuse_table(&out_dir.join(format!("{chip}.rs")), chip, &table)?;
    }

    Command::new("cargo")
        .args(["fmt", "--package", "espefuse"])
        .current_dir(workspace)
        .output()?;

    Ok(())
}

fn parse_efuse_table(source: &str) -> Result<Table> {
    let version = Regex::new(r"md5_digest_table\s+(\w+)")?
        .captures(source)
        .map(|caps| caps[1].to_string())
        .ok_or("missing md5_digest_table")?;

    let descriptor = Regex::new(r"(?s)static const esp_efuse_desc_t (\w+)\[\] = \{(.*?)\n\};")?;
    let extent_row = Regex::new(r"\{EFUSE_BLK(\d+),\s*(\d+),\s*(\d+)\},[ \t]*(?://\s*(.*))?")?;
    let tag = Regex::new(r"^\[[^\]]*\]\s*")?;

    let mut fields = Vec::new();
    for caps in descriptor.captures_iter(source) {
        let name = caps[1].to_string();

        let mut description = None;
        let mut extents = Vec::new();
        for row in extent_row.captures_iter(&caps[2]) {
            extents.push(Extent {
                block: row[1].parse()?,
                start: row[2].parse()?,
                len: row[3].parse()?,
            });

            // Only the first row of a multi-row field is described
            if description.is_none() {
                let text = row.get(4).map_or("", |m| m.as_str());
                description = Some(tag.replace(text, "").trim_end_matches(',').trim().to_string());
            }
        }

        if extents.is_empty() {
            return Err(format!("field `{name}` has no extents").into());
        }

        fields.push(FieldDef {
            name,
            description: description.unwrap_or_default(),
            extents,
        });
    }

    Ok(Table { version, fields })
}

fn write_efuse_table(path: &Path, chip: &str, table: &Table) -> Result<()> {
    let f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(f);

    write!(
        writer,
        "{}",
        HEADER
            .replace("$CHIP", &chip_name(chip))
            .replace(
                "$DATE",
                &chrono::Utc::now().format("%Y-%m-%d %H:%M").to_string()
            )
            .replace("$VERSION", &table.version)
            .trim_start()
    )?;

    for field in &table.fields {
        write_field(&mut writer, field)?;
    }

    writeln!(writer)?;
    writeln!(writer, "/// Every field defined for this device, in table order")?;
    writeln!(writer, "pub const FIELDS: &[EfuseField] = &[")?;
    for field in &table.fields {
        writeln!(writer, "    {},", field.name)?;
    }
    writeln!(writer, "];")?;

    Ok(())
}

fn write_field(writer: &mut dyn Write, field: &FieldDef) -> Result<()> {
    let description = field.description.replace('[', "\\[").replace(']', "\\]");
    if description.is_empty() {
        writeln!(writer, "///")?;
    }
    for line in wrap(&description, 76) {
        writeln!(writer, "/// {line}")?;
    }

    let FieldDef { name, extents, .. } = field;
    let width = field.width();

    if let [Extent { block, start, len }] = extents.as_slice() {
        let definition =
            format!(r#"EfuseField::new("{name}", {width}, &[Extent::new({block}, {start}, {len})]);"#);
        let line = format!("pub const {name}: EfuseField = {definition}");

        if line.len() <= MAX_WIDTH {
            writeln!(writer, "{line}")?;
        } else {
            writeln!(writer, "pub const {name}: EfuseField =\n    {definition}")?;
        }
    } else {
        writeln!(
            writer,
            "pub const {name}: EfuseField = EfuseField::new(\n    \"{name}\",\n    {width},\n    &["
        )?;
        for Extent { block, start, len } in extents {
            writeln!(writer, "        Extent::new({block}, {start}, {len}),")?;
        }
        writeln!(writer, "    ],\n);")?;
    }

    Ok(())
}

fn chip_name(chip: &str) -> String {
    match chip.strip_prefix("esp32") {
        Some(variant) if !variant.is_empty() => format!("ESP32-{}", variant.to_uppercase()),
        _ => chip.to_uppercase(),
    }
}

/// Greedy word wrap, words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"
// md5_digest_table 0123456789abcdef0123456789abcdef

static const esp_efuse_desc_t WR_DIS[] = {
    {EFUSE_BLK0, 0, 32}, 	 // [] Disable programming of individual eFuses,
};

static const esp_efuse_desc_t MAC[] = {
    {EFUSE_BLK1, 40, 8}, 	 // [MAC_FACTORY] MAC address,
    {EFUSE_BLK1, 32, 8}, 	 // [MAC_FACTORY] MAC address,
};
"#;

    #[test]
    fn parse_table() {
        let table = parse_efuse_table(SOURCE).unwrap();

        assert_eq!(table.version, "0123456789abcdef0123456789abcdef");
        assert_eq!(table.fields.len(), 2);
        assert_eq!(
            table.fields[0].description,
            "Disable programming of individual eFuses"
        );
        assert_eq!(table.fields[1].width(), 16);
        assert_eq!(
            table.fields[1].extents[1],
            Extent {
                block: 1,
                start: 32,
                len: 8
            }
        );
    }

    #[test]
    fn names_and_wrapping() {
        assert_eq!(chip_name("esp32s3"), "ESP32-S3");
        assert_eq!(chip_name("esp32"), "ESP32");
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert!(wrap("", 10).is_empty());
    }
}
