use std::{env, path::PathBuf};

use clap::Parser;

// Import modules
mod efuse_generator;

// Type definition for results
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// ----------------------------------------------------------------------------
// Command-line Interface

#[derive(Debug, Parser)]
enum Cli {
    /// Generate eFuse field tables from an ESP-IDF checkout
    GenerateEfuseTables(efuse_generator::GenerateEfuseTablesArgs),
}

// ----------------------------------------------------------------------------
// Application

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_module("xtask", log::LevelFilter::Info)
        .init();

    // The compile-time location of the workspace may not exist when the binary
    // runs on another machine, fall back to the current directory then.
    let workspace_from_build = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(|path| path.to_path_buf());

    let workspace = match workspace_from_build {
        Some(path) if path.exists() => path.canonicalize()?,
        _ => env::current_dir()?.canonicalize()?,
    };

    match Cli::parse() {
        Cli::GenerateEfuseTables(args) => efuse_generator::generate_efuse_tables(&workspace, args),
    }
}
