use clap::{Parser, Subcommand};
use espefuse::cli::{
    burn_bit, burn_block, burn_cnt, burn_field, check_errors, config::Config, dump,
    read_field, read_protect, summary, write_protect, BurnBitArgs, BurnBlockArgs, BurnCntArgs,
    BurnFieldArgs, DeviceArgs, ProtectArgs, ReadFieldArgs,
};
use log::{debug, LevelFilter};
use miette::Result;

#[derive(Debug, Parser)]
#[command(about, max_term_width = 100, propagate_version = true, version)]
struct Cli {
    #[command(subcommand)]
    subcommand: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every eFuse field of the device with its current value
    Summary(DeviceArgs),
    /// Print the raw contents of every eFuse block
    Dump(DeviceArgs),
    /// Print the value of a single field
    ReadField(ReadFieldArgs),
    /// Burn a value into a field
    BurnField(BurnFieldArgs),
    /// Burn a single-bit field
    BurnBit(BurnBitArgs),
    /// Burn bits of a counter field, starting from its lowest bit
    BurnCnt(BurnCntArgs),
    /// Burn the contents of a file into a whole block, e.g. a key
    BurnBlock(BurnBlockArgs),
    /// Disable further writes to a block
    WriteProtect(ProtectArgs),
    /// Disable software reads of a block
    ReadProtect(ProtectArgs),
    /// Check every block for uncorrectable coding errors
    CheckErrors(DeviceArgs),
}

fn main() -> Result<()> {
    miette::set_panic_hook();
    env_logger::Builder::new()
        .filter_module("espefuse", LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .init();

    // Attempt to parse any provided command-line arguments, or print the help
    // message and terminate if the invocation is not correct.
    let args = Cli::parse().subcommand;
    debug!("{:#?}", args);

    let config = Config::load()?;

    match args {
        Commands::Summary(args) => summary(args, &config),
        Commands::Dump(args) => dump(args, &config),
        Commands::ReadField(args) => read_field(args, &config),
        Commands::BurnField(args) => burn_field(args, &config),
        Commands::BurnBit(args) => burn_bit(args, &config),
        Commands::BurnCnt(args) => burn_cnt(args, &config),
        Commands::BurnBlock(args) => burn_block(args, &config),
        Commands::WriteProtect(args) => write_protect(args, &config),
        Commands::ReadProtect(args) => read_protect(args, &config),
        Commands::CheckErrors(args) => check_errors(args, &config),
    }
}
