extern crate pretty_env_logger;

use anyhow::{Context, Result as AnyResult};
use beacon_genesis::{
    genesis_builder, tee::TEE_VENDOR_FROM_MNEMONICS, Config, ContentType, ExecutionBlock,
    GenesisValidator,
};
use clap::{Args, Parser, Subcommand};
use ethereum_common::beacon::{BeaconBlockHeader, BlockHeader, TeeBlockHeader};
use pretty_env_logger::env_logger::fmt::TimestampPrecision;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: CliCommands,
}

#[derive(Subcommand)]
enum CliCommands {
    /// Build the genesis state and write it out
    #[clap(visible_alias("b"))]
    Build(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Consensus layer config.yaml
    #[arg(long = "config")]
    config: PathBuf,

    /// Execution layer genesis block in the JSON-RPC format
    #[arg(long = "eth1-block")]
    eth1_block: PathBuf,

    /// Execution block to anchor the state to instead of the genesis block
    #[arg(long = "shadow-fork-block")]
    shadow_fork_block: Option<PathBuf>,

    /// YAML file with the genesis validators and an optional TEE vendor name
    #[arg(long = "validators")]
    validators: Option<PathBuf>,

    /// Path to write the SSZ encoded state to
    #[arg(long = "ssz-output")]
    ssz_output: Option<PathBuf>,

    /// Path to write the JSON encoded state to
    #[arg(long = "json-output")]
    json_output: Option<PathBuf>,

    /// Use the block header without the proposer TEE fields
    #[arg(long = "standard-header", default_value_t = false)]
    standard_header: bool,
}

#[derive(Deserialize, Default)]
struct ValidatorsFile {
    #[serde(default)]
    tee_vendor: Option<String>,
    #[serde(default)]
    validators: Vec<GenesisValidator>,
}

fn read_block(path: &PathBuf) -> AnyResult<ExecutionBlock> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read execution block {}", path.display()))?;

    ExecutionBlock::from_json(&source)
        .with_context(|| format!("Failed to decode execution block {}", path.display()))
}

fn read_validators(path: &Option<PathBuf>) -> AnyResult<ValidatorsFile> {
    let Some(path) = path else {
        return Ok(Default::default());
    };

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read validators {}", path.display()))?;

    serde_yaml::from_str(&source)
        .with_context(|| format!("Failed to decode validators {}", path.display()))
}

fn build<H: BeaconBlockHeader + 'static>(
    args: &BuildArgs,
    config: Config,
    el_block: ExecutionBlock,
    validators: Vec<GenesisValidator>,
) -> AnyResult<()> {
    let mut builder = genesis_builder::<H>(config, el_block)?;

    if let Some(path) = &args.shadow_fork_block {
        builder.set_shadow_fork_block(read_block(path)?);
    }

    log::info!("Adding {} genesis validators", validators.len());
    builder.add_validators(validators);

    let state = builder.build_state().context("Failed to build genesis state")?;

    for (path, content_type) in [
        (&args.ssz_output, ContentType::Ssz),
        (&args.json_output, ContentType::Json),
    ] {
        let Some(path) = path else {
            continue;
        };

        let encoded = builder.serialize(&state, content_type)?;
        fs::write(path, &encoded)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        log::info!("Wrote {} bytes of {content_type} to {}", encoded.len(), path.display());
    }

    Ok(())
}

fn main() -> AnyResult<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(Some(TimestampPrecision::Seconds))
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let CliCommands::Build(args) = cli.command;

    let mut config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    let el_block = read_block(&args.eth1_block)?;
    let validators = read_validators(&args.validators)?;

    if let Some(vendor) = validators.tee_vendor {
        config = config.with_value(TEE_VENDOR_FROM_MNEMONICS, vendor);
    }

    if args.ssz_output.is_none() && args.json_output.is_none() {
        log::warn!("No output path given, the state is built but not written");
    }

    match args.standard_header {
        true => build::<BlockHeader>(&args, config, el_block, validators.validators),
        false => build::<TeeBlockHeader>(&args, config, el_block, validators.validators),
    }
}
