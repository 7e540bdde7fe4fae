//! # Bindings Generator
//!
//! Command-line driver that regenerates the six registry-derived source
//! artifacts (token, network, price-feed, contract and adapter bindings)
//! from the JSON registries, and optionally compiles pool definitions into
//! their deployment-parameter blocks.
//!
//! ## Overview
//!
//! The generator:
//! - Loads `Config.toml` (registry paths, template directory, network set)
//! - Renders every bindings target for every requested network, in memory
//! - Splices each render into its template at the `// $GENERATE_HERE$`
//!   marker and commits the file atomically
//!
//! A failure on any target aborts the run before the first file is touched.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin bindings_generator
//! cargo run --bin bindings_generator -- --network mainnet --network base
//! cargo run --bin bindings_generator -- --pool pools/mainnet-usdc.json
//! cargo run --bin bindings_generator -- --dry-run
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use lendgen_sdk::pool_definition::PoolDefinition;
use lendgen_sdk::{BindingsGenerator, Network, PoolCore, RegistrySet, Settings};
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "bindings_generator", about = "Regenerate registry bindings artifacts")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "Config.toml")]
    config: String,

    /// Restrict emission to these networks (repeatable); overrides the
    /// configured set
    #[arg(short, long)]
    network: Vec<String>,

    /// Also compile these pool definition files (repeatable); the compiled
    /// block is printed for the caller to splice
    #[arg(short, long)]
    pool: Vec<String>,

    /// Render everything but write nothing
    #[arg(long)]
    dry_run: bool,
}

fn parse_networks(names: &[String]) -> Result<Vec<Network>> {
    names
        .iter()
        .map(|n| Network::from_str(n).map_err(anyhow::Error::msg))
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("{}", "Bindings Generator".bold());
    println!("═══════════════════════════════════════\n");

    // 1. Load settings; RUST_LOG still overrides the configured level
    let settings = Settings::from_file(&args.config)
        .with_context(|| format!("loading settings from {}", args.config))?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&settings.log.level),
    )
    .init();
    println!("{} Settings loaded from {}", "✅".green(), args.config);

    // 2. Load registries
    let regs = RegistrySet::load(
        &settings.registries.tokens,
        &settings.registries.contracts,
        &settings.registries.price_feeds,
    )?;
    println!("{} Registries loaded", "✅".green());

    // 3. Resolve the requested network set (CLI > Config.toml > all)
    let requested = if !args.network.is_empty() {
        parse_networks(&args.network)?
    } else {
        parse_networks(&settings.networks)?
    };
    let generator = if requested.is_empty() {
        BindingsGenerator::new(&regs)
    } else {
        BindingsGenerator::with_networks(&regs, &requested)
    };

    // 4. Compile any requested pool definitions; findings are fatal only
    //    when they are errors
    for path in &args.pool {
        compile_pool(path, &regs)?;
    }

    // 5. Render all targets; nothing is written until every render succeeds
    let artifacts = generator.render_all().context("rendering bindings")?;
    println!("{} Rendered {} artifacts", "✅".green(), artifacts.len());

    if args.dry_run {
        println!("\n{}", "Dry run, no files written:".yellow());
        for artifact in &artifacts {
            println!(
                "   {} ({} lines)",
                artifact.name,
                artifact.contents.lines().count()
            );
        }
        return Ok(());
    }

    // 6. Splice each artifact into its template and commit
    let templates_dir = Path::new(&settings.output.templates_dir);
    for artifact in &artifacts {
        let path = templates_dir.join(&artifact.name);
        lendgen_sdk::artifact::write_spliced(&path, &artifact.contents)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("   {} {}", "✍️".green(), path.display());
    }

    println!("\n{} All bindings regenerated", "✅".green().bold());
    Ok(())
}

/// Compiles one pool definition file and prints the block to splice. The
/// per-pool artifact has no fixed template name, so writing is left to the
/// caller.
fn compile_pool(path: &str, regs: &RegistrySet) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let def: PoolDefinition =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))?;
    println!("\n{} {} ({})", "Pool".bold(), def.id, path);

    let core = PoolCore::compose(&def);
    let report = core.validate();
    for warning in &report.warnings {
        println!("   {} {}", "⚠️".yellow(), warning);
    }
    for error in &report.errors {
        println!("   {} {}", "❌".red(), error);
    }
    if !report.errors.is_empty() {
        bail!("pool '{}' has {} validation errors", def.id, report.errors.len());
    }

    let block = core
        .compile(regs)
        .with_context(|| format!("compiling pool '{}'", def.id))?;
    println!("{}", block);
    Ok(())
}
