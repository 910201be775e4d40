use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::io;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a directory of Markdown files")]
struct Cli {
    /// Site config file
    #[arg(short, long, global = true, default_value = Config::DEFAULT_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and generate every page
    Build {
        /// Prefix for root-relative links (overrides `base_path` in the config)
        base_path: Option<String>,
    },
    /// Write a config file with default settings
    Init,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Build { base_path } => build(&cli.config, base_path),
        Command::Init => init(&cli.config),
    };

    if let Err(e) = result {
        log::error!("{e:#}");
        process::exit(1);
    }
}

fn load_config(config_path: &Path) -> Result<Config> {
    let config = Config::load_from_path(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    Ok(config.unwrap_or_else(|| {
        log::info!(
            "No config file at {}, using defaults",
            config_path.display()
        );
        Config::default()
    }))
}

fn build(config_path: &Path, base_path: Option<String>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(base_path) = base_path {
        config.base_path = base_path;
    }

    log::info!(
        "Building {} into {} (base path {})",
        config.content_dir.display(),
        config.output_dir.display(),
        config.base_path
    );

    io::copy_static(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "copying static files from {}",
            config.static_dir.display()
        )
    })?;

    let pages = io::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.base_path,
    )
    .context("generating pages")?;

    log::info!("Generated {pages} pages");
    Ok(())
}

fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }
    Config::default().save_to_path(config_path)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}
