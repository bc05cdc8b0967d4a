mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use docweave_config::{Config, OutputFormat};
use docweave_engine::{
    HtmlWriter, LocalImageResolver, ParsedDoc, apply, parse_document_with, parsing::snapshot,
};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use cli::{Cli, Settings};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if cli.init_config {
        return init_config(&cli);
    }
    let config = load_config(cli.config.as_deref())?;
    let settings = cli.settings(config);

    let input = read_input(cli.input_path())?;
    let doc = parse_document_with(&input, &settings.parse);
    let rendered = render(&doc, &settings)?;

    write_output(cli.output.as_deref(), &rendered)
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file '{}' does not exist", path.display()),
        },
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

/// Saves the loaded config (or defaults) with the command-line flags applied.
fn init_config(cli: &Cli) -> Result<()> {
    let existing = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let config = cli.apply_to(existing.unwrap_or_default());

    match cli.config.as_deref() {
        Some(path) => {
            config
                .save_to_path(path)
                .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            config.save().context("Failed to write config file")?;
            log::info!("Wrote {}", Config::config_path().display());
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn render(doc: &ParsedDoc, settings: &Settings) -> Result<String> {
    match settings.format {
        OutputFormat::Html => {
            let resolver = LocalImageResolver::new(settings.image_root.clone());
            let mut writer = HtmlWriter::with_resolver(resolver);
            let report = apply(doc, &mut writer).context("Failed to write HTML")?;
            if !report.skipped_images.is_empty() {
                log::warn!("{} image(s) left out", report.skipped_images.len());
            }
            Ok(writer.into_html())
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(doc)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Outline => {
            let mut outline = snapshot::outline(doc);
            if !outline.is_empty() {
                outline.push('\n');
            }
            Ok(outline)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write stdout")?,
    }
    Ok(())
}
