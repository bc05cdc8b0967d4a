use clap::{Parser, ValueEnum};
use docweave_config::{Config, OutputFormat};
use docweave_engine::ParseOptions;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docweave")]
#[command(author, version)]
#[command(about = "Convert lightweight markup into HTML, JSON ops or an outline")]
#[command(after_help = "\
EXAMPLES:

    # Convert a file to HTML on stdout
    docweave notes.md

    # Read stdin, write the parsed ops as JSON
    cat notes.md | docweave -f json

    # Check local images against a directory
    docweave notes.md --image-root ./assets -o notes.html

    # Save the current flags as defaults
    docweave --init-config -f outline --nested-link-emphasis

CONFIGURATION:

Defaults are read from ~/.config/docweave/config.toml unless --config is given.
Flags override the file.

    format = \"html\"
    image_root = \"~/notes/assets\"

    [parser]
    nested_link_emphasis = false
    harvest_definitions_in_code = false")]
pub struct Cli {
    /// Input file, or `-` for stdin
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory local image paths are resolved against
    #[arg(long)]
    pub image_root: Option<PathBuf>,

    /// Parse emphasis inside link text
    #[arg(long)]
    pub nested_link_emphasis: bool,

    /// Collect footnote and link definitions inside fenced code too
    #[arg(long)]
    pub harvest_code_definitions: bool,

    /// Write the config file with these flags applied, then exit
    #[arg(long)]
    pub init_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Html,
    Json,
    Outline,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Outline => OutputFormat::Outline,
        }
    }
}

/// Effective settings once flags are laid over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub image_root: Option<PathBuf>,
    pub parse: ParseOptions,
}

impl Cli {
    /// Input path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }

    /// `config` with the flags given on this command line laid over it.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if let Some(root) = &self.image_root {
            config.image_root = Some(root.clone());
        }
        config.parser.nested_link_emphasis |= self.nested_link_emphasis;
        config.parser.harvest_definitions_in_code |= self.harvest_code_definitions;
        config
    }

    pub fn settings(&self, config: Config) -> Settings {
        let config = self.apply_to(config);
        // Local images default to paths relative to the input document.
        let image_root = config.image_root.or_else(|| {
            self.input_path()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
        });

        Settings {
            format: config.format,
            image_root,
            parse: ParseOptions {
                harvest_definitions_in_code: config.parser.harvest_definitions_in_code,
                nested_link_emphasis: config.parser.nested_link_emphasis,
            },
        }
    }
}
