//! Command-line front end: compile style tree files to CSS.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use stylesheet_loader::{build_with, CompileOptions, StyleTree};

#[derive(Parser)]
#[command(name = "stylesheet-loader", version, about = "Compile style trees to CSS")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON or YAML style tree and print the CSS
    Build {
        /// Style tree file
        file: PathBuf,

        /// Input format (defaults from the file extension)
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Unit appended to bare numbers
        #[arg(long, default_value = "px")]
        unit: String,

        /// Spaces before each declaration
        #[arg(long, default_value_t = 2)]
        indent: usize,

        /// Extra property to treat as unit-less (repeatable)
        #[arg(long = "unitless", value_name = "PROPERTY")]
        unitless: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => bail!(
                "cannot infer format of {}; pass --format json|yaml",
                path.display()
            ),
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Command::Build {
            file,
            format,
            unit,
            indent,
            unitless,
        } => {
            let format = match format {
                Some(format) => format,
                None => Format::from_path(&file)?,
            };
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let tree = match format {
                Format::Json => StyleTree::from_json(&source),
                Format::Yaml => StyleTree::from_yaml(&source),
            }
            .with_context(|| format!("failed to load {}", file.display()))?;

            let options = unitless
                .into_iter()
                .fold(CompileOptions::new().unit(unit).indent(indent), |opts, p| {
                    opts.unitless(p)
                });
            Ok(build_with(&tree, &options))
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(css) => {
            print!("{}", css);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
