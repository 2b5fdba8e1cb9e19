//! openswebcad - generate OpenSCAD models from named parameters.
//!
//! ```text
//! openswebcad <out-dir> [--format openscad] [--model NAME] key=value ...
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use openswebcad_cli::{parse_cmdline_params, write_artifacts, OutputFormat, WriteOptions};
use param_engine::Session;
use param_types::{Number, Parameter};
use scad_models::DEFAULT_MODEL;

#[derive(Parser, Debug)]
#[command(name = "openswebcad")]
#[command(about = "Generate parametric CAD models as OpenSCAD files", long_about = None)]
struct Cli {
    /// Directory to write the generated files to
    #[arg(required_unless_present = "list_parameters")]
    out: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Openscad)]
    format: OutputFormat,

    /// Model to generate
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Print the model's parameters and exit
    #[arg(long)]
    list_parameters: bool,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Parameters in 'key=value' format
    parameters: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let generator = scad_models::find(&cli.model).with_context(|| {
        format!(
            "unknown model '{}' (available: {})",
            cli.model,
            scad_models::names().join(", ")
        )
    })?;
    let session = Session::from_shared(generator)
        .with_context(|| format!("model '{}' declares invalid parameters", cli.model))?;

    if cli.list_parameters {
        for parameter in session.parameters() {
            println!("{}", describe(parameter));
        }
        return Ok(());
    }

    let mut raw = session.defaults();
    raw.merge(parse_cmdline_params(&cli.parameters)?);
    let artifacts = session.generate(&raw)?;

    let options = WriteOptions {
        directory: cli.out.context("no output directory given")?,
        format: cli.format,
    };
    for path in write_artifacts(&options, &artifacts)? {
        info!(path = %path.display(), "wrote artifact");
    }
    Ok(())
}

/// One line per parameter: name, type, default, description.
fn describe(parameter: &Parameter) -> String {
    let (kind, default) = match parameter {
        Parameter::Numeric(p) => (
            p.kind.to_string(),
            p.default.as_ref().map(Number::to_string),
        ),
        Parameter::Choice(p) => (
            format!("one of {}", p.choices.join("|")),
            p.default.clone(),
        ),
    };
    format!(
        "{}\t{}\t{}\t{}",
        parameter.name(),
        kind,
        default.unwrap_or_else(|| "required".to_string()),
        parameter.description()
    )
}
