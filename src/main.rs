use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::Parser as ClapParser;
use clon::{
    OutputFormat,
    cli::{self, CliError, GenerateOptions},
};
use tracing_subscriber::EnvFilter;

const BANNER: &str = r#"     _
 ___| |___ ___    commandline
|  _| | . |   | object notation
|___|_|___|_|_|    language"#;

const EXAMPLES: &str = r#"EXAMPLES:
  clon user = { name=foo age=:30 type=C }
  clon --yaml kind=Service metadata.name=bb-entrypoint metadata.namespace=default
  echo 'tags=[a b c] version=^APP_VERSION' | clon

SYNTAX:
  name=value          string field
  name=:42            typed literal (integer, float, true, false, null)
  name=^VAR           environment variable
  a.b.c=value         nested object path
  name={ ... }        object
  name=[ ... ]        array; [x=1] is an array holding {x: "1"}"#;

#[derive(ClapParser)]
#[command(name = "clon")]
#[command(about = "Commandline object notation - build JSON or YAML from a compact expression")]
#[command(before_help = BANNER, after_help = EXAMPLES)]
#[command(version)]
struct Cli {
    /// Output YAML instead of JSON
    #[arg(long)]
    yaml: bool,

    /// Dotenv file loaded before resolving ^VAR references
    #[arg(long, value_name = "PATH", default_value = ".env")]
    env_file: PathBuf,

    /// The expression (reads from stdin if not provided)
    #[arg(value_name = "EXPRESSION")]
    expressions: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load_env_file(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "loaded env file"),
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "no env file")
        }
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to load env file"),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    load_env_file(&cli.env_file);

    let input = if cli.expressions.is_empty() && !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Some(buffer)
    } else {
        None
    };

    let options = GenerateOptions {
        expressions: cli.expressions,
        input,
        format: if cli.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Json
        },
    };

    let output = cli::execute_generate(&options)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
