use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use minicalc::{
    config::{Config, OverflowMode},
    render, run,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// minicalc runs programs made of integer assignments such as `x = 1 + 2;`
/// and prints the final value of every variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file to run. Reads standard input when omitted or `-`.
    input: Option<PathBuf>,

    /// Writes the report to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treats characters that are not part of the language as errors instead
    /// of ignoring them.
    #[arg(long)]
    strict: bool,

    /// What to do when arithmetic overflows.
    #[arg(long, value_enum, default_value_t = OverflowMode::Wrapping)]
    overflow: OverflowMode,
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn read_source(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => io::read_to_string(io::stdin()),
    }
}

fn write_report(output: Option<&Path>, report: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, report),
        None => io::stdout().lock().write_all(report.as_bytes()),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = match read_source(args.input.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            let name = args.input
                           .as_ref()
                           .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
            eprintln!("Failed to read the input '{name}': {e}. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        },
    };

    let config = Config::new().with_strict(args.strict)
                              .with_overflow(args.overflow);
    let result = run(&source, &config);

    if let Err(e) = write_report(args.output.as_deref(), &render(&result)) {
        eprintln!("Failed to write the report: {e}");
        return ExitCode::FAILURE;
    }

    if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
