//! CLI entry point for treelist

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use clap::{CommandFactory, Parser, ValueEnum};
use tracing::Level;
use treelist::{BuilderConfig, OutputConfig, validate_input};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treelist")]
#[command(about = "List a directory tree as indented text, JSON or YAML")]
#[command(version)]
struct Args {
    /// REQUIRED: path to the directory to list
    #[arg(short, long, default_value = "")]
    path: String,

    /// List files recursively
    #[arg(short, long)]
    recursive: bool,

    /// Output format: text, json or yaml
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    output: String,

    /// Control color output for text: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Report unreadable directories and entries on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::WARN } else { Level::ERROR };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // Invalid input prints every problem, then the usage text
    let validation = validate_input(&args.path, &args.output);
    let Some(format) = validation.format() else {
        for e in validation.errors() {
            eprintln!("{}\n", e);
        }
        eprintln!("{}", Args::command().render_help());
        return;
    };
    let builder = BuilderConfig::recursive(args.recursive);
    let output = OutputConfig {
        use_color: should_use_color(args.color),
    };

    if let Err(e) = treelist::print(format, Path::new(&args.path), &builder, &output) {
        eprintln!("treelist: error writing output: {}", e);
        process::exit(1);
    }
}
