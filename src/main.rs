use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use idk::{
    config::Options,
    interpreter::session::{Prompt, Session},
    run_source,
};
use tracing_subscriber::EnvFilter;

/// idk runs programs written in the IDK scripting language, from a file or
/// interactively.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program to run. Without it idk starts an interactive session.
    file: Option<PathBuf>,

    /// Start an interactive session.
    #[arg(short, long, conflicts_with = "file")]
    interactive: bool,

    /// Skip the syntax checker; type errors surface during evaluation instead.
    #[arg(long)]
    no_check: bool,

    /// Log debug events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let options = Options { check_syntax: !args.no_check };

    match args.file {
        Some(path) if !args.interactive => run_file(&path, &options),
        _ => run_interactive(options),
    }
}

fn run_file(path: &Path, options: &Options) -> Result<ExitCode> {
    let source = fs::read_to_string(path).with_context(|| {
                                              format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                      path.display())
                                          })?;

    let mut stdout = io::stdout().lock();
    if let Err(e) = run_source(&source, options, &mut stdout) {
        stdout.flush()?;
        eprintln!("[ERROR] {e}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_interactive(options: Options) -> Result<ExitCode> {
    let mut session = Session::new(options);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to IDK interactive!");
    loop {
        let prompt = match session.prompt() {
            Prompt::Statement => "$ ",
            Prompt::Continuation => "... ",
        };
        print!("{prompt}");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim() == "exit" {
            break;
        }

        if let Err(e) = session.submit(line, &mut stdout) {
            println!("[ERROR] {e}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
