//! Util Belt CLI
//!
//! Thin command-line front end over the core library: emit deterministic
//! pseudo-random values, or enumerate paths matching a glob.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use util_belt_core_rs::{get_paths, PathQuery, PathSelection, Xorshift32};

/// Deterministic utility toolbox
#[derive(Parser, Debug)]
#[command(name = "util-belt")]
#[command(about = "Deterministic utility toolbox", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print pseudo-random 32-bit values from the xorshift32 generator
    Rng {
        /// Seed for the generator
        #[arg(short, long, default_value_t = 0)]
        seed: i32,

        /// Number of values to print
        #[arg(short, long)]
        limit: usize,
    },

    /// Print paths under a root directory matching a glob pattern
    Paths {
        /// Root directory to search in
        root: PathBuf,

        /// Glob pattern matched against the path relative to the root
        #[arg(short, long, default_value = "**/*")]
        pattern: String,

        /// Which entries to include
        #[arg(short, long, value_enum, default_value = "no")]
        directories: Directories,

        /// Print paths relative to the root instead of absolute
        #[arg(long)]
        relative: bool,
    },
}

/// Directory handling for the `paths` subcommand
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Directories {
    /// Files only
    No,
    /// Files and directories
    Yes,
    /// Directories only
    Only,
}

impl From<Directories> for PathSelection {
    fn from(value: Directories) -> Self {
        match value {
            Directories::No => PathSelection::Files,
            Directories::Yes => PathSelection::FilesAndDirectories,
            Directories::Only => PathSelection::DirectoriesOnly,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Command::Rng { seed, limit } => {
            for value in Xorshift32::with_limit(seed, limit) {
                println!("{value}");
            }
            ExitCode::SUCCESS
        }
        Command::Paths {
            root,
            pattern,
            directories,
            relative,
        } => {
            let query = PathQuery::new()
                .pattern(pattern)
                .selection(directories.into())
                .absolute(!relative);

            match get_paths(&root, &query) {
                Ok(paths) => {
                    for path in paths {
                        println!("{}", path.display());
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("util-belt: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
