use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use strand::{directory, filter, glob, tokens, walk, Enumerator, TokenConfig, WalkConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "strand", about = "Enumerate directories, globs and tokens")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the entries of one directory.
    Dir {
        /// Directory to list.
        path: PathBuf,
        /// Only list subdirectories.
        #[arg(long)]
        dirs_only: bool,
    },
    /// List paths matching a glob pattern.
    Glob {
        /// Pattern such as `/etc/*.conf`.
        pattern: String,
    },
    /// Split a string into tokens.
    Tokens {
        /// String to split.
        input: String,
        /// Separator characters (any one ends a token).
        #[arg(long, default_value = ",")]
        sep: String,
        /// Characters trimmed from each token.
        #[arg(long, default_value = " ")]
        trim: String,
    },
    /// Walk a directory tree depth-first.
    Walk {
        /// Root of the walk.
        path: PathBuf,
        /// Deepest level to report (root entries are level 1).
        #[arg(long)]
        max_depth: Option<usize>,
        /// Include entries whose name starts with a dot.
        #[arg(long)]
        hidden: bool,
        /// Report files only.
        #[arg(long)]
        files_only: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dir { path, dirs_only } => run_dir(path, dirs_only)?,
        Commands::Glob { pattern } => run_glob(&pattern)?,
        Commands::Tokens { input, sep, trim } => run_tokens(input, &sep, &trim)?,
        Commands::Walk {
            path,
            max_depth,
            hidden,
            files_only,
        } => {
            let mut config = WalkConfig::default()
                .with_hidden(hidden)
                .with_files_only(files_only);
            if let Some(depth) = max_depth {
                config = config.with_max_depth(depth);
            }
            run_walk(path, &config)?
        }
    }

    Ok(())
}

fn run_dir(path: PathBuf, dirs_only: bool) -> Result<()> {
    let entries = directory(&path)
        .with_context(|| format!("failed to list directory {}", path.display()))?;

    let mut listing = filter(entries, dirs_only, |dirs_only, (name, _, metadata)| {
        let is_dir = metadata.as_ref().is_some_and(|m| m.is_dir());
        if *dirs_only && !is_dir {
            return None;
        }
        Some(if is_dir { format!("{name}/") } else { name })
    });
    while let Some(line) = listing.enumerate() {
        println!("{line}");
    }
    listing.release();

    Ok(())
}

fn run_glob(pattern: &str) -> Result<()> {
    let matches = glob(pattern).with_context(|| format!("failed to expand {pattern}"))?;
    for (path, metadata) in matches.into_iter() {
        let size = metadata.map(|m| m.len()).unwrap_or_default();
        println!("{}\t{}", path.display(), size);
    }
    Ok(())
}

fn run_tokens(input: String, sep: &str, trim: &str) -> Result<()> {
    let config = TokenConfig::new(sep).with_trim(trim);
    let tokens = tokens(input, &config).context("invalid tokenizer settings")?;
    for (idx, token) in tokens.into_iter().enumerate() {
        println!("{}\t{}", idx + 1, token);
    }
    Ok(())
}

fn run_walk(path: PathBuf, config: &WalkConfig) -> Result<()> {
    let entries =
        walk(&path, config).with_context(|| format!("failed to walk {}", path.display()))?;
    for (entry, depth) in entries.into_iter() {
        println!("{}{}", "  ".repeat(depth - 1), entry.display());
    }
    Ok(())
}
