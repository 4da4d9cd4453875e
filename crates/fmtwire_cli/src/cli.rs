//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fmtwire - Shared formatter configuration for JavaScript projects
#[derive(Parser)]
#[command(name = "fmtwire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add formatter scripts and support files to a project
    Setup {
        /// Project directory (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Skip installing the formatter when it is missing
        #[arg(long)]
        no_install: bool,
    },

    /// Print a distributed configuration template
    Config {
        /// Template name (prettier, eslint-node, eslint-browser)
        target: Option<String>,

        /// List available templates
        #[arg(long)]
        list: bool,
    },
}
