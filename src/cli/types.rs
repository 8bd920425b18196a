//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI entry.
#[derive(Parser)]
#[command(name = "cephconf")]
#[command(about = "Generate Ceph service config files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render a config file into the target directory
    Render(RenderArgs),

    /// Print the path a config file would be written to
    Path(PathArgs),
}

/// Which of the known config files to produce.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigKind {
    /// Main daemon config (ceph.conf)
    Ceph,
    /// Keyring for a named identity
    Keyring,
    /// RadosGW frontend config (radosgw.conf)
    Radosgw,
}

/// Arguments for `cephconf render`.
#[derive(Args)]
pub struct RenderArgs {
    /// Config file kind
    #[arg(value_enum)]
    pub kind: ConfigKind,

    /// Directory the file is written into
    #[arg(short, long, env = "CEPHCONF_DIR", default_value = ".")]
    pub config_dir: PathBuf,

    /// JSON or YAML file holding the data bag ('-' reads JSON from stdin)
    #[arg(short, long)]
    pub data: String,

    /// File mode in octal, applied when the file is created
    #[arg(short, long, default_value = "0644")]
    pub mode: String,

    /// Keyring filename (required for keyring)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for `cephconf path`.
#[derive(Args)]
pub struct PathArgs {
    /// Config file kind
    #[arg(value_enum)]
    pub kind: ConfigKind,

    /// Directory the file would be written into
    #[arg(short, long, env = "CEPHCONF_DIR", default_value = ".")]
    pub config_dir: PathBuf,

    /// Keyring filename (required for keyring)
    #[arg(short, long)]
    pub name: Option<String>,
}
