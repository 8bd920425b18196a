//! Subcommand implementations.

pub mod path;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::types::ConfigKind;
use crate::writer::ConfigFile;

/// Build the [`ConfigFile`] a subcommand targets.
pub(crate) fn config_file(
    kind: ConfigKind,
    config_dir: &Path,
    name: Option<&str>,
) -> Result<ConfigFile> {
    Ok(match kind {
        ConfigKind::Ceph => ConfigFile::ceph_conf(config_dir),
        ConfigKind::Keyring => {
            let name = name.context("--name is required for keyring files")?;
            ConfigFile::ceph_keyring(config_dir, name)
        }
        ConfigKind::Radosgw => ConfigFile::radosgw_conf(config_dir),
    })
}
