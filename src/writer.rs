//! Persisting rendered config files to disk.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;

use tracing::debug;

use crate::error::ConfigError;
use crate::template::{ConfigTemplate, DataBag};

/// Writes a config file from a data bag and unix permission bits.
///
/// The seam between the renderers and the orchestration code that decides
/// when to (re)render; callers can hold any writer behind this trait.
pub trait ConfigWriter {
    /// Render and persist the file, replacing any previous contents.
    fn write_config(&self, data: &DataBag, mode: u32) -> Result<(), ConfigError>;
}

/// A single config file: a fixed rendering bound to a target path.
///
/// Immutable after construction. Every write is a fresh
/// create-or-truncate/render/close cycle; no state survives between calls and
/// no backup of previous contents is kept. The write is not atomic across a
/// process crash (truncate-then-write, not write-then-rename).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    template: ConfigTemplate,
    config_dir: PathBuf,
    config_file: String,
}

impl ConfigFile {
    /// The main daemon config, written as `ceph.conf` under `config_dir`.
    pub fn ceph_conf(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            template: ConfigTemplate::CephConf,
            config_dir: config_dir.into(),
            config_file: "ceph.conf".to_string(),
        }
    }

    /// A keyring for one identity, written under a caller-supplied filename.
    pub fn ceph_keyring(config_dir: impl Into<PathBuf>, config_file: impl Into<String>) -> Self {
        Self {
            template: ConfigTemplate::CephKeyring,
            config_dir: config_dir.into(),
            config_file: config_file.into(),
        }
    }

    /// The RadosGW frontend config, written as `radosgw.conf` under `config_dir`.
    pub fn radosgw_conf(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            template: ConfigTemplate::RadosGw,
            config_dir: config_dir.into(),
            config_file: "radosgw.conf".to_string(),
        }
    }

    /// Target path: directory joined with filename.
    pub fn path(&self) -> PathBuf {
        self.config_dir.join(&self.config_file)
    }

    fn open_error(&self, source: io::Error) -> ConfigError {
        ConfigError::Open {
            file: self.config_file.clone(),
            source,
        }
    }
}

impl ConfigWriter for ConfigFile {
    fn write_config(&self, data: &DataBag, mode: u32) -> Result<(), ConfigError> {
        // Render up front so a bad data bag never truncates the existing file.
        let rendered = self
            .template
            .render(data)
            .map_err(|source| ConfigError::Render {
                file: self.config_file.clone(),
                source,
            })?;

        let path = self.path();
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .mode(mode)
            .open(&path)
            .map_err(|source| self.open_error(source))?;
        file.write_all(rendered.as_bytes())
            .map_err(|source| self.open_error(source))?;

        debug!(path = %path.display(), bytes = rendered.len(), "wrote config file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn keyring_bag() -> DataBag {
        json!({ "name": "client.admin", "key": "AQA==" })
            .as_object()
            .unwrap()
            .clone()
    }

    #[test]
    fn path_joins_dir_and_filename() {
        let config = ConfigFile::ceph_conf("/var/snap/microceph/current/conf");
        assert_eq!(
            config.path(),
            PathBuf::from("/var/snap/microceph/current/conf/ceph.conf")
        );

        let keyring = ConfigFile::ceph_keyring("/tmp/conf", "ceph.client.admin.keyring");
        assert_eq!(
            keyring.path(),
            PathBuf::from("/tmp/conf/ceph.client.admin.keyring")
        );

        let radosgw = ConfigFile::radosgw_conf("/tmp/conf");
        assert_eq!(radosgw.path(), PathBuf::from("/tmp/conf/radosgw.conf"));
    }

    #[test]
    fn write_creates_file_with_rendered_contents() {
        let dir = TempDir::new().unwrap();
        let keyring = ConfigFile::ceph_keyring(dir.path(), "ceph.keyring");
        keyring.write_config(&keyring_bag(), 0o640).unwrap();

        let written = std::fs::read_to_string(keyring.path()).unwrap();
        assert_eq!(
            written,
            "# Generated by MicroCeph, DO NOT EDIT.\n[client.admin]\n\tkey = AQA==\n"
        );
    }

    #[test]
    fn writers_work_behind_the_trait() {
        let dir = TempDir::new().unwrap();
        let writer: Box<dyn ConfigWriter> =
            Box::new(ConfigFile::ceph_keyring(dir.path(), "ceph.keyring"));
        writer.write_config(&keyring_bag(), 0o640).unwrap();
        assert!(dir.path().join("ceph.keyring").exists());
    }
}
