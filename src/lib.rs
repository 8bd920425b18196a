//! Config file generation for Ceph services.
//!
//! Renders the static config files a Ceph deployment needs (the daemon
//! config, keyrings and the RadosGW frontend config) from a key/value data
//! bag, and writes them to disk with caller-supplied permission bits. Each
//! write is a fresh truncate-and-write cycle; nothing persists in memory
//! between calls.
//!
//! # Example
//!
//! ```no_run
//! use cephconf::{ConfigFile, ConfigWriter, DataBag};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), cephconf::ConfigError> {
//! let keyring = ConfigFile::ceph_keyring("/var/snap/microceph/current/conf", "ceph.keyring");
//! let data: DataBag = json!({ "name": "client.admin", "key": "AQA==" })
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//! keyring.write_config(&data, 0o640)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod template;
pub mod writer;

// Re-export the library surface for convenience
pub use error::{ConfigError, RenderError};
pub use template::{ConfigTemplate, DataBag};
pub use writer::{ConfigFile, ConfigWriter};
