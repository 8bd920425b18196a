//! Fixed renderings for the config files a Ceph deployment needs.
//!
//! Each rendering is a list of lines built from explicit per-field presence
//! checks against the data bag, joined with newlines. Optional fields follow
//! the truthiness rules of the deployment tooling these files originate from:
//! `false`, `0`, `""`, `null` and empty collections suppress the line.

use serde_json::{Map, Value};

use crate::error::RenderError;

/// Data supplied to a render call, keyed by field name.
pub type DataBag = Map<String, Value>;

/// One of the known config file renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTemplate {
    /// Main daemon config (`ceph.conf`).
    CephConf,
    /// Keyring stanza for a single named identity.
    CephKeyring,
    /// RadosGW frontend config (`radosgw.conf`).
    RadosGw,
}

impl ConfigTemplate {
    /// Render the template against `data`, producing the full file contents.
    pub fn render(self, data: &DataBag) -> Result<String, RenderError> {
        match self {
            ConfigTemplate::CephConf => render_ceph_conf(data),
            ConfigTemplate::CephKeyring => render_keyring(data),
            ConfigTemplate::RadosGw => render_radosgw_conf(data),
        }
    }
}

fn render_ceph_conf(data: &DataBag) -> Result<String, RenderError> {
    let mut lines = vec![
        "# # Generated by MicroCeph, DO NOT EDIT.".to_string(),
        "[global]".to_string(),
        format!("run dir = {}", required(data, "runDir")?),
        format!("fsid = {}", required(data, "fsid")?),
        format!("mon host = {}", required(data, "monitors")?),
        format!("public_network = {}", required(data, "pubNet")?),
        "auth allow insecure global id reclaim = false".to_string(),
        format!("ms bind ipv4 = {}", required(data, "ipv4")?),
        format!("ms bind ipv6 = {}", required(data, "ipv6")?),
        String::new(),
        "[client]".to_string(),
    ];

    for (option, key) in [
        ("rbd_cache", "isCache"),
        ("rbd_cache_size", "cacheSize"),
        ("rbd_cache_writethrough_until_flush", "isCacheWritethrough"),
        ("rbd_cache_max_dirty", "cacheMaxDirty"),
        ("rbd_cache_target_dirty", "cacheTargetDirty"),
    ] {
        if let Some(value) = optional(data, key)? {
            lines.push(format!("{option} = {value}"));
        }
    }

    Ok(join_lines(&lines))
}

fn render_keyring(data: &DataBag) -> Result<String, RenderError> {
    Ok(format!(
        "# Generated by MicroCeph, DO NOT EDIT.\n[{}]\n\tkey = {}\n",
        required(data, "name")?,
        required(data, "key")?,
    ))
}

fn render_radosgw_conf(data: &DataBag) -> Result<String, RenderError> {
    let port = integer(data, "rgwPort")?;
    let ssl_certificate = optional(data, "sslCertificatePath")?;
    let ssl_private_key = optional(data, "sslPrivateKeyPath")?;

    // The plain-port and ssl clauses are not mutually exclusive: a non-zero
    // port combined with both TLS paths emits both.
    let mut frontends = String::from("rgw frontends = beast");
    if port != 0 || ssl_certificate.is_none() || ssl_private_key.is_none() {
        frontends.push_str(&format!(" port={port}"));
    }
    if let (Some(cert), Some(key)) = (&ssl_certificate, &ssl_private_key) {
        frontends.push_str(&format!(
            " ssl_port={} ssl_certificate={cert} ssl_private_key={key}",
            required(data, "sslPort")?,
        ));
    }

    let lines = [
        "# Generated by MicroCeph, DO NOT EDIT.".to_string(),
        "[global]".to_string(),
        format!("mon host = {}", required(data, "monitors")?),
        format!("run dir = {}", required(data, "runDir")?),
        "auth allow insecure global id reclaim = false".to_string(),
        String::new(),
        "[client.radosgw.gateway]".to_string(),
        "rgw init timeout = 1200".to_string(),
        frontends,
    ];

    Ok(join_lines(&lines))
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn required(data: &DataBag, key: &str) -> Result<String, RenderError> {
    let value = data
        .get(key)
        .ok_or_else(|| RenderError::MissingKey(key.to_string()))?;
    scalar(key, value)
}

/// `Some(rendered)` when the key is present and truthy, `None` otherwise.
fn optional(data: &DataBag, key: &str) -> Result<Option<String>, RenderError> {
    match data.get(key) {
        Some(value) if truthy(value) => scalar(key, value).map(Some),
        _ => Ok(None),
    }
}

fn integer(data: &DataBag, key: &str) -> Result<i64, RenderError> {
    data.get(key)
        .ok_or_else(|| RenderError::MissingKey(key.to_string()))?
        .as_i64()
        .ok_or_else(|| RenderError::ExpectedInteger(key.to_string()))
}

fn scalar(key: &str, value: &Value) -> Result<String, RenderError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(RenderError::UnsupportedValue(key.to_string()))
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
