//! `cephconf render` implementation.

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};

use crate::cli::types::RenderArgs;
use crate::template::DataBag;
use crate::writer::ConfigWriter;

/// Render the requested config file and print the path it was written to.
pub fn execute(args: RenderArgs) -> Result<()> {
    let config = super::config_file(args.kind, &args.config_dir, args.name.as_deref())?;
    let data = load_data(&args.data)?;
    let mode = parse_mode(&args.mode)?;

    config.write_config(&data, mode)?;
    println!("{}", config.path().display());
    Ok(())
}

/// Read the data bag from a JSON or YAML file, or JSON from stdin for `-`.
fn load_data(source: &str) -> Result<DataBag> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read data bag from stdin")?;
        buf
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("failed to read data bag from {source}"))?
    };

    let value: serde_json::Value = if source.ends_with(".yaml") || source.ends_with(".yml") {
        serde_yaml::from_str(&raw).context("data bag is not valid YAML")?
    } else {
        serde_json::from_str(&raw).context("data bag is not valid JSON")?
    };

    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => bail!("data bag must be a mapping of keys to values"),
    }
}

/// Parse permission bits given in octal, with or without a `0o` prefix.
fn parse_mode(mode: &str) -> Result<u32> {
    let digits = mode.trim_start_matches("0o");
    u32::from_str_radix(digits, 8).with_context(|| format!("invalid octal file mode '{mode}'"))
}
