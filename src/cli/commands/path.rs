//! `cephconf path` implementation.

use anyhow::Result;

use crate::cli::types::PathArgs;

/// Print the path the requested config file would be written to.
pub fn execute(args: PathArgs) -> Result<()> {
    let config = super::config_file(args.kind, &args.config_dir, args.name.as_deref())?;
    println!("{}", config.path().display());
    Ok(())
}
