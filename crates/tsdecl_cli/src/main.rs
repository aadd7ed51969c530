//! tsdecl - inspect the TypeScript declaration type mapping
//!
//! # Commands
//!
//! ```text
//! tsdecl translate <descriptors.json> [--names] [--imports]
//! tsdecl package <module> <group>
//! tsdecl override <type> <method>
//! tsdecl escape <identifier>...
//! tsdecl license
//! ```
//!
//! Configuration is read from the `TSDECL_*` environment variables, see
//! [`tsdecl_weld::config`]. Log level is controlled with `TSDECL_LOG`.

mod lookup;
mod translate;

use anyhow::{bail, Result};
use std::env;
use tsdecl_weld::GeneratorConfig;

const USAGE: &str = "Usage: tsdecl <translate|package|override|escape|license> [args...]";

fn main() -> Result<()> {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("TSDECL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    match command.as_str() {
        "translate" => translate::run(rest),
        "package" => lookup::package(&GeneratorConfig::from_env()?, rest),
        "override" => lookup::override_signature(&GeneratorConfig::from_env()?, rest),
        "escape" => lookup::escape_identifiers(rest),
        "license" => lookup::license(&GeneratorConfig::from_env()?),
        "--help" | "-h" | "help" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => bail!("Unknown command: {}\n{}", other, USAGE),
    }
}
