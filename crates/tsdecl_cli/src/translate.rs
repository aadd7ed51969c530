//! Translate command for the tsdecl CLI
//!
//! This module provides the `tsdecl translate` command, which reads type
//! descriptors from a JSON file and prints their TypeScript translation.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::warn;
use tsdecl_weld::{ImportSession, TypeDescriptor, TypeTranslator};

/// Run the translate command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let cmd = TranslateCommand::parse(args)?;

    let raw = fs::read_to_string(&cmd.input)
        .with_context(|| format!("Failed to read {}", cmd.input.display()))?;
    let descriptors = parse_descriptors(&raw)
        .with_context(|| format!("Invalid type descriptors in {}", cmd.input.display()))?;

    let translator = TypeTranslator::new();
    let mut session = ImportSession::new();

    for ty in &descriptors {
        let ts = translator.translate(ty);
        if cmd.show_names {
            println!("{} => {}", ty.name(), ts);
        } else {
            println!("{}", ts);
        }
        if cmd.show_imports {
            for import in new_imports(ty, &mut session) {
                println!("  import {}", import);
            }
        }
    }

    let unmapped = translator.unmapped();
    if !unmapped.is_empty() {
        warn!(count = unmapped.len(), types = %unmapped.join(", "), "unmapped host types");
    }

    Ok(())
}

/// Simple names first referenced by `ty` or any of its type arguments
fn new_imports(ty: &TypeDescriptor, session: &mut ImportSession) -> Vec<String> {
    let mut imports = Vec::new();
    collect_imports(ty, session, &mut imports);
    imports
}

fn collect_imports(ty: &TypeDescriptor, session: &mut ImportSession, imports: &mut Vec<String>) {
    if !session.mark_and_check(ty) {
        imports.push(ty.simple_name.clone());
    }
    for arg in &ty.type_args {
        collect_imports(arg, session, imports);
    }
}

/// Accept a single descriptor or an array of descriptors
fn parse_descriptors(raw: &str) -> serde_json::Result<Vec<TypeDescriptor>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

/// Translate command configuration
#[derive(Debug)]
struct TranslateCommand {
    /// JSON file holding the descriptors
    input: PathBuf,
    /// Prefix each line with the host name
    show_names: bool,
    /// Report which references need an import
    show_imports: bool,
}

impl TranslateCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut input = None;
        let mut show_names = false;
        let mut show_imports = false;

        for arg in args {
            match arg.as_str() {
                "--names" | "-n" => show_names = true,
                "--imports" | "-i" => show_imports = true,
                arg if !arg.starts_with('-') => {
                    if input.is_some() {
                        bail!("Only one input file may be given");
                    }
                    input = Some(PathBuf::from(arg));
                }
                _ => bail!("Unknown flag: {}", arg),
            }
        }

        let Some(input) = input else {
            bail!("translate requires a descriptor file");
        };

        Ok(Self {
            input,
            show_names,
            show_imports,
        })
    }
}
