//! Registry lookup commands for the tsdecl CLI
//!
//! - `tsdecl package <module> <group>`: resolved npm package name
//! - `tsdecl override <type> <method>`: signature override for a method
//! - `tsdecl escape <identifier>...`: reserved-word safe identifiers
//! - `tsdecl license`: license banner for generated files

use anyhow::{bail, Result};
use tsdecl_weld::{escape, generate_license, GeneratorConfig, ModuleInfo, RegistryState};

/// Run the package command
pub fn package(config: &GeneratorConfig, args: &[String]) -> Result<()> {
    let [module, group] = args else {
        bail!("package requires <module> <group>");
    };

    let state = RegistryState::from_config(config);
    let module = ModuleInfo::new(module.as_str(), group.as_str());
    println!("{}", state.resolve_package_name(&module));

    if config.is_optional_module(&module.name) {
        println!("  (optional dependency)");
    }
    Ok(())
}

/// Run the override command
pub fn override_signature(config: &GeneratorConfig, args: &[String]) -> Result<()> {
    let [type_name, method] = args else {
        bail!("override requires <type> <method>");
    };

    let mut state = RegistryState::from_config(config);
    let Some(entry) = state.overrides.get_override(type_name, method)? else {
        println!("no override");
        return Ok(());
    };

    if let Some(args) = entry.args() {
        println!("args: {}", args);
    }
    if let Some(ret) = entry.returns() {
        println!("return: {}", ret);
    }
    Ok(())
}

/// Run the escape command
pub fn escape_identifiers(args: &[String]) -> Result<()> {
    if args.is_empty() {
        bail!("escape requires at least one identifier");
    }
    for ident in args {
        println!("{}", escape(ident));
    }
    Ok(())
}

/// Run the license command
pub fn license(config: &GeneratorConfig) -> Result<()> {
    print!("{}", generate_license(config.year));
    Ok(())
}
