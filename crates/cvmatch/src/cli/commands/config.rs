//! Implementation of `cvmatch config`.

use std::process::ExitCode;

use cvmatch_config::{discover_config_files, is_global_config};
use cvmatch_highlight::{Highlighter, rule};

use crate::cli::{
    context::CommandContext,
    output::{dim, header, subheader, success, warning},
};

/// Shows discovered config files, effective settings and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    let files = discover_config_files(&ctx.cwd);

    println!("{}", header("Configuration"));
    println!();

    if files.is_empty() {
        println!("{}", dim("No configuration files found, using defaults."));
        println!("Run 'cvmatch init' to create a configuration file.");
    } else {
        println!("{}", subheader("Config files (highest precedence first):"));
        for path in &files {
            let scope = if is_global_config(path) { "global" } else { "local" };
            println!("  {} {}", path.display(), dim(&format!("({scope})")));
        }
    }
    println!();

    let toml = match config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}", subheader("Effective settings:"));
    println!("{}", rule(40));
    print!("{}", Highlighter::new().highlight_toml(&toml));
    println!("{}", rule(40));
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("{}", success("No issues found."));
    } else {
        println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
        for w in &warnings {
            println!("  {}", warning(&format!("warning: {w}")));
        }
    }

    ExitCode::SUCCESS
}
