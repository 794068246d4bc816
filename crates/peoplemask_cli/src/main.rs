//! `peoplemask` command line entry point.
//!
//! # Responsibility
//! - Load one person document, run duplicate cleanup on the requested
//!   fields and print the result.
//! - Keep all document semantics in `peoplemask_core`.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use peoplemask_core::{
    default_log_level, init_logging, CleanupService, FieldMask, Person, PersonField,
};

mod args;
use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let field_mask = match cli.fields.as_deref() {
        Some(fields) => FieldMask::<PersonField>::parse(fields)
            .with_context(|| format!("invalid --fields value `{fields}`"))?,
        None => FieldMask::all(),
    };

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read `{}`", cli.input.display()))?;
    let document: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("`{}` is not valid JSON", cli.input.display()))?;
    let mut person = Person::new(document, field_mask).context("unsupported person document")?;

    let report = CleanupService::new()
        .dedupe(&mut person)
        .context("cleanup failed")?;
    info!(
        "event=cli_cleanup module=cli status=ok person={} removed={} dry_run={}",
        person.identifier(),
        report.total_removed(),
        cli.dry_run
    );

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&person.model_snapshot())?);
        eprintln!(
            "removed {} duplicate(s) from {}",
            report.total_removed(),
            person.display_label()
        );
    }
    log::logger().flush();
    Ok(())
}
