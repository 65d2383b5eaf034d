mod cli;

use clap::Parser;
use flowfile_logger::flowfile::{Attributes, FILENAME_ATTRIBUTE};
use flowfile_logger::prelude::*;
use log::info;
use std::collections::BTreeMap;
use std::path::Path;

fn flowfile_attributes(path: &Path, extra: &[(String, String)]) -> Attributes {
    let mut attributes = Attributes::new();
    if let Some(name) = path.file_name() {
        attributes.insert(
            FILENAME_ATTRIBUTE.to_string(),
            name.to_string_lossy().into_owned(),
        );
    }
    if let Some(parent) = path.parent() {
        attributes.insert("path".to_string(), parent.to_string_lossy().into_owned());
    }
    for (key, value) in extra {
        attributes.insert(key.clone(), value.clone());
    }
    attributes
}

fn build_context(args: &cli::Args) -> Result<ProcessContext, String> {
    let document = match &args.log_config {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            format!("Failed to read log configuration '{}': {e}", path.display())
        })?,
        None => cli::DEFAULT_LOG_CONFIG.to_string(),
    };

    let properties = [
        ("logConfiguration", Some(document.as_str())),
        ("type", Some(args.severity.as_str())),
        ("source", Some(args.source.as_str())),
        ("prefix", args.prefix.as_deref()),
        ("attributes", args.attributes.as_deref()),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|v| (name.to_string(), v.to_string())))
    .collect::<BTreeMap<_, _>>();

    Ok(ProcessContext::from_properties(properties))
}

fn main() {
    env_logger::init();
    let args = cli::Args::parse();

    let context = build_context(&args).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let processor = LogProcessor::new();
    if let Err(e) = processor.on_scheduled(&context) {
        eprintln!("Failed to schedule {}: {e}", processor.name());
        std::process::exit(1);
    }

    let mut session = InMemorySession::new();
    for path in &args.files {
        let attributes = flowfile_attributes(path, &args.extra_attributes);
        match std::fs::read(path) {
            Ok(content) => {
                session.enqueue(attributes, content);
            }
            Err(e) => {
                session.enqueue_unreadable(attributes, &e.to_string());
            }
        }
    }

    if args.verbose {
        info!("Queued {} flowfiles", session.pending());
    }

    loop {
        match processor.on_trigger(&mut session) {
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
    processor.on_stopped();

    let succeeded = session.transferred_to(Relationship::Success).len();
    let failed = session.transferred_to(Relationship::Failure);
    eprintln!(
        "{}: {succeeded}, {}: {}",
        Relationship::Success,
        Relationship::Failure,
        failed.len()
    );
    for flowfile in &failed {
        eprintln!("  {flowfile}");
    }

    if !failed.is_empty() {
        std::process::exit(2);
    }
}
