// ABOUTME: CLI for parsing document HTML exports into page sections.
// ABOUTME: Reads exports from URL, file, or stdin and prints parsed sections as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use docpage_sections::parse_sections;
use serde_json::json;

/// Parse one or more exported HTML documents into page sections.
#[derive(Parser, Debug)]
#[command(name = "docpage")]
#[command(about = "Parse Google Doc HTML exports into structured page sections", long_about = None)]
struct Args {
    /// Export URL(s) (http/https) or local file paths. Use "-" to read one export from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut results = Vec::new();

    for target in &args.targets {
        match load_text(target) {
            Ok(html) => {
                let sections = parse_sections(&html);
                results.push(json!({
                    "target": target,
                    "ok": true,
                    "sections": sections,
                    "error": null
                }));
            }
            Err(err) => results.push(json!({
                "target": target,
                "ok": false,
                "sections": null,
                "error": err.to_string()
            })),
        }
    }

    // Single successful target emits the bare section array; anything
    // else gets an envelope with per-target status.
    let output = if args.targets.len() == 1 {
        let first = &results[0];
        if first.get("ok").and_then(|v| v.as_bool()) == Some(true) {
            first.get("sections").cloned().unwrap_or_else(|| json!([]))
        } else {
            json!({ "documents": results, "parsed": 0, "failed": 1 })
        }
    } else {
        let parsed = results
            .iter()
            .filter(|r| r.get("ok").and_then(|v| v.as_bool()) == Some(true))
            .count();
        let failed = results.len() - parsed;
        json!({ "documents": results, "parsed": parsed, "failed": failed })
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn load_text(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        let resp = reqwest::blocking::get(target)?.error_for_status()?;
        return Ok(resp.text()?);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read_to_string(path)?)
}
