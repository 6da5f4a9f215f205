// File: src/bin/ui_bridge.rs
// Drives the viewer engine for an external display process: one command
// per stdin line, one JSON response per stdout line. Every exchange is
// logged to a file so the protocol stream stays clean.
use std::env;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use viewer_core::core::lookup::LookupOutcome;
use viewer_core::ViewerEngine;

const DEFAULT_DATASET_PATH: &str = "compatibility_results.json";

fn main() -> io::Result<()> {
    init_logging();
    tracing::info!("compatibility bridge starting");

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

    let engine = match ViewerEngine::from_file(&path) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "could not load dataset");
            eprintln!("[ERROR] Could not load dataset '{}': {}", path.display(), e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        tracing::debug!(command = %input, "bridge <-");

        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input.as_str(), ""),
        };

        match command {
            "PARTICIPANTS" => {
                let payload = serde_json::to_string(engine.participants())
                    .unwrap_or_else(|_| "[]".to_string());
                respond(&mut stdout, &payload)?;
            }
            "METADATA" => {
                let payload = serde_json::to_string(engine.metadata())
                    .unwrap_or_else(|_| "{}".to_string());
                respond(&mut stdout, &payload)?;
            }
            "TOP" => {
                let n = rest.parse::<usize>().unwrap_or(10);
                let ranked: Vec<serde_json::Value> = engine
                    .top_matches(n)
                    .into_iter()
                    .map(|result| {
                        serde_json::json!({
                            "person1": result.person1,
                            "person2": result.person2,
                            "compatibility_score": result.compatibility_score,
                        })
                    })
                    .collect();
                let payload =
                    serde_json::to_string(&ranked).unwrap_or_else(|_| "[]".to_string());
                respond(&mut stdout, &payload)?;
            }
            "LOOKUP" => {
                let (a, b) = rest.split_once('|').unwrap_or((rest, ""));
                let response = match engine.lookup(a.trim(), b.trim()) {
                    LookupOutcome::Found(result) => {
                        serde_json::json!({"status": "found", "result": result})
                    }
                    LookupOutcome::NotFound => serde_json::json!({"status": "not_found"}),
                    LookupOutcome::NoSelection => serde_json::json!({"status": "no_selection"}),
                };
                respond(&mut stdout, &response.to_string())?;
            }
            "EXIT" => {
                tracing::info!("bridge shutting down");
                break;
            }
            _ => {
                tracing::warn!(command = %input, "unknown bridge command");
            }
        }
    }

    Ok(())
}

fn respond(stdout: &mut io::Stdout, payload: &str) -> io::Result<()> {
    tracing::debug!(response = %payload, "bridge ->");
    writeln!(stdout, "{}", payload)?;
    stdout.flush()
}

fn init_logging() {
    let _ = std::fs::create_dir_all("target");
    if let Ok(file) = File::create(PathBuf::from("target").join("compat_bridge.log")) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .try_init();
    }
}
