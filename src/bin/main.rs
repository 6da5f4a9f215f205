use std::env;
use std::fs::File;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use tracing_subscriber::EnvFilter;

use viewer_core::core::lookup::LookupOutcome;
use viewer_core::core::types::PairwiseResult;
use viewer_core::render::{
    breakdown_rows, format_fraction, format_score, metric_tiles, score_level, ScoreLevel,
    NOT_FOUND_MSG, NO_SELECTION_MSG,
};
use viewer_core::ViewerEngine;

const DEFAULT_DATASET_PATH: &str = "compatibility_results.json";

fn main() {
    init_logging();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

    let mut engine = match ViewerEngine::from_file(&path) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[ERROR] Could not load dataset '{}': {}", path.display(), e);
            process::exit(1);
        }
    };

    let mut status: Option<String> = None;
    let mut show_top = false;

    loop {
        print_ui(&engine, show_top, status.take());

        let mut input = String::new();
        let Ok(bytes) = stdin().read_line(&mut input) else {
            break;
        };
        if bytes == 0 {
            break; // stdin closed
        }

        match input.trim() {
            "exit" | "quit" => break,
            "" => {}
            "clear" => {
                engine.clear_selection();
                show_top = false;
            }
            "top" => show_top = !show_top,
            cmd => {
                show_top = false;
                status = apply_pick(&mut engine, cmd);
            }
        }
    }
}

/// Parses a pick command ('a <n>' or 'b <n>') against the numbered
/// participant list. Returns a status message when nothing was applied.
fn apply_pick(engine: &mut ViewerEngine, cmd: &str) -> Option<String> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let slot = parts.first().copied().unwrap_or("");
    if slot != "a" && slot != "b" {
        return Some(format!("Unknown command: '{}'", cmd));
    }

    let number = parts.get(1).copied().unwrap_or("");
    let Ok(n) = number.parse::<usize>() else {
        return Some(format!("Not a participant number: '{}'", number));
    };
    let Some(name) = engine.participants().get(n.wrapping_sub(1)).cloned() else {
        return Some(format!("No participant #{}", n));
    };

    let applied = if slot == "a" {
        engine.select_first(&name)
    } else {
        engine.select_second(&name)
    };
    if applied {
        None
    } else {
        Some(format!("'{}' is already picked on the other side", name))
    }
}

fn print_ui(engine: &ViewerEngine, show_top: bool, status: Option<String>) {
    let mut out = stdout();
    let _ = execute!(out, Clear(ClearType::All), MoveTo(0, 0));

    println!("{}", "Reading Compatibility Viewer".bold());
    println!("---------------------------------------------------------------");
    println!("Pick readers with 'a <n>' and 'b <n>'. 'top' shows the best");
    println!("pairings, 'clear' resets, 'exit' quits.\n");

    print_participants(engine);

    let first = engine.first_selected().unwrap_or("(none)");
    let second = engine.second_selected().unwrap_or("(none)");
    println!("\nReader A: [{}]    Reader B: [{}]\n", first.bold(), second.bold());

    if show_top {
        print_top_matches(engine);
    } else {
        match engine.current() {
            LookupOutcome::Found(result) => print_result(result),
            LookupOutcome::NotFound => println!("{}", NOT_FOUND_MSG.yellow()),
            LookupOutcome::NoSelection => println!("{}", NO_SELECTION_MSG.dim()),
        }
    }

    if let Some(message) = status {
        println!("\n{}", message.red());
    }

    let meta = engine.metadata();
    println!("\n---------------------------------------------------------------");
    let footer = format!(
        "{} pairings | average compatibility {} | generated {}",
        meta.total_pairings,
        format_score(meta.average_compatibility),
        meta.generated_at
    );
    println!("{}", footer.dim());

    print!("\n> ");
    let _ = out.flush();
}

fn print_participants(engine: &ViewerEngine) {
    println!("Participants:");
    if engine.participants().is_empty() {
        println!("  (dataset has no pairings)");
        return;
    }
    for (i, name) in engine.participants().iter().enumerate() {
        let tag = if engine.first_selected() == Some(name.as_str()) {
            " [A]"
        } else if engine.second_selected() == Some(name.as_str()) {
            " [B]"
        } else {
            ""
        };
        let entry = format!("  {:>2}. {}{}", i + 1, name, tag);
        if tag.is_empty() {
            println!("{}", entry);
        } else {
            println!("{}", entry.cyan());
        }
    }
}

fn print_result(result: &PairwiseResult) {
    let score = format_score(result.compatibility_score);
    let painted = match score_level(result.compatibility_score) {
        ScoreLevel::Excellent => score.green(),
        ScoreLevel::Good => score.cyan(),
        ScoreLevel::Moderate => score.yellow(),
        ScoreLevel::Low => score.dark_yellow(),
        ScoreLevel::Minimal => score.red(),
    };
    println!("Compatibility: {}", painted.bold());
    println!("{}\n", result.diagnosis);

    for tile in metric_tiles(&result.metrics) {
        print!("  {}: {}", tile.label, tile.value.to_string().bold());
    }
    println!("\n");

    if !result.top_shared_books.is_empty() {
        let tags: Vec<String> = result
            .top_shared_books
            .iter()
            .map(|title| format!("[{}]", title))
            .collect();
        println!("Shared books: {}", tags.join(" "));
    }

    if !result.top_shared_authors.is_empty() {
        println!("Top shared authors:");
        for (i, shared) in result.top_shared_authors.iter().take(5).enumerate() {
            println!(
                "  {}. {} ({}: {}, {}: {}, total {})",
                i + 1,
                shared.author,
                result.person1,
                shared.person1_count,
                result.person2,
                shared.person2_count,
                shared.total
            );
        }
    }

    if !result.shared_tbr_sample.is_empty() {
        println!("Shared to-be-read: {}", result.shared_tbr_sample.join(", "));
    }

    println!("\nScore breakdown:");
    for row in breakdown_rows(&result.score_breakdown) {
        let value = format!("{:>8}", format_fraction(row.fraction));
        if row.fraction < 0.0 {
            println!("  {:<24}{}", row.label, value.red());
        } else {
            println!("  {:<24}{}", row.label, value);
        }
    }
}

fn print_top_matches(engine: &ViewerEngine) {
    println!("Top pairings:");
    for (i, result) in engine.top_matches(10).iter().enumerate() {
        println!(
            "  {:>2}. {} × {}: {}",
            i + 1,
            result.person1,
            result.person2,
            format_score(result.compatibility_score)
        );
    }
}

fn init_logging() {
    // The UI owns the terminal, so diagnostics go to a file instead.
    let _ = std::fs::create_dir_all("target");
    if let Ok(file) = File::create(PathBuf::from("target").join("compat_viewer.log")) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .try_init();
    }
}
