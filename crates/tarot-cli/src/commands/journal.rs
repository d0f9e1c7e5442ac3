use std::path::Path;

use colored::Colorize;

use super::{GlobalOpts, open_session};

pub fn add(opts: &GlobalOpts, text: &str) -> Result<(), String> {
    let mut session = open_session(opts);
    let added = session
        .add_journal_entry(text)
        .map_err(|e| format!("entry kept for this run but not saved: {e}"))?;
    if !added {
        return Err("journal entry is empty".into());
    }
    println!("  Journal entry saved.");
    Ok(())
}

pub fn list(opts: &GlobalOpts) -> Result<(), String> {
    let session = open_session(opts);
    let entries = session.history().journal();

    if entries.is_empty() {
        println!("  No journal entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!(
            "  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
        for line in entry.text.lines() {
            println!("  {line}");
        }
        println!();
    }
    Ok(())
}

pub fn export(opts: &GlobalOpts, format: &str, output: Option<&Path>) -> Result<(), String> {
    let session = open_session(opts);
    let history = session.history();

    let content = match format {
        "markdown" | "md" => history.export_markdown(),
        "text" | "txt" => history.export_text(),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: markdown, text"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
