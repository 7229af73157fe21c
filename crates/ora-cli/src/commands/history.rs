use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use ora_core::{History, Registry};

pub fn run(file: &Path, format: &str) -> Result<(), String> {
    let history =
        History::load(file).map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let registry = Registry::builtin().map_err(|e| e.to_string())?;

    match format.to_lowercase().as_str() {
        "table" => print_table(&history, &registry),
        "markdown" | "md" => print!("{}", history.export_markdown(&registry)),
        "text" | "txt" => print!("{}", history.export_text(&registry)),
        other => {
            return Err(format!(
                "unknown format '{other}', use: table, markdown, text"
            ));
        }
    }

    Ok(())
}

fn print_table(history: &History, registry: &Registry) {
    if history.is_empty() {
        println!("  No rolls recorded.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Kind", "Label", "Dice", "Total", "Interpretation"]);

    for (i, result) in history.restore(registry).iter().enumerate() {
        let interpretation = match result.interpretation() {
            Some(text) if text.chars().count() > 60 => {
                let cut: String = text.chars().take(57).collect();
                format!("{cut}...")
            }
            Some(text) => text.to_string(),
            None => "-".to_string(),
        };
        table.add_row(vec![
            (i + 1).to_string(),
            result.kind().to_string(),
            result.label().to_string(),
            super::dice_list(result),
            result.raw_total().to_string(),
            interpretation,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rolls", history.len());
}
