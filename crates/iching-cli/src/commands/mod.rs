pub mod cast;
pub mod check;
pub mod interpret;
pub mod list;
pub mod show;

use colored::Colorize;

use iching_core::{CatalogSource, Hexagram, HexagramCatalog, Reading, TranslationSource};

/// Load the catalog; any failure ends the command.
fn load_catalog(source: &CatalogSource) -> Result<HexagramCatalog, String> {
    HexagramCatalog::load(source).map_err(|e| format!("cannot load hexagrams: {e}"))
}

/// Print a reading, or its JSON form.
fn print_reading(reading: &Reading, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(reading)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if !reading.question.is_empty() {
        println!("  {} {}", "Question:".dimmed(), reading.question);
        println!();
    }

    // Top line is drawn first.
    for (pos, line) in reading.lines.lines().iter().enumerate().rev() {
        let bar = if line.is_changing() {
            line.symbol().yellow().to_string()
        } else {
            line.symbol().to_string()
        };
        println!("  {}  {bar}", pos + 1);
    }
    println!();

    print_hexagram(&reading.hexagram);

    match &reading.next_hexagram {
        Some(next) => {
            let positions: Vec<String> = reading
                .changing_positions()
                .iter()
                .map(|p| (p + 1).to_string())
                .collect();
            println!();
            println!("  {} {}", "Changing lines:".dimmed(), positions.join(", "));
            println!("  {}", "Changing to".bold());
            println!();
            print_hexagram(next);
        }
        None => {
            println!();
            println!("  {}", "No changing lines.".dimmed());
        }
    }

    Ok(())
}

/// Print one hexagram's header, description, and links.
fn print_hexagram(hexagram: &Hexagram) {
    let title = match &hexagram.romanized {
        Some(romanized) => format!("{} ({romanized})", hexagram.name),
        None => hexagram.name.clone(),
    };
    println!("  {} {}. {}", hexagram.glyph, hexagram.number, title.bold());
    if !hexagram.description.is_empty() {
        println!("  {}", hexagram.description);
    }
    for source in TranslationSource::all() {
        println!(
            "  {:<15} {}",
            format!("{source}:"),
            hexagram.translation_url(*source).dimmed()
        );
    }
}
