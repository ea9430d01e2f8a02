use colored::Colorize;

use iching_core::{CatalogSource, Hexagram, HexagramCatalog};

pub fn run(source: &CatalogSource, query: &str) -> Result<(), String> {
    let catalog = super::load_catalog(source)?;
    let hexagram = resolve(&catalog, query)?;

    super::print_hexagram(hexagram);
    println!();

    // Top line is drawn first.
    for (pos, polarity) in hexagram.signature.polarities().iter().enumerate().rev() {
        let bar = if polarity.is_yang() { "━━━━━━━" } else { "━━━ ━━━" };
        println!("  {}  {bar}", pos + 1);
    }
    println!();
    println!("  {} {}", "signature:".dimmed(), hexagram.signature);

    Ok(())
}

fn resolve<'c>(catalog: &'c HexagramCatalog, query: &str) -> Result<&'c Hexagram, String> {
    if let Ok(number) = query.trim().parse::<u32>() {
        return catalog.by_number(number).map_err(|e| e.to_string());
    }

    if let Some(hexagram) = catalog.find_by_name(query) {
        return Ok(hexagram);
    }

    let suggestions: Vec<String> = catalog
        .suggest(query, 3)
        .iter()
        .map(|h| format!("{} ({})", h.name, h.number))
        .collect();
    if suggestions.is_empty() {
        Err(format!("hexagram not found: \"{query}\""))
    } else {
        Err(format!(
            "hexagram not found: \"{query}\". Did you mean: {}?",
            suggestions.join(", ")
        ))
    }
}
