use colored::Colorize;

use iching_core::CatalogSource;

pub fn run(source: &CatalogSource) -> Result<(), String> {
    let catalog = super::load_catalog(source)?;
    println!(
        "  {} {} hexagrams with distinct signatures ({source})",
        "OK".green().bold(),
        catalog.all().len()
    );
    Ok(())
}
