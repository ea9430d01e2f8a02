use comfy_table::{ContentArrangement, Table};

use iching_core::CatalogSource;

pub fn run(source: &CatalogSource) -> Result<(), String> {
    let catalog = super::load_catalog(source)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "", "Name", "Romanized", "Lines"]);

    for hexagram in catalog.all() {
        table.add_row(vec![
            hexagram.number.to_string(),
            hexagram.glyph.to_string(),
            hexagram.name.clone(),
            hexagram.romanized.clone().unwrap_or_else(|| "—".to_string()),
            format!("{:06b}", hexagram.signature.bits()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", catalog.all().len());

    Ok(())
}
