use iching_core::{CatalogSource, LineSequence, ReadingConfig, ReadingEngine};

pub fn run(source: &CatalogSource, lines: &str, question: &str, json: bool) -> Result<(), String> {
    let lines = LineSequence::parse(lines).map_err(|e| e.to_string())?;
    let catalog = super::load_catalog(source)?;

    let engine = ReadingEngine::new(&catalog, &ReadingConfig::default());
    let reading = engine
        .interpret(question, lines)
        .map_err(|e| format!("reading failed: {e}"))?;

    super::print_reading(&reading, json)
}
