use iching_core::{CatalogSource, ReadingConfig, ReadingEngine};

pub fn run(
    source: &CatalogSource,
    question: &str,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(source)?;

    let mut config = ReadingConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut engine = ReadingEngine::new(&catalog, &config);
    let reading = engine
        .conduct_reading(question)
        .map_err(|e| format!("reading failed: {e}"))?;

    super::print_reading(&reading, json)
}
