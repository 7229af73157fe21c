use std::path::Path;

use ora_core::History;
use ora_dice::RollSource;
use ora_oracle::{Generator, GeneratorParams};

pub fn run(
    generator: &str,
    seed: Option<u64>,
    params: &[String],
    history: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let generator = Generator::parse(generator)
        .ok_or_else(|| format!("unknown generator '{generator}', run `ora kinds` to list them"))?;
    let params = GeneratorParams::from_pairs(params).map_err(|e| e.to_string())?;
    let mut source = seed.map_or_else(RollSource::from_entropy, RollSource::seeded);

    let result = generator
        .invoke(&mut source, &params)
        .map_err(|e| e.to_string())?;

    if let Some(path) = history {
        let mut log = if path.exists() {
            History::load(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?
        } else {
            History::new()
        };
        log.append(&result);
        log.save(path)
            .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    }

    if json {
        let out = result.encode().to_json().map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        super::print_result(&result, 0);
    }

    Ok(())
}
