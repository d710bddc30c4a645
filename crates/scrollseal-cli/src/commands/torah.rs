//! Torah command implementation.

use std::fs;

use scrollseal_core::{assemble, CorpusKind};
use scrollseal_corpus::SefariaSource;

use super::shared;
use crate::CommonArgs;

pub fn run(sidrot_path: &str, common: &CommonArgs) -> Result<(), Box<dyn std::error::Error>> {
    let sidrot: Vec<String> = serde_json::from_str(&fs::read_to_string(sidrot_path)?)
        .map_err(|e| format!("invalid sidrot list {}: {}", sidrot_path, e))?;

    let (fetcher, options) = shared::setup(common)?;
    let source = SefariaSource::new(&fetcher);

    let units = source.units(&sidrot)?;
    let manifest = assemble(CorpusKind::Torah, source.profile(), &units, &options)?;

    shared::write_manifest(&manifest, &common.out_dir, "torah_manifest.json")?;
    Ok(())
}
