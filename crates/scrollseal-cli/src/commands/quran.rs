//! Quran command implementation.

use scrollseal_core::{assemble, CorpusKind};
use scrollseal_corpus::TanzilSource;

use super::shared;
use crate::CommonArgs;

pub fn run(common: &CommonArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (fetcher, options) = shared::setup(common)?;
    let source = TanzilSource::new(&fetcher);

    let units = source.units()?;
    let manifest = assemble(CorpusKind::Quran, source.profile(), &units, &options)?;

    shared::write_manifest(&manifest, &common.out_dir, "quran_manifest.json")?;
    Ok(())
}
