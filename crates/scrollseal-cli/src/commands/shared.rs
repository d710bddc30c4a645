use std::fs;
use std::path::{Path, PathBuf};

use scrollseal_core::{AssembleOptions, CorpusManifest, EmptyUnitPolicy};
use scrollseal_corpus::{Cache, Fetcher};

use crate::CommonArgs;

/// Builds the fetcher and assembly options from the shared flags.
pub fn setup(common: &CommonArgs) -> Result<(Fetcher, AssembleOptions), Box<dyn std::error::Error>> {
    let cache = Cache::new(&common.cache_dir)?;
    let fetcher = Fetcher::new(cache, common.offline)?;
    let options = AssembleOptions {
        nonce_limit: common.nonce_limit,
        empty_unit: if common.strict_empty {
            EmptyUnitPolicy::Fail
        } else {
            EmptyUnitPolicy::Skip
        },
    };
    Ok((fetcher, options))
}

/// Writes the manifest as pretty-printed UTF-8 JSON and reports the path.
pub fn write_manifest(
    manifest: &CorpusManifest,
    out_dir: &str,
    file_name: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    fs::create_dir_all(out_dir)?;
    let path = Path::new(out_dir).join(file_name);
    let json = serde_json::to_string_pretty(&manifest.to_json())?;
    fs::write(&path, json)?;
    println!("Wrote {}", path.display());
    Ok(path)
}
