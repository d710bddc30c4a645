use std::collections::BTreeMap;

use serde_json::{json, Value};

use scrollseal_core::{nfc, Unit};

use crate::error::FetchError;
use crate::fetch::Fetcher;

/// Base URL for Tanzil text downloads.
pub const TANZIL_URL: &str = "https://tanzil.net/pub/download/";
/// Uthmani edition file, one verse per line as `SURA:AYA|TEXT`.
pub const QURAN_FILE: &str = "quran-uthmani.txt";

/// Qur'an text source backed by Tanzil's Uthmani edition.
pub struct TanzilSource<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> TanzilSource<'a> {
    /// Creates a source over `fetcher`.
    pub fn new(fetcher: &'a Fetcher) -> Self {
        Self { fetcher }
    }

    /// Fetches the corpus and returns units ordered by sura number.
    pub fn units(&self) -> Result<Vec<Unit>, FetchError> {
        let key = format!("tanzil/{QURAN_FILE}");
        let url = format!("{TANZIL_URL}{QURAN_FILE}");
        let body = String::from_utf8(self.fetcher.get(&key, &url)?)?;
        Ok(parse_uthmani(&body))
    }

    /// Corpus-level profile metadata for the manifest.
    pub fn profile(&self) -> Value {
        json!({
            "tradition": "QURAN",
            "source": "Tanzil",
            "edition": "Uthmani (UTF-8)",
            "url": format!("{TANZIL_URL}{QURAN_FILE}"),
        })
    }
}

/// Parses Tanzil's one-verse-per-line format into per-sura units.
///
/// Lines look like `1:1|بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ`. Blank lines
/// and lines without a `|` separator (Tanzil appends comment lines to the
/// file) are skipped. Verse order within a sura follows file order; units are
/// ordered by numeric sura.
pub fn parse_uthmani(text: &str) -> Vec<Unit> {
    let mut suras: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim();
        let Some((reference, verse)) = line.split_once('|') else {
            continue;
        };
        let Some(sura) = reference.split(':').next() else {
            continue;
        };
        let Ok(sura) = sura.parse::<u32>() else {
            continue;
        };
        suras.entry(sura).or_default().push(nfc(verse));
    }
    suras
        .into_iter()
        .map(|(sura, verses)| Unit::new(format!("Sura {sura}"), verses))
        .collect()
}
