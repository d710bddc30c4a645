use std::sync::OnceLock;

use regex::Regex;
use serde_json::{json, Value};

use scrollseal_core::{nfc, Unit};

use crate::error::FetchError;
use crate::fetch::Fetcher;

/// Sefaria texts API template. The `vhe` parameter requests the Hebrew
/// version with vowels and cantillation where available.
pub const SEFARIA_TEXTS: &str =
    "https://www.sefaria.org/api/texts/{ref}?lang=he&vhe=Tanach%20with%20Nikud%20and%20Cantillation";

fn hebrew_letters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[\u{0590}-\u{05FF}\u{FB1D}-\u{FB4F}]").expect("invalid regex")
    })
}

/// Torah sidrot source backed by the Sefaria texts API.
pub struct SefariaSource<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> SefariaSource<'a> {
    /// Creates a source over `fetcher`.
    pub fn new(fetcher: &'a Fetcher) -> Self {
        Self { fetcher }
    }

    /// Fetches one unit per reference, preserving list order.
    ///
    /// A reference that yields no Hebrew verses still produces a unit (with
    /// zero verses); empty-unit policy is the assembler's concern.
    pub fn units(&self, refs: &[String]) -> Result<Vec<Unit>, FetchError> {
        refs.iter()
            .map(|r| Ok(Unit::new(r.clone(), self.verses(r)?)))
            .collect()
    }

    /// Fetches and flattens the verses for a single Sefaria reference.
    pub fn verses(&self, reference: &str) -> Result<Vec<String>, FetchError> {
        let key = format!("sefaria/{}.json", reference.replace(' ', "_"));
        let url = SEFARIA_TEXTS.replace("{ref}", reference);
        let body = self.fetcher.get(&key, &url)?;
        let data: Value = serde_json::from_slice(&body)?;
        Ok(extract_verses(&data))
    }

    /// Corpus-level profile metadata for the manifest.
    pub fn profile(&self) -> Value {
        json!({
            "tradition": "TORAH",
            "source": "Sefaria",
            "version_hint": "Hebrew with vowels + cantillation",
            "url_template": SEFARIA_TEXTS,
        })
    }
}

/// Pulls normalized Hebrew verses out of a Sefaria texts response.
///
/// The `text` field may nest arrays arbitrarily (chapters of verses, ranged
/// references); strings are collected depth-first so verse order matches the
/// reading order. Strings without any Hebrew codepoint are dropped.
pub fn extract_verses(response: &Value) -> Vec<String> {
    let mut verses = Vec::new();
    if let Some(text) = response.get("text") {
        flatten(text, &mut verses);
    }
    verses
        .into_iter()
        .filter(|v| hebrew_letters().is_match(v))
        .collect()
}

fn flatten(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten(item, out);
            }
        }
        Value::String(s) => out.push(nfc(s)),
        _ => {}
    }
}
