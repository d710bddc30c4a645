use serde_json::{json, Value};
use thiserror::Error;

use crate::digest::Digest;
use crate::merkle;
use crate::seal::{self, SealError};

/// A named, ordered group of verses (a Qur'an chapter or a Torah sidra).
///
/// Verses are expected to be NFC-normalized already (see
/// [`crate::normalize::nfc`]); verse order is significant and determines the
/// unit's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Unit name, e.g. `Sura 1` or a Sefaria reference string.
    pub name: String,
    /// Ordered, normalized verse text.
    pub verses: Vec<String>,
}

impl Unit {
    /// Constructs a unit from a name and ordered verses.
    pub fn new(name: impl Into<String>, verses: Vec<String>) -> Self {
        Self {
            name: name.into(),
            verses,
        }
    }
}

/// One sealed unit in a corpus manifest.
///
/// All digests are lowercase hex, 64 characters. `sealed_root_mod19` is
/// always 0 by construction of the seal; it is carried so readers can check
/// the invariant without recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitEntry {
    /// Unit name.
    pub name: String,
    /// Number of verses hashed into the root.
    pub verse_count: usize,
    /// Leaf digests in verse order.
    pub verse_hashes_hex: Vec<String>,
    /// Merkle root of the leaf digests.
    pub root_hex: String,
    /// Sealing nonce.
    pub nonce: u64,
    /// `Hash(root || nonce_be8)`.
    pub sealed_root_hex: String,
    /// Residue of the sealed digest mod 19 (always 0).
    pub sealed_root_mod19: u8,
}

/// Which corpus a manifest describes; dictates the output vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusKind {
    /// Qur'an chapters: `chapters` / `chapter_root_hex`.
    Quran,
    /// Torah sidrot: `sidrot` / `sidra_root_hex`.
    Torah,
}

impl CorpusKind {
    /// JSON key holding the list of unit entries.
    pub fn units_key(&self) -> &'static str {
        match self {
            CorpusKind::Quran => "chapters",
            CorpusKind::Torah => "sidrot",
        }
    }

    /// JSON key holding each unit's root digest.
    pub fn root_key(&self) -> &'static str {
        match self {
            CorpusKind::Quran => "chapter_root_hex",
            CorpusKind::Torah => "sidra_root_hex",
        }
    }
}

/// A sealed manifest for one corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusManifest {
    /// Corpus kind (drives the serialized vocabulary).
    pub kind: CorpusKind,
    /// Corpus-level profile metadata (source, edition, URLs).
    pub profile: Value,
    /// Sealed entries in input unit order.
    pub entries: Vec<UnitEntry>,
}

impl CorpusManifest {
    /// Serializes the manifest to its wire JSON shape.
    pub fn to_json(&self) -> Value {
        let entries: Vec<Value> = self
            .entries
            .iter()
            .map(|e| {
                json!({
                    "name": e.name,
                    "verse_count": e.verse_count,
                    "verse_hashes_hex": e.verse_hashes_hex,
                    (self.kind.root_key()): e.root_hex,
                    "nonce_uint64": e.nonce,
                    "sealed_root_hex": e.sealed_root_hex,
                    "sealed_root_mod19": e.sealed_root_mod19,
                })
            })
            .collect();
        json!({
            "profile": self.profile,
            (self.kind.units_key()): entries,
        })
    }
}

/// What to do with a unit that yields zero verses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyUnitPolicy {
    /// Log a warning and omit the unit from the manifest (default).
    Skip,
    /// Fail the whole assembly.
    Fail,
}

/// Options controlling manifest assembly.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Exclusive upper bound for the per-unit nonce search.
    pub nonce_limit: u64,
    /// Empty-unit handling.
    pub empty_unit: EmptyUnitPolicy,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            nonce_limit: seal::DEFAULT_NONCE_LIMIT,
            empty_unit: EmptyUnitPolicy::Skip,
        }
    }
}

/// Errors that can occur during manifest assembly.
#[derive(Error, Debug)]
pub enum AssembleError {
    /// The nonce search for a unit's root was exhausted.
    ///
    /// Fatal: a missing sealed entry would break the mod-19 invariant the
    /// manifest advertises, so assembly never skips over this.
    #[error("sealing unit {name:?} failed: {source}")]
    Seal {
        /// Name of the unit whose seal failed.
        name: String,
        /// The underlying exhaustion error.
        source: SealError,
    },
    /// A unit yielded zero verses under [`EmptyUnitPolicy::Fail`].
    #[error("unit {name:?} has no verses")]
    EmptyUnit {
        /// Name of the empty unit.
        name: String,
    },
}

/// Seals one unit: leaf digests, Merkle root, nonce seal, packaged entry.
pub fn seal_unit(unit: &Unit, nonce_limit: u64) -> Result<UnitEntry, SealError> {
    let leaves: Vec<Digest> = unit.verses.iter().map(|v| Digest::of_verse(v)).collect();
    let root = merkle::root(&leaves);
    let sealed = seal::find_nonce(&root, nonce_limit)?;
    Ok(UnitEntry {
        name: unit.name.clone(),
        verse_count: unit.verses.len(),
        verse_hashes_hex: leaves.iter().map(Digest::to_hex).collect(),
        root_hex: root.to_hex(),
        nonce: sealed.nonce,
        sealed_root_hex: sealed.digest.to_hex(),
        sealed_root_mod19: sealed.digest.mod19(),
    })
}

/// Assembles a corpus manifest from ordered units.
///
/// Entries preserve input unit order. Empty units are skipped with a warning
/// or fail the build, per `options.empty_unit`. Seal exhaustion is always
/// fatal.
pub fn assemble(
    kind: CorpusKind,
    profile: Value,
    units: &[Unit],
    options: &AssembleOptions,
) -> Result<CorpusManifest, AssembleError> {
    let mut entries = Vec::with_capacity(units.len());
    for unit in units {
        if unit.verses.is_empty() {
            match options.empty_unit {
                EmptyUnitPolicy::Skip => {
                    tracing::warn!(unit = %unit.name, "no verses retrieved; skipping unit");
                    continue;
                }
                EmptyUnitPolicy::Fail => {
                    return Err(AssembleError::EmptyUnit {
                        name: unit.name.clone(),
                    });
                }
            }
        }
        let entry = seal_unit(unit, options.nonce_limit).map_err(|source| AssembleError::Seal {
            name: unit.name.clone(),
            source,
        })?;
        tracing::debug!(
            unit = %entry.name,
            verses = entry.verse_count,
            nonce = entry.nonce,
            "sealed unit"
        );
        entries.push(entry);
    }
    Ok(CorpusManifest {
        kind,
        profile,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_vocabulary_follows_corpus_kind() {
        assert_eq!(CorpusKind::Quran.units_key(), "chapters");
        assert_eq!(CorpusKind::Quran.root_key(), "chapter_root_hex");
        assert_eq!(CorpusKind::Torah.units_key(), "sidrot");
        assert_eq!(CorpusKind::Torah.root_key(), "sidra_root_hex");
    }

    #[test]
    fn seal_unit_packages_the_pipeline() {
        let unit = Unit::new(
            "Sura 1",
            vec!["بِسْمِ اللَّهِ".to_string(), "الرَّحْمَٰنِ".to_string()],
        );
        let entry = seal_unit(&unit, seal::DEFAULT_NONCE_LIMIT).unwrap();

        assert_eq!(entry.verse_count, 2);
        assert_eq!(entry.verse_hashes_hex.len(), 2);
        assert_eq!(entry.sealed_root_mod19, 0);

        let h0 = Digest::of_verse(&unit.verses[0]);
        let h1 = Digest::of_verse(&unit.verses[1]);
        assert_eq!(entry.verse_hashes_hex[0], h0.to_hex());
        assert_eq!(entry.root_hex, Digest::of_pair(&h0, &h1).to_hex());
    }

    #[test]
    fn empty_unit_is_skipped_by_default() {
        let units = vec![
            Unit::new("Genesis 1:1-2:3", vec!["בְּרֵאשִׁית".to_string()]),
            Unit::new("Empty ref", vec![]),
        ];
        let manifest = assemble(
            CorpusKind::Torah,
            json!({"tradition": "TORAH"}),
            &units,
            &AssembleOptions::default(),
        )
        .unwrap();
        assert_eq!(manifest.entries.len(), 1);
        assert_eq!(manifest.entries[0].name, "Genesis 1:1-2:3");
    }

    #[test]
    fn empty_unit_fails_under_strict_policy() {
        let units = vec![Unit::new("Empty ref", vec![])];
        let options = AssembleOptions {
            empty_unit: EmptyUnitPolicy::Fail,
            ..Default::default()
        };
        let err = assemble(CorpusKind::Torah, json!({}), &units, &options).unwrap_err();
        assert!(matches!(err, AssembleError::EmptyUnit { name } if name == "Empty ref"));
    }

    #[test]
    fn seal_exhaustion_is_fatal() {
        // limit 0 guarantees exhaustion regardless of the root
        let units = vec![Unit::new("Sura 1", vec!["verse".to_string()])];
        let options = AssembleOptions {
            nonce_limit: 0,
            ..Default::default()
        };
        let err = assemble(CorpusKind::Quran, json!({}), &units, &options).unwrap_err();
        assert!(matches!(err, AssembleError::Seal { name, .. } if name == "Sura 1"));
    }

    #[test]
    fn manifest_json_matches_wire_shape() {
        let units = vec![Unit::new("Sura 1", vec!["آية".to_string()])];
        let manifest = assemble(
            CorpusKind::Quran,
            json!({"tradition": "QURAN", "source": "Tanzil"}),
            &units,
            &AssembleOptions::default(),
        )
        .unwrap();
        let value = manifest.to_json();

        assert_eq!(value["profile"]["tradition"], "QURAN");
        let chapters = value["chapters"].as_array().unwrap();
        assert_eq!(chapters.len(), 1);
        let entry = &chapters[0];
        assert_eq!(entry["name"], "Sura 1");
        assert_eq!(entry["verse_count"], 1);
        assert_eq!(entry["sealed_root_mod19"], 0);
        assert_eq!(entry["verse_hashes_hex"].as_array().unwrap().len(), 1);
        assert_eq!(entry["chapter_root_hex"].as_str().unwrap().len(), 64);
        assert_eq!(entry["sealed_root_hex"].as_str().unwrap().len(), 64);
        assert!(entry["nonce_uint64"].is_u64());
        assert!(entry.get("sidra_root_hex").is_none());
    }

    #[test]
    fn entries_preserve_unit_order() {
        let units: Vec<Unit> = (1..=4)
            .map(|i| Unit::new(format!("Sura {i}"), vec![format!("verse {i}")]))
            .collect();
        let manifest = assemble(
            CorpusKind::Quran,
            json!({}),
            &units,
            &AssembleOptions::default(),
        )
        .unwrap();
        let names: Vec<&str> = manifest.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Sura 1", "Sura 2", "Sura 3", "Sura 4"]);
    }
}
