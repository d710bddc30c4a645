//! Sealed Merkle manifest pipeline for scripture corpora.
//!
//! This crate provides:
//! - NFC canonicalization of verse text prior to hashing
//! - SHA3-256 leaf digests and the duplicate-last-odd-node Merkle fold
//! - The mod-19 nonce seal over each unit root
//! - Manifest assembly for whole corpora (Qur'an chapters, Torah sidrot)
//!
//! Core invariants:
//! - Verse order within a unit determines leaf order and thus the root
//! - The root is a pure function of the ordered leaf digests
//! - A sealed root's big-endian value is always congruent to 0 mod 19
//! - The nonce is the smallest nonnegative integer satisfying the seal
//! - The core performs no I/O; corpus text arrives as in-memory strings
//!
#![deny(missing_docs)]

/// SHA3-256 digest primitives and the mod-19 residue.
pub mod digest;
/// Corpus manifest types and the per-unit assembly pipeline.
pub mod manifest;
/// Merkle root construction over ordered leaf digests.
pub mod merkle;
/// Unicode canonicalization of verse text.
pub mod normalize;
/// Nonce search sealing a root into the zero residue class mod 19.
pub mod seal;

pub use digest::Digest;
pub use manifest::{
    assemble, AssembleError, AssembleOptions, CorpusKind, CorpusManifest, EmptyUnitPolicy, Unit,
    UnitEntry,
};
pub use merkle::root;
pub use normalize::nfc;
pub use seal::{find_nonce, SealError, SealedRoot, DEFAULT_NONCE_LIMIT};
