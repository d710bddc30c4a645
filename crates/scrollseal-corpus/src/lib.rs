//! Corpus text acquisition for scrollseal manifests.
//!
//! This crate is the I/O collaborator of `scrollseal-core`: it fetches
//! canonical verse text over HTTP, caches raw responses on disk, and parses
//! each source's format into ordered, NFC-normalized [`Unit`]s.
//!
//! Sources:
//! - Tanzil's Uthmani Qur'an text (one verse per line, `SURA:AYA|TEXT`)
//! - Sefaria's texts API for Torah sidrot (nested Hebrew verse arrays)
//!
//! [`Unit`]: scrollseal_core::Unit
#![deny(missing_docs)]

/// On-disk cache for raw upstream responses.
pub mod cache;
/// Error types for fetching and parsing.
pub mod error;
/// HTTP fetching with cache-first and offline semantics.
pub mod fetch;
/// Sefaria Torah sidrot source.
pub mod sefaria;
/// Tanzil Qur'an source.
pub mod tanzil;

pub use cache::Cache;
pub use error::FetchError;
pub use fetch::Fetcher;
pub use sefaria::SefariaSource;
pub use tanzil::TanzilSource;
