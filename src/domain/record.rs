// ============================================================
// Layer 1 — Dataset Record Domain Types
// ============================================================
// Represents one record of the CodeSearchNet dataset and the
// fixed set of split names the dataset is partitioned into.
//
// CodeSearchNet ships each split as gzipped JSON-Lines files.
// Every line is one JSON object with many columns; the only
// one the pipeline consumes is `whole_func_string` — the full
// source text of one function. A few cheap columns are kept
// for traceability, everything else is ignored on load.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::Deserialize;

/// A named split of the dataset. The set is fixed — there is
/// no "other" variant, so an unknown split name is rejected at
/// parse time rather than at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Train,
    Validation,
    Test,
}

impl Partition {
    /// The directory/file-name component CodeSearchNet uses on
    /// disk. Note the dataset spells the validation split
    /// `valid` in file names even though the datasets-library
    /// name for it is `validation`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Validation => "valid",
            Partition::Test => "test",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partition {
    type Err = anyhow::Error;

    /// Accepts both the on-disk name (`valid`) and the
    /// datasets-library name (`validation`) for the middle split.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Partition::Train),
            "valid" | "validation" => Ok(Partition::Validation),
            "test" => Ok(Partition::Test),
            other => bail!(
                "unknown partition '{other}' (expected train/validation/test)"
            ),
        }
    }
}

/// One CodeSearchNet record as it appears on the JSON-Lines
/// wire. Only the columns we touch are declared; serde skips
/// the rest (docstrings, token lists, URLs, ...).
///
/// Column naming: the raw shards call the full function text
/// `original_string`; the datasets-library view of the same
/// corpus renames it to `whole_func_string`. Both spellings
/// deserialize into this one field so the loader works against
/// either form of the data.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeRecord {
    /// The full source text of one function — the single
    /// column the corpus loader extracts
    #[serde(alias = "original_string")]
    pub whole_func_string: String,

    /// Qualified function name — kept for traceability
    #[serde(default)]
    pub func_name: String,

    /// Source language of the record (e.g. "python")
    #[serde(default)]
    pub language: String,

    /// Repository the function was mined from
    #[serde(default)]
    pub repo: String,
}

impl CodeRecord {
    /// Create a record from just the function text. Uses
    /// impl Into<String> so callers can pass &str or String —
    /// mainly a convenience for tests and fake sources.
    pub fn new(whole_func_string: impl Into<String>) -> Self {
        Self {
            whole_func_string: whole_func_string.into(),
            func_name: String::new(),
            language: String::new(),
            repo: String::new(),
        }
    }
}
