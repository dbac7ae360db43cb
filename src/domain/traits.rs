// ============================================================
// Layer 1 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them:
//   - HubSource implements DatasetSource over the
//     HuggingFace Hub
//   - A test fake can implement DatasetSource in memory,
//     so the corpus loader is testable without a network
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system. The dataset repository
// itself (its schema, availability, caching) stays an
// external collaborator behind this seam.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::record::{CodeRecord, Partition};

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce the records of one
/// (language, partition) split of a labeled code dataset.
///
/// Implementations:
///   - HubSource → fetches CodeSearchNet shards from the Hub
///   - (tests)   → in-memory fakes
pub trait DatasetSource {
    /// Load every record of the given split, in the source's
    /// native record order.
    ///
    /// An unsupported language or partition is an error from
    /// the source, propagated unchanged — no retries, no
    /// partial results.
    fn load_split(&self, language: &str, partition: Partition) -> Result<Vec<CodeRecord>>;
}
