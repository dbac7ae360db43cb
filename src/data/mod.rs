// ============================================================
// Layer 2 — Data Pipeline
// ============================================================
// Everything between the external dataset repository and the
// in-memory corpus of raw function strings.
//
// The pipeline flows in this order:
//
//   HuggingFace Hub (gzipped JSON-Lines shards)
//       │
//       ▼
//   HubSource         → resolves, caches and decodes shards
//       │               into CodeRecord values
//       ▼
//   get_code          → extracts the whole_func_string column
//       │
//       ▼
//   Vec<String>       → raw documents, ready for tokenization
//
// Each module is responsible for exactly one step, so each
// step is independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Fetches CodeSearchNet shards from the HuggingFace Hub
pub mod hub;

/// Extracts the function-text column from a loaded split
pub mod loader;
