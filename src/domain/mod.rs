// ============================================================
// Layer 1 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits that define the core
// concepts of the pipeline.
//
// Rules for this layer:
//   - NO network or file I/O
//   - NO parsing or tokenization logic
//   - Only plain data types and the trait seams other
//     layers implement
//
// Why keep this layer pure?
//   - Easy to unit test (no network needed)
//   - Easy to swap sources (just implement the trait)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A single CodeSearchNet record plus the split-name enum
pub mod record;

// Core abstractions (traits) that the data layer implements
pub mod traits;
