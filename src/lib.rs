// ============================================================
// codesearch-vocab — token vocabulary over CodeSearchNet
// ============================================================
// Builds a bidirectional token↔id vocabulary from a corpus of
// source-code functions. Three independent, composable stages:
//
//   get_code          → fetch one dataset split, keep the
//                       whole_func_string column
//   get_token_stream  → validate + lex one Python snippet,
//                       drop layout/comment/string tokens
//   create_vocab      → distinct tokens, dense ids in
//                       lexicographic order, both directions
//
// Data flows linearly — loader, then tokenizer per document,
// then vocabulary — and composition happens entirely at the
// call site; no stage holds state between calls.
//
// This is a library: no CLI, no persisted state, and no
// tracing subscriber is installed here. Callers own
// presentation of the errors these stages propagate.

#![forbid(unsafe_code)]

/// Pure domain types and the dataset-source trait seam
pub mod domain;

/// Dataset access: the Hub-backed source and the corpus loader
pub mod data;

/// Python validate-then-tokenize token stream
pub mod tokenizer;

/// Deterministic token↔id vocabulary construction
pub mod vocab;

pub use data::hub::HubSource;
pub use data::loader::{get_code, get_python_code};
pub use domain::record::{CodeRecord, Partition};
pub use domain::traits::DatasetSource;
pub use tokenizer::{get_python_token_stream, get_token_stream};
pub use vocab::create_vocab;
