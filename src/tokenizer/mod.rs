// ============================================================
// Layer 3 — Source Tokenizer
// ============================================================
// Converts one Python source string into the filtered token
// stream the vocabulary is built from.
//
// Two phases, deliberately separate:
//
//   Phase 1 — validation. The text is parsed as a full Python
//   module and the resulting AST is discarded. Malformed
//   snippets are rejected here, before any token output is
//   trusted.
//
//   Phase 2 — tokenization. The raw text is lexed
//   independently of the parse, producing a categorised token
//   stream. Categories that carry no modeling signal are
//   dropped:
//     - comments
//     - logical (statement-terminating) newlines
//     - non-logical newlines
//     - indent / dedent markers
//     - string literals
//   Everything else (identifiers, keywords, operators,
//   punctuation, numeric literals, the end-of-file marker) is
//   kept as its literal source text, in source order.
//
// Why slice token text from the source span instead of
// re-rendering the token value? Numeric literals keep their
// exact spelling that way (1_000 stays 1_000, 0x1F stays
// 0x1F). The end-of-file marker is the one exception: the
// lexer ends its stream rather than handing out a marker
// token, so the stream is closed with an explicit empty
// string, the same text CPython's ENDMARKER carries.
//
// Reference: rustpython-parser crate documentation

use anyhow::{ensure, Result};
use rustpython_parser::lexer::lex;
use rustpython_parser::{parse, Mode, Tok};

/// The single language this tokenizer understands.
pub const SUPPORTED_LANGUAGE: &str = "python";

/// Tokenize one source string, dropping low-signal categories.
///
/// Fails if `language` is not `"python"` (regardless of the
/// code argument) or if the text is not valid Python. Both are
/// fatal — there is no partial output.
pub fn get_token_stream(code: &str, language: &str) -> Result<Vec<String>> {
    ensure!(
        language == SUPPORTED_LANGUAGE,
        "unsupported language '{language}' (only '{SUPPORTED_LANGUAGE}' is supported)"
    );

    // ── Phase 1: validation ───────────────────────────────────────────────
    // Parse the whole module; the AST itself is not used.
    parse(code, Mode::Module, "<corpus>")
        .map_err(|e| anyhow::anyhow!("syntax error in source snippet: {e}"))?;

    // ── Phase 2: tokenization ─────────────────────────────────────────────
    // Lex the raw text, filter by category, keep literal text.
    let mut tokens = Vec::new();

    for item in lex(code, Mode::Module) {
        let (tok, range) =
            item.map_err(|e| anyhow::anyhow!("lexical error in source snippet: {e:?}"))?;

        if matches!(tok, Tok::EndOfFile) {
            break;
        }
        if is_discarded(&tok) {
            continue;
        }

        let text = &code[range.start().to_usize()..range.end().to_usize()];
        tokens.push(text.to_string());
    }

    // Closing end-of-file marker, kept as the empty string
    tokens.push(String::new());

    tracing::debug!(tokens = tokens.len(), "tokenized snippet");

    Ok(tokens)
}

/// `get_token_stream` with the default language.
pub fn get_python_token_stream(code: &str) -> Result<Vec<String>> {
    get_token_stream(code, SUPPORTED_LANGUAGE)
}

/// The discard set. Category is used only for this decision
/// and then dropped — the output carries plain strings.
fn is_discarded(tok: &Tok) -> bool {
    matches!(
        tok,
        Tok::Comment(_)
            | Tok::Newline
            | Tok::NonLogicalNewline
            | Tok::Indent
            | Tok::Dedent
            | Tok::String { .. }
    )
}
