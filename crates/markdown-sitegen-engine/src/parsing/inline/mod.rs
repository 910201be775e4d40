//! # Inline Parsing
//!
//! Turns a run of block text into typed tokens, then into HTML nodes.
//!
//! ## Architecture
//!
//! Tokenizing is a fixed sequence of passes over a token list. Each pass
//! consumes the previous pass's output and only rewrites tokens that are
//! still `Plain`, so text claimed by an earlier pass is never re-scanned:
//!
//! 1. `**` → Bold, `_` → Italic, `` ` `` → Code (literal delimiter splitting)
//! 2. `![alt](url)` → Image
//! 3. `[text](url)` → Link
//!
//! ## Modules
//!
//! - **`types`**: `TextToken` / `TokenKind`, and token → `HtmlNode` conversion
//! - **`kinds`**: Inline-specific types owning their syntax (Emphasis, Image, Link)
//! - **`parser`**: `tokenize()` and `text_to_children()` entry points

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{text_to_children, tokenize};
pub use types::{TextToken, TokenKind};
