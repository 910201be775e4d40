//! # Block Parsing
//!
//! Two-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`split`): the document is cut into blocks on blank
//!    lines; each block is trimmed and empty blocks are discarded
//!
//! 2. **Classification** (`classify`): each block is typed independently from
//!    its own text, by structural pattern, in fixed priority order
//!
//! The `builder` then turns each classified block into an `HtmlNode`, sending
//! its content through inline parsing (code blocks excepted).
//!
//! ## Modules
//!
//! - **`types`**: `BlockType` and the `Block` classification result
//! - **`kinds`**: Block-specific types owning their markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_blocks` segmentation
//! - **`classify`**: `classify` block typing
//! - **`builder`**: `block_to_html_node` per-type conversion
//!
//! ## Key Invariants
//!
//! - Classification depends only on the block's own text
//! - Quote and list checks are all-or-nothing: one non-conforming line demotes
//!   the whole block to a paragraph
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use builder::block_to_html_node;
pub use classify::classify;
pub use split::split_blocks;
pub use types::{Block, BlockType};
