//! # Inline Kinds
//!
//! Inline-specific types that own their syntax: delimiter strings for the
//! formatted spans and the bracket/paren patterns for images and links.
//!
//! ## Types
//!
//! - **`Emphasis`**: `**` (bold), `_` (italic), `` ` `` (code), split literally
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)` not preceded by `!`
//!
//! The parser asks these types for their markers and matches; it never
//! hardcodes `**` or `](`.

pub mod emphasis;
pub mod image;
pub mod link;

pub use emphasis::Emphasis;
pub use image::Image;
pub use link::{Link, LinkMatch};
