//! # HTML Node Tree
//!
//! The output representation shared by inline and block conversion.
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode` (leaf / parent sum type) with `render()`, plus the
//!   validated `NodeParts` construction path and its `NodeError`
//! - **`attributes`**: `Attributes`, an insertion-ordered attribute list

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, NodeError, NodeParts};
