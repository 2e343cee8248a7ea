//! Semantic pathway model types.
//!
//! This module contains the semantic representation of a pathway figure: the
//! node set with fixed author-space positions and visual definitions, and the
//! directed, attributed interaction set. The model is fully declarative —
//! figures author it as constants — and is consumed by the structure, layout,
//! and export stages.
//!
//! # Pipeline Position
//!
//! ```text
//! Figure constants (figures module)
//!     ↓
//! Semantic Model (these types)
//!     ↓ structure
//! Validated graph (PathwayGraph)
//!     ↓ layout
//! Positioned markers (Layout)
//!     ↓ export
//! SVG
//! ```

mod element;
mod pathway;

pub use element::*;
pub use pathway::*;
