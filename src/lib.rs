//! # codesplit
//!
//! Separates a combined HTML document into its three artifacts: structural
//! markup, style rules and behavior code, and recomposes them into a
//! self-contained preview document.
//!
//! The library lives under [`split`]; the most used items are re-exported here
//! for the front-ends (`codesplit-cli`, `codesplit-viewer`).

pub mod split;

pub use split::artifacts::{line_count, ArtifactKind, ArtifactSet, ArtifactView};
pub use split::error::SplitError;
pub use split::extraction::{extract, extract_blocks, find_blocks, Block, BlockKind, Extraction};
pub use split::notice::{Notice, Severity};
pub use split::preview::{compose, PreviewDocument};
pub use split::session::Workspace;
