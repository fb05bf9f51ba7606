//! Main module for codesplit library functionality
//!
//! Data flows one way:
//!
//! ```text
//! source ──► extraction ──► ArtifactSet ──► preview ──► PreviewDocument
//!                               │
//!                               ├──► artifacts (views, line counts)
//!                               ├──► clipboard
//!                               └──► export (index.html / index.css / index.js)
//! ```
//!
//! [`session::Workspace`] is the caller-side owner of the current artifact set
//! and turns user actions into [`notice::Notice`] values.

pub mod artifacts;
pub mod clipboard;
pub mod error;
pub mod export;
pub mod extraction;
pub mod formats;
pub mod notice;
pub mod preview;
pub mod samples;
pub mod session;
