//! # iface-core
//!
//! Shared types for ifacemaker.
//!
//! This crate provides the values that flow between the analysis and
//! rendering stages:
//! - [`Method`]: one receiver method extracted from a Go source unit
//! - [`AnalysisResult`]: everything the analyzer collected for one struct
//! - [`RenderLine`] and [`RenderSpec`]: the renderer's input
//! - [`Visibility`]: exported/private classification of Go identifiers

pub mod analysis;
pub mod method;
pub mod render;
pub mod visibility;

pub use analysis::AnalysisResult;
pub use method::Method;
pub use render::{RenderLine, RenderSpec};
pub use visibility::Visibility;
