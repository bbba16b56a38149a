//! Human-readable renderings of an [`AnalysisReport`](gamegrade_core::report::AnalysisReport).

pub mod html;
pub mod text;
