//! gamegrade-core: scoring engine, catalog extraction, and game-logic checks.
//!
//! This crate defines the game data model, the heuristic scorers and
//! recommendation builder, and the catalog, audit, and check utilities that
//! the gamegrade CLI builds on.

pub mod audit;
pub mod backup;
pub mod catalog;
pub mod checks;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod problems;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod statistics;
