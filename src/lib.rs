//! Codetrend - structural code metrics across git history
//!
//! Mines a tracked file's commit history into a chronological series of
//! structural metrics (function/class/import/line counts), persisted as a
//! JSON artifact alongside a workspace index and project manifest.

pub mod artifacts;
pub mod cli;
pub mod errors;
pub mod evolution;
pub mod git;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod server;
