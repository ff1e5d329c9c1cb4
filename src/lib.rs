//! TopsisCore - Multi-criteria ranking service
//!
//! Ranks alternatives described by numeric criteria with the TOPSIS method
//! and optionally emails the ranked table as an HTML report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
