//! Integration testing module
//!
//! End-to-end tests for the transcript server against a local fake of the
//! upstream endpoints:
//! - Watch page key scrape
//! - Player API track listing
//! - Timedtext download and segmenting
//! - Status and envelope mapping

pub mod fixtures;
