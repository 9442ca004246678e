//! Subtitle parsing module
//!
//! This module turns downloaded WebVTT caption text into transcript segments:
//! - Lenient cue timestamp parsing
//! - Cue block scanning with markup stripping and whitespace normalization

pub mod timestamp;
pub mod webvtt;

pub use webvtt::{parse_segments, Segment};
