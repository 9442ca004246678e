//! Transcript assembly
//!
//! Track ranking and the per-request pipeline that turns a video reference
//! into a `TranscriptResult`.

pub mod model;
pub mod pipeline;
pub mod select;

pub use pipeline::{fetch_transcript, TranscriptOutcome, TranscriptRequest};
