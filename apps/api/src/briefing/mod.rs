//! Grow-Pulse briefing generation.
//!
//! Two pipelines: the 7-step body flow (news through final summary) and the
//! 2-step blog-intro flow (title + summary). Prompt templates live in
//! `prompts`, the step sequences and runners in `pipeline`, and the HTTP
//! surface in `handlers`.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
