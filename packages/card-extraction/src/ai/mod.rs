//! Vision model implementations.
//!
//! Enable the `openai` feature for the OpenAI implementation.

pub mod openai;

pub use openai::OpenAIVision;
