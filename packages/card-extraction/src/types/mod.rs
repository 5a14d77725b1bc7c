//! Data types for the card extraction library.

pub mod config;
pub mod extraction;
pub mod image;
pub mod location;
pub mod record;
