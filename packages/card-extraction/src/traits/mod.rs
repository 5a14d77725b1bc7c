//! Collaborator traits for the card extraction library.
//!
//! Applications implement these to supply model access and storage.

pub mod store;
pub mod vision;
