// Kernel - shared dependencies for the card domain
pub mod deps;

pub use deps::*;
