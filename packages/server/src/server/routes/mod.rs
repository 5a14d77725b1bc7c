// HTTP routes
pub mod health;
pub mod info;

pub use health::*;
pub use info::*;
