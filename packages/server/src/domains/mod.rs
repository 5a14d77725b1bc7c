// Business domains
pub mod cards;
