//! Terminal output for the CLI

pub mod output;
pub mod views;
