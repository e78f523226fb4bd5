//! Terminal output for the hgsync binary

pub mod json;
pub mod output;
pub mod views;
