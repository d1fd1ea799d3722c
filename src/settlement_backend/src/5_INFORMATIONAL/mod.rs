//! Informational - display views, no state mutation

pub mod display;
