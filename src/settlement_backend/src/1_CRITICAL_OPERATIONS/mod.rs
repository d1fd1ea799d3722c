//! Critical operations - settlement orchestration (highest security)

pub mod settlement;
