//! CLI command implementations.
//!
//! Every command loads the configured secrets source once and returns the
//! rendered output; printing is left to `main`.

pub mod explain;
pub mod get;
pub mod list;
