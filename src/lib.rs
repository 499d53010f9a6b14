//! Workspace facade: re-exports `skiresort-core` so the demos can be run from
//! the repository root with `cargo run --example <name>`.

pub use skiresort_core::*;
