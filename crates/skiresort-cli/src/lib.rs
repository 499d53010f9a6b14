//! skiresort-cli
//! =============
//!
//! Command-line interface for the `skiresort-core` resort dataset.
//!
//! This crate primarily provides a binary (`skiresort-cli`). The small
//! library target exists so that docs.rs renders this overview. See the
//! README for full usage examples.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! skiresort-cli --help
//! skiresort-cli stats
//! skiresort-cli map --max-price 60 --child-friendly
//! skiresort-cli top Austria --metric total_slopes --limit 5
//! skiresort-cli --json resort Hemsedal
//! ```
//!
//! For programmatic access to the table and its queries, use the
//! [`skiresort-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
