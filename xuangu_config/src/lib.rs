#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Configuration for the xuangu CLI.
//!
//! A JSON file at `~/xuangu/config.json` holding the user's default
//! criteria template and output preferences.

pub mod schema;

pub use schema::{Config, OutputConfig};
