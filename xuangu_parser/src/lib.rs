#![warn(
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
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

//! Extraction engine for Chinese stock-screening instructions.
//!
//! Matches an ordered catalog of lexical patterns against raw instruction
//! text, fills a [`xuangu_core::ScreeningCriteria`] record (defaults where
//! nothing matched), produces the sparse variables map for UI editing,
//! renders criteria back to a description, and patches recognized values
//! back into the original text.

pub mod catalog;
pub mod engine;
pub mod render;

pub use catalog::{CatalogError, CriterionRule, RuleCatalog, default_rules};
pub use engine::InstructionParser;
pub use render::describe;
