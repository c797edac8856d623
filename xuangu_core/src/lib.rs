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

//! Core value objects for the xuangu screening-instruction parser.
//!
//! This crate holds the data model only: the fully-defaulted criteria
//! record, the field-name contract shared with callers, and the dynamic
//! value type carried by the variables map. All behavior lives in
//! `xuangu_parser`.

pub mod criteria;
pub mod field;
pub mod value;

pub use criteria::ScreeningCriteria;
pub use field::CriterionField;
pub use value::{FieldValue, VariablesMap, NUMBERS_KEY, TIMES_KEY};
