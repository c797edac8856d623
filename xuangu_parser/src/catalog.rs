//! The criterion rule catalog.
//!
//! Each rule pairs an optional trigger substring with a detail regex and a
//! typed binder. Rules are evaluated independently: a missing trigger or a
//! trigger without the expected detail shape silently leaves the
//! corresponding fields at their defaults. Rules can be added without
//! touching their neighbors.

use regex::{Captures, Regex};
use thiserror::Error;
use xuangu_core::{CriterionField, FieldValue};

/// Field/value pairs produced by one rule match.
pub type Bindings = Vec<(CriterionField, FieldValue)>;

/// Converts a detail-regex match into typed field bindings.
///
/// A binder that cannot parse its captures returns no bindings, so
/// pathological text degrades to defaults instead of failing.
pub type Binder = fn(&Captures<'_>) -> Bindings;

/// Error raised when the catalog fails to compile.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A detail pattern is not a valid regex.
    #[error("invalid pattern for rule `{rule}`: {source}")]
    Pattern {
        /// Name of the offending rule.
        rule: &'static str,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Definition of a single criterion rule before compilation.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// Unique rule name, used in logs and errors.
    pub name: &'static str,

    /// Literal substring that gates this rule during criteria extraction.
    /// `None` means the detail pattern alone decides.
    pub trigger: Option<&'static str>,

    /// Detail regex matched against the full text.
    pub pattern: &'static str,

    /// Binder converting captures into field values.
    pub bind: Binder,
}

/// A compiled criterion rule.
#[derive(Debug)]
pub struct CriterionRule {
    /// Unique rule name.
    pub name: &'static str,

    /// Literal trigger substring, if this rule is gated.
    pub trigger: Option<&'static str>,

    /// Compiled detail regex.
    pub detail: Regex,

    /// Binder converting captures into field values.
    pub bind: Binder,
}

impl RuleDef {
    /// Compile this definition into a [`CriterionRule`].
    ///
    /// # Errors
    /// Returns an error if the detail pattern is not a valid regex.
    pub fn build(&self) -> Result<CriterionRule, CatalogError> {
        let detail = Regex::new(self.pattern).map_err(|source| CatalogError::Pattern {
            rule: self.name,
            source,
        })?;

        Ok(CriterionRule {
            name: self.name,
            trigger: self.trigger,
            detail,
            bind: self.bind,
        })
    }
}

/// The fixed, ordered rule catalog.
#[derive(Debug)]
pub struct RuleCatalog {
    rules: Vec<CriterionRule>,
}

impl RuleCatalog {
    /// Compile the default rule set.
    ///
    /// # Errors
    /// Returns an error if any detail pattern fails to compile.
    pub fn new() -> Result<Self, CatalogError> {
        let rules = default_rules()
            .iter()
            .map(RuleDef::build)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// The compiled rules, in catalog order.
    #[must_use]
    pub fn rules(&self) -> &[CriterionRule] {
        &self.rules
    }
}

/// The default rule set, in evaluation order.
#[must_use]
pub fn default_rules() -> Vec<RuleDef> {
    let mut rules = Vec::new();
    rules.extend(large_order_rules());
    rules.extend(session_rules());
    rules.extend(market_rules());
    rules
}

/// Large-order ranking rules.
///
/// Both rules share the `特大单净额排名行业前` trigger; the detail searches
/// run against the full text, so a same-shaped `行业前N%` elsewhere in the
/// instruction is also picked up.
fn large_order_rules() -> Vec<RuleDef> {
    vec![
        RuleDef {
            name: "large_order_ranking",
            trigger: Some("特大单净额排名行业前"),
            pattern: r"行业前(\d+)",
            bind: bind_ranking,
        },
        RuleDef {
            name: "large_order_percentage",
            trigger: Some("特大单净额排名行业前"),
            pattern: r"行业前(\d+(?:\.\d+)?)%",
            bind: bind_percentage,
        },
    ]
}

/// Intraday session rules: bid amplitude, price ratio, volume, turnover.
fn session_rules() -> Vec<RuleDef> {
    vec![
        RuleDef {
            name: "bid_amplitude",
            trigger: Some("竞价分时涨跌幅大于"),
            pattern: r"涨跌幅大于(\d+(?:\.\d+)?)小于(\d+(?:\.\d+)?)",
            bind: bind_bid_amplitude,
        },
        RuleDef {
            name: "avg_price_ratio",
            trigger: Some("均价/开盘价大于"),
            pattern: r"均价/开盘价大于(\d+(?:\.\d+)?)",
            bind: bind_avg_price_ratio,
        },
        RuleDef {
            name: "volume_ratio",
            trigger: Some("量比大于"),
            pattern: r"量比大于(\d+(?:\.\d+)?)",
            bind: bind_volume_ratio,
        },
        RuleDef {
            name: "current_turnover",
            trigger: Some("换手率大于"),
            pattern: r"换手率大于(\d+(?:\.\d+)?)%小于(\d+(?:\.\d+)?)%",
            bind: bind_turnover,
        },
    ]
}

/// Market filter rules.
///
/// The two flag phrases can only confirm the `true` defaults; no negative
/// form exists in the instruction corpus.
fn market_rules() -> Vec<RuleDef> {
    vec![
        RuleDef {
            name: "market_cap",
            trigger: Some("市值小于"),
            pattern: r"市值小于(\d+)亿",
            bind: bind_market_cap,
        },
        RuleDef {
            name: "exclude_st",
            trigger: None,
            pattern: "非ST",
            bind: bind_exclude_st,
        },
        RuleDef {
            name: "include_main_board",
            trigger: None,
            pattern: "主板",
            bind: bind_include_main_board,
        },
    ]
}

fn capture_f64(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse().ok()
}

fn bind_ranking(caps: &Captures<'_>) -> Bindings {
    caps.get(1)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map_or_else(Vec::new, |n| {
            vec![(CriterionField::LargeOrderRanking, FieldValue::Integer(n))]
        })
}

fn bind_percentage(caps: &Captures<'_>) -> Bindings {
    capture_f64(caps, 1).map_or_else(Vec::new, |n| {
        vec![(
            CriterionField::LargeOrderPercentage,
            FieldValue::Number(n / 100.0),
        )]
    })
}

fn bind_bid_amplitude(caps: &Captures<'_>) -> Bindings {
    match (capture_f64(caps, 1), capture_f64(caps, 2)) {
        (Some(min), Some(max)) => vec![
            (CriterionField::BidAmplitudeMin, FieldValue::Number(min)),
            (CriterionField::BidAmplitudeMax, FieldValue::Number(max)),
        ],
        _ => Vec::new(),
    }
}

fn bind_avg_price_ratio(caps: &Captures<'_>) -> Bindings {
    capture_f64(caps, 1).map_or_else(Vec::new, |n| {
        vec![(CriterionField::AvgPriceRatioMin, FieldValue::Number(n))]
    })
}

fn bind_volume_ratio(caps: &Captures<'_>) -> Bindings {
    capture_f64(caps, 1).map_or_else(Vec::new, |n| {
        vec![(CriterionField::VolumeRatioMin, FieldValue::Number(n))]
    })
}

fn bind_turnover(caps: &Captures<'_>) -> Bindings {
    match (capture_f64(caps, 1), capture_f64(caps, 2)) {
        (Some(min), Some(max)) => vec![
            (
                CriterionField::CurrentTurnoverMin,
                FieldValue::Number(min / 100.0),
            ),
            (
                CriterionField::CurrentTurnoverMax,
                FieldValue::Number(max / 100.0),
            ),
        ],
        _ => Vec::new(),
    }
}

fn bind_market_cap(caps: &Captures<'_>) -> Bindings {
    capture_f64(caps, 1).map_or_else(Vec::new, |n| {
        vec![(
            CriterionField::MarketCapMax,
            FieldValue::Number(n * 100_000_000.0),
        )]
    })
}

fn bind_exclude_st(_caps: &Captures<'_>) -> Bindings {
    vec![(CriterionField::ExcludeSt, FieldValue::Bool(true))]
}

fn bind_include_main_board(_caps: &Captures<'_>) -> Bindings {
    vec![(CriterionField::IncludeMainBoard, FieldValue::Bool(true))]
}
