//! The instruction parser.
//!
//! Stateless across calls: every extraction builds a fresh criteria record
//! and variables map. The only process-wide state is the compiled pattern
//! catalog, which is read-only after initialization, so a single parser can
//! be shared freely between threads.

use once_cell::sync::OnceCell;
use regex::{NoExpand, Regex};
use tracing::debug;
use xuangu_core::{
    CriterionField, FieldValue, NUMBERS_KEY, ScreeningCriteria, TIMES_KEY, VariablesMap,
};

use crate::catalog::{CatalogError, RuleCatalog};

/// `HH点MM分` time token.
const TIME_TOKEN: &str = r"(\d+)点(\d+)分";

/// Bare numeric token: optional-fraction decimal, no sign or exponent.
const NUMBER_TOKEN: &str = r"\d+(?:\.\d+)?";

/// `行业前N` occurrence rewritten by [`InstructionParser::patch`].
const RANKING_TOKEN: &str = r"行业前\d+";

static SHARED: OnceCell<InstructionParser> = OnceCell::new();

/// Extracts structured screening criteria from Chinese instruction text.
#[derive(Debug)]
pub struct InstructionParser {
    catalog: RuleCatalog,
    time_token: Regex,
    number_token: Regex,
    ranking_token: Regex,
}

impl InstructionParser {
    /// Build a parser with the default rule catalog.
    ///
    /// # Errors
    /// Returns an error if any pattern fails to compile.
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: RuleCatalog::new()?,
            time_token: compile("time_window", TIME_TOKEN)?,
            number_token: compile("number_token", NUMBER_TOKEN)?,
            ranking_token: compile("ranking_patch", RANKING_TOKEN)?,
        })
    }

    /// The process-wide parser instance, compiled on first use.
    ///
    /// # Errors
    /// Returns an error if the catalog fails to compile.
    pub fn shared() -> Result<&'static Self, CatalogError> {
        SHARED.get_or_try_init(Self::new)
    }

    /// Extract a fully-populated criteria record from instruction text.
    ///
    /// Total: text containing none of the recognized patterns yields the
    /// all-default record.
    #[must_use]
    pub fn extract(&self, text: &str) -> ScreeningCriteria {
        self.extract_with(text, ScreeningCriteria::default())
    }

    /// Extract into a caller-supplied base record.
    ///
    /// Matched patterns overwrite the base; everything else is left as the
    /// caller configured it.
    #[must_use]
    pub fn extract_with(&self, text: &str, mut criteria: ScreeningCriteria) -> ScreeningCriteria {
        let times = self.times(text);
        if times.len() >= 2 {
            criteria.start_time.clone_from(&times[0]);
            criteria.end_time.clone_from(&times[1]);
        }

        for rule in self.catalog.rules() {
            if let Some(trigger) = rule.trigger {
                if !text.contains(trigger) {
                    continue;
                }
            }

            if let Some(caps) = rule.detail.captures(text) {
                for (field, value) in (rule.bind)(&caps) {
                    debug!(rule = rule.name, field = field.as_str(), "criterion matched");
                    apply(&mut criteria, field, &value);
                }
            }
        }

        criteria
    }

    /// Extract the sparse variables map for UI editing and auto-fill.
    ///
    /// Unlike [`Self::extract`], detail patterns run without their trigger
    /// gates here: the map feeds an editor that prefers over-capture to
    /// under-capture. `_times` lists every time token, `_numbers` every
    /// distinct numeric token in first-seen order.
    #[must_use]
    pub fn extract_variables(&self, text: &str) -> VariablesMap {
        let mut variables = VariablesMap::new();

        let times = self.times(text);
        if !times.is_empty() {
            if times.len() >= 2 {
                variables
                    .entry(CriterionField::StartTime.as_str().to_string())
                    .or_insert_with(|| FieldValue::Text(times[0].clone()));
                variables
                    .entry(CriterionField::EndTime.as_str().to_string())
                    .or_insert_with(|| FieldValue::Text(times[1].clone()));
            }

            // Four or more tokens describe two sub-windows.
            if times.len() >= 4 {
                variables.insert(
                    "segment_1_start".to_string(),
                    FieldValue::Text(times[0].clone()),
                );
                variables.insert(
                    "segment_1_end".to_string(),
                    FieldValue::Text(times[1].clone()),
                );
                variables.insert(
                    "segment_2_start".to_string(),
                    FieldValue::Text(times[2].clone()),
                );
                variables.insert(
                    "segment_2_end".to_string(),
                    FieldValue::Text(times[3].clone()),
                );
            }

            variables.insert(TIMES_KEY.to_string(), FieldValue::TextList(times));
        }

        for rule in self.catalog.rules() {
            if let Some(caps) = rule.detail.captures(text) {
                for (field, value) in (rule.bind)(&caps) {
                    variables.insert(field.as_str().to_string(), value);
                }
            }
        }

        let mut numbers: Vec<String> = Vec::new();
        for token in self.number_token.find_iter(text) {
            if !numbers.iter().any(|n| n == token.as_str()) {
                numbers.push(token.as_str().to_string());
            }
        }
        if !numbers.is_empty() {
            variables.insert(NUMBERS_KEY.to_string(), FieldValue::TextList(numbers));
        }

        variables
    }

    /// Patch recognized values back into the original instruction text.
    ///
    /// Only `large_order_ranking` is wired: every `行业前N` occurrence is
    /// replaced with the new value. Other keys are accepted and ignored, so
    /// the call is a no-op passthrough for them.
    #[must_use]
    pub fn patch(&self, text: &str, changes: &VariablesMap) -> String {
        let mut updated = text.to_string();

        if let Some(value) = changes.get(CriterionField::LargeOrderRanking.as_str()) {
            if let Some(ranking) = ranking_literal(value) {
                let replacement = format!("行业前{ranking}");
                updated = self
                    .ranking_token
                    .replace_all(&updated, NoExpand(&replacement))
                    .into_owned();
            }
        }

        updated
    }

    /// All `HH点MM分` tokens in the text, zero-padded and `:`-joined, in
    /// order of appearance.
    fn times(&self, text: &str) -> Vec<String> {
        self.time_token
            .captures_iter(text)
            .filter_map(|caps| {
                let hour = caps.get(1)?.as_str();
                let minute = caps.get(2)?.as_str();
                Some(format!("{hour:0>2}:{minute:0>2}"))
            })
            .collect()
    }
}

fn compile(rule: &'static str, pattern: &str) -> Result<Regex, CatalogError> {
    Regex::new(pattern).map_err(|source| CatalogError::Pattern { rule, source })
}

/// Render a patch value as the digits inserted after `行业前`.
#[expect(
    clippy::float_cmp,
    clippy::cast_sign_loss,
    reason = "integral check is an exact comparison and guards the cast"
)]
fn ranking_literal(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Integer(n) => Some(n.to_string()),
        FieldValue::Number(n) if n.fract() == 0.0 && *n >= 0.0 => Some(format!("{}", *n as u64)),
        FieldValue::Number(n) => Some(n.to_string()),
        FieldValue::Text(s) => Some(s.clone()),
        FieldValue::Bool(_) | FieldValue::TextList(_) => None,
    }
}

/// Overwrite one criteria field from a matched binding.
fn apply(criteria: &mut ScreeningCriteria, field: CriterionField, value: &FieldValue) {
    match field {
        CriterionField::StartTime => {
            if let Some(t) = value.as_text() {
                criteria.start_time = t.to_string();
            }
        }
        CriterionField::EndTime => {
            if let Some(t) = value.as_text() {
                criteria.end_time = t.to_string();
            }
        }
        CriterionField::LargeOrderRanking => {
            if let FieldValue::Integer(n) = value {
                criteria.large_order_ranking = Some(*n);
            }
        }
        CriterionField::LargeOrderPercentage => {
            if let Some(n) = value.as_f64() {
                criteria.large_order_percentage = Some(n);
            }
        }
        CriterionField::BidAmplitudeMin => {
            if let Some(n) = value.as_f64() {
                criteria.bid_amplitude_min = n;
            }
        }
        CriterionField::BidAmplitudeMax => {
            if let Some(n) = value.as_f64() {
                criteria.bid_amplitude_max = n;
            }
        }
        CriterionField::AvgPriceRatioMin => {
            if let Some(n) = value.as_f64() {
                criteria.avg_price_ratio_min = n;
            }
        }
        CriterionField::VolumeRatioMin => {
            if let Some(n) = value.as_f64() {
                criteria.volume_ratio_min = n;
            }
        }
        CriterionField::CurrentTurnoverMin => {
            if let Some(n) = value.as_f64() {
                criteria.current_turnover_min = n;
            }
        }
        CriterionField::CurrentTurnoverMax => {
            if let Some(n) = value.as_f64() {
                criteria.current_turnover_max = n;
            }
        }
        CriterionField::MarketCapMax => {
            if let Some(n) = value.as_f64() {
                criteria.market_cap_max = n;
            }
        }
        CriterionField::ExcludeSt => {
            if let Some(b) = value.as_bool() {
                criteria.exclude_st = b;
            }
        }
        CriterionField::IncludeMainBoard => {
            if let Some(b) = value.as_bool() {
                criteria.include_main_board = b;
            }
        }
    }
}
