//! The screening criteria record.
//!
//! A fixed-schema value object: every field is always present and carries a
//! documented default, so a record can be produced even from text containing
//! none of the recognized patterns. Percentages appearing as `NN%` in source
//! text are stored as fractions; amounts given in the colloquial `N亿` unit
//! are stored as raw CNY.

use serde::{Deserialize, Serialize};

/// Structured stock-screening parameters extracted from an instruction.
///
/// Construction goes through [`Default`]; extraction overwrites only the
/// fields whose patterns matched. The record has no identity and is never
/// mutated after the extraction pass that built it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningCriteria {
    /// Window start, `HH:MM` 24-hour text.
    pub start_time: String,

    /// Window end, `HH:MM` 24-hour text.
    pub end_time: String,

    /// Minimum large-order net amount, CNY.
    pub large_order_net_amount_min: f64,

    /// Industry ranking cutoff for large-order net amount.
    pub large_order_ranking: Option<u32>,

    /// Industry top-percentage cutoff for large-order net amount, fraction.
    pub large_order_percentage: Option<f64>,

    /// Minimum bid-phase amplitude, percent units.
    pub bid_amplitude_min: f64,

    /// Maximum bid-phase amplitude, percent units.
    pub bid_amplitude_max: f64,

    /// Minimum average price / opening price ratio.
    pub avg_price_ratio_min: f64,

    /// Minimum low price / average price ratio.
    pub low_avg_ratio_min: f64,

    /// Minimum close / high price ratio.
    pub close_high_ratio_min: f64,

    /// Minimum volume ratio.
    pub volume_ratio_min: f64,

    /// Minimum volume-ratio change.
    pub volume_ratio_change_min: f64,

    /// Maximum volume-ratio change.
    pub volume_ratio_change_max: f64,

    /// Maximum recent turnover ratio.
    pub turnover_ratio_max: f64,

    /// Maximum average turnover ratio.
    pub avg_turnover_ratio_max: f64,

    /// Minimum current turnover, fraction.
    pub current_turnover_min: f64,

    /// Maximum current turnover, fraction.
    pub current_turnover_max: f64,

    /// Minimum 10-day vs 20-day average price ratio.
    pub avg_price_ratio_10_20_min: f64,

    /// Maximum amplitude over recent days, percent units.
    pub amplitude_max: f64,

    /// Maximum market capitalization, CNY.
    pub market_cap_max: f64,

    /// Exclude ST-flagged stocks.
    pub exclude_st: bool,

    /// Restrict to main-board stocks.
    pub include_main_board: bool,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            start_time: "09:30".to_string(),
            end_time: "09:33".to_string(),
            large_order_net_amount_min: 1_000_000.0,
            large_order_ranking: Some(15),
            large_order_percentage: Some(0.2),
            bid_amplitude_min: 0.0,
            bid_amplitude_max: 4.0,
            avg_price_ratio_min: 1.003,
            low_avg_ratio_min: 0.985,
            close_high_ratio_min: 0.985,
            volume_ratio_min: 3.0,
            volume_ratio_change_min: 0.01,
            volume_ratio_change_max: 0.33,
            turnover_ratio_max: 0.7,
            avg_turnover_ratio_max: 8.0,
            current_turnover_min: 0.004,
            current_turnover_max: 0.05,
            avg_price_ratio_10_20_min: 0.98,
            amplitude_max: 18.6,
            market_cap_max: 20_000_000_000.0,
            exclude_st: true,
            include_main_board: true,
        }
    }
}
