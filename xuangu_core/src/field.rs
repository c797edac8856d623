//! Field-name contract for extractable criteria.
//!
//! The string forms returned by [`CriterionField::as_str`] are exactly the
//! [`crate::ScreeningCriteria`] field names. Callers bind UI controls and
//! patch requests against these strings, so they are stable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A criteria field the extraction engine can populate from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionField {
    /// Window start, `HH:MM`.
    StartTime,
    /// Window end, `HH:MM`.
    EndTime,
    /// Industry ranking cutoff for large-order net amount.
    LargeOrderRanking,
    /// Industry top-percentage cutoff for large-order net amount.
    LargeOrderPercentage,
    /// Minimum bid-phase amplitude.
    BidAmplitudeMin,
    /// Maximum bid-phase amplitude.
    BidAmplitudeMax,
    /// Minimum average price / opening price ratio.
    AvgPriceRatioMin,
    /// Minimum volume ratio.
    VolumeRatioMin,
    /// Minimum current turnover.
    CurrentTurnoverMin,
    /// Maximum current turnover.
    CurrentTurnoverMax,
    /// Maximum market capitalization.
    MarketCapMax,
    /// Exclude ST-flagged stocks.
    ExcludeSt,
    /// Restrict to main-board stocks.
    IncludeMainBoard,
}

impl CriterionField {
    /// Returns the criteria-record field name for this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StartTime => "start_time",
            Self::EndTime => "end_time",
            Self::LargeOrderRanking => "large_order_ranking",
            Self::LargeOrderPercentage => "large_order_percentage",
            Self::BidAmplitudeMin => "bid_amplitude_min",
            Self::BidAmplitudeMax => "bid_amplitude_max",
            Self::AvgPriceRatioMin => "avg_price_ratio_min",
            Self::VolumeRatioMin => "volume_ratio_min",
            Self::CurrentTurnoverMin => "current_turnover_min",
            Self::CurrentTurnoverMax => "current_turnover_max",
            Self::MarketCapMax => "market_cap_max",
            Self::ExcludeSt => "exclude_st",
            Self::IncludeMainBoard => "include_main_board",
        }
    }
}

impl FromStr for CriterionField {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start_time" => Ok(Self::StartTime),
            "end_time" => Ok(Self::EndTime),
            "large_order_ranking" => Ok(Self::LargeOrderRanking),
            "large_order_percentage" => Ok(Self::LargeOrderPercentage),
            "bid_amplitude_min" => Ok(Self::BidAmplitudeMin),
            "bid_amplitude_max" => Ok(Self::BidAmplitudeMax),
            "avg_price_ratio_min" => Ok(Self::AvgPriceRatioMin),
            "volume_ratio_min" => Ok(Self::VolumeRatioMin),
            "current_turnover_min" => Ok(Self::CurrentTurnoverMin),
            "current_turnover_max" => Ok(Self::CurrentTurnoverMax),
            "market_cap_max" => Ok(Self::MarketCapMax),
            "exclude_st" => Ok(Self::ExcludeSt),
            "include_main_board" => Ok(Self::IncludeMainBoard),
            _ => Err("unknown criterion field"),
        }
    }
}
