//! Rendering criteria back to a human-readable description.

use xuangu_core::ScreeningCriteria;

/// Render a criteria record as an English description.
///
/// The time range always comes first; every other clause is emitted only
/// when its field is truthy, so an explicit zero is indistinguishable from
/// "not set" here. Percent-valued fields are shown in percent units,
/// currency in the `亿` (hundred-million) unit.
#[must_use]
pub fn describe(criteria: &ScreeningCriteria) -> String {
    let mut clauses = vec![format!(
        "Time range: {} to {}",
        criteria.start_time, criteria.end_time
    )];

    if let Some(ranking) = criteria.large_order_ranking {
        if ranking > 0 {
            clauses.push(format!("Large order industry ranking: top {ranking}"));
        }
    }

    if let Some(percentage) = criteria.large_order_percentage {
        if percentage > 0.0 {
            clauses.push(format!(
                "Large order industry percentage: top {}%",
                percentage * 100.0
            ));
        }
    }

    clauses.push(format!(
        "Bid amplitude: {}% to {}%",
        criteria.bid_amplitude_min, criteria.bid_amplitude_max
    ));

    if criteria.volume_ratio_min > 0.0 {
        clauses.push(format!("Volume ratio > {}", criteria.volume_ratio_min));
    }

    if criteria.current_turnover_min > 0.0 && criteria.current_turnover_max > 0.0 {
        clauses.push(format!(
            "Turnover rate: {}% to {}%",
            criteria.current_turnover_min * 100.0,
            criteria.current_turnover_max * 100.0
        ));
    }

    if criteria.market_cap_max > 0.0 {
        clauses.push(format!(
            "Market cap < {}B CNY",
            criteria.market_cap_max / 100_000_000.0
        ));
    }

    if criteria.exclude_st {
        clauses.push("Exclude ST stocks".to_string());
    }

    if criteria.include_main_board {
        clauses.push("Main board only".to_string());
    }

    clauses.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_defaults() {
        let description = describe(&ScreeningCriteria::default());

        assert!(description.starts_with("Time range: 09:30 to 09:33"));
        assert_eq!(
            description,
            "Time range: 09:30 to 09:33; \
             Large order industry ranking: top 15; \
             Large order industry percentage: top 20%; \
             Bid amplitude: 0% to 4%; \
             Volume ratio > 3; \
             Turnover rate: 0.4% to 5%; \
             Market cap < 200B CNY; \
             Exclude ST stocks; \
             Main board only"
        );
    }

    #[test]
    fn test_describe_clause_order_is_fixed() {
        let description = describe(&ScreeningCriteria::default());
        let ranking = description
            .find("ranking")
            .unwrap_or(usize::MAX);
        let amplitude = description
            .find("Bid amplitude")
            .unwrap_or(usize::MAX);
        let market_cap = description
            .find("Market cap")
            .unwrap_or(usize::MAX);

        assert!(ranking < amplitude);
        assert!(amplitude < market_cap);
    }

    #[test]
    fn test_describe_zero_volume_ratio_suppressed() {
        // An explicit zero reads as "not set": the clause disappears.
        let criteria = ScreeningCriteria {
            volume_ratio_min: 0.0,
            ..ScreeningCriteria::default()
        };

        assert!(!describe(&criteria).contains("Volume ratio"));
    }

    #[test]
    fn test_describe_absent_ranking_suppressed() {
        let criteria = ScreeningCriteria {
            large_order_ranking: None,
            large_order_percentage: None,
            ..ScreeningCriteria::default()
        };

        let description = describe(&criteria);
        assert!(!description.contains("ranking"));
        assert!(!description.contains("percentage"));
    }

    #[test]
    fn test_describe_flags_off() {
        let criteria = ScreeningCriteria {
            exclude_st: false,
            include_main_board: false,
            ..ScreeningCriteria::default()
        };

        let description = describe(&criteria);
        assert!(!description.contains("Exclude ST"));
        assert!(!description.contains("Main board"));
    }
}
