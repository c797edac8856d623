//! Integration tests for instruction extraction.
//!
//! These tests run a realistic full-length screening instruction through
//! the complete flow: criteria extraction, variables extraction,
//! description rendering, and text patching.

use xuangu_core::{FieldValue, ScreeningCriteria, VariablesMap};
use xuangu_parser::{InstructionParser, describe};

/// A full instruction in the shape the screening UI submits.
const FULL_INSTRUCTION: &str = "今日9点30分至9点33分特大单净额排名行业前15或今日9点30分至9点33分特大单净额排名行业前20%；\
今日竞价分时涨跌幅大于0小于4；今日9点30分至9点33分均价/开盘价大于1.003；量比大于3；\
换手率大于0.4%小于5%；市值小于200亿；非ST；主板";

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn parser() -> InstructionParser {
    InstructionParser::new().expect("default parser should build")
}

/// The full instruction populates every recognized criterion block.
#[test]
#[expect(clippy::float_cmp, reason = "Extraction stores exact parsed values")]
fn test_full_instruction_extraction() {
    let criteria = parser().extract(FULL_INSTRUCTION);

    assert_eq!(criteria.start_time, "09:30");
    assert_eq!(criteria.end_time, "09:33");
    assert_eq!(criteria.large_order_ranking, Some(15));
    assert_eq!(criteria.large_order_percentage, Some(0.2));
    assert_eq!(criteria.bid_amplitude_min, 0.0);
    assert_eq!(criteria.bid_amplitude_max, 4.0);
    assert_eq!(criteria.avg_price_ratio_min, 1.003);
    assert_eq!(criteria.volume_ratio_min, 3.0);
    assert_eq!(criteria.current_turnover_min, 0.004);
    assert_eq!(criteria.current_turnover_max, 0.05);
    assert_eq!(criteria.market_cap_max, 20_000_000_000.0);
    assert!(criteria.exclude_st);
    assert!(criteria.include_main_board);
}

/// Extraction is deterministic: two passes agree field for field.
#[test]
fn test_extraction_determinism() {
    let p = parser();
    assert_eq!(p.extract(FULL_INSTRUCTION), p.extract(FULL_INSTRUCTION));
}

/// Text without any recognized pattern degrades to the default record.
#[test]
fn test_unrecognized_text_yields_defaults() {
    let criteria = parser().extract("明天天气怎么样");
    assert_eq!(criteria, ScreeningCriteria::default());
}

/// The variables map records only what the text states, plus diagnostics.
#[test]
fn test_full_instruction_variables() {
    let variables = parser().extract_variables(FULL_INSTRUCTION);

    assert_eq!(
        variables.get("start_time"),
        Some(&FieldValue::Text("09:30".to_string()))
    );
    assert_eq!(
        variables.get("large_order_ranking"),
        Some(&FieldValue::Integer(15))
    );
    assert_eq!(
        variables.get("market_cap_max"),
        Some(&FieldValue::Number(20_000_000_000.0))
    );
    assert_eq!(variables.get("exclude_st"), Some(&FieldValue::Bool(true)));

    // The instruction repeats its window, so two sub-segments appear.
    assert_eq!(
        variables.get("segment_2_end"),
        Some(&FieldValue::Text("09:33".to_string()))
    );

    // Never-mentioned fields are absent.
    assert!(!variables.contains_key("low_avg_ratio_min"));
}

/// The numbers diagnostic lists each distinct token once, in first-seen
/// order.
#[test]
fn test_numbers_diagnostic_order() {
    let variables = parser().extract_variables("市值小于200亿，量比大于3，再看市值小于200亿");

    assert_eq!(
        variables.get("_numbers"),
        Some(&FieldValue::TextList(vec![
            "200".to_string(),
            "3".to_string()
        ]))
    );
}

/// Rendering a parsed record produces the fixed clause order.
#[test]
fn test_describe_round_trip() {
    let criteria = parser().extract(FULL_INSTRUCTION);
    let description = describe(&criteria);

    assert!(description.starts_with("Time range: 09:30 to 09:33"));
    assert!(description.contains("Large order industry ranking: top 15"));
    assert!(description.contains("Market cap < 200B CNY"));
    assert!(description.ends_with("Main board only"));
}

/// Patching the ranking rewrites the instruction in place; other keys are
/// passthrough.
#[test]
fn test_patch_round_trip() {
    let p = parser();

    let mut changes = VariablesMap::new();
    changes.insert("large_order_ranking".to_string(), FieldValue::Integer(30));
    changes.insert("avg_price_ratio_min".to_string(), FieldValue::Number(1.01));

    let updated = p.patch(FULL_INSTRUCTION, &changes);

    assert!(updated.contains("行业前30"));
    assert!(!updated.contains("行业前15"));
    // The unwired key changed nothing else.
    assert!(updated.contains("均价/开盘价大于1.003"));

    // Re-extracting the patched text reflects the new ranking.
    assert_eq!(p.extract(&updated).large_order_ranking, Some(30));
}
