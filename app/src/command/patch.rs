use std::str::FromStr;

use anyhow::Context;
use tracing::info;
use xuangu_core::{CriterionField, FieldValue, VariablesMap};
use xuangu_parser::InstructionParser;

/// Input for the patch command.
pub struct PatchInput {
    /// The instruction text.
    pub instruction: String,
    /// `FIELD=VALUE` change pairs.
    pub set: Vec<String>,
}

/// Strategy for patching recognized values back into an instruction.
#[derive(Debug, Clone, Copy)]
pub struct PatchStrategy;

impl super::CommandStrategy for PatchStrategy {
    type Input = PatchInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let parser = InstructionParser::shared()?;

        let mut changes = VariablesMap::new();
        for pair in &input.set {
            let (name, value) = parse_change(pair)?;
            changes.insert(name, value);
        }

        let updated = parser.patch(&input.instruction, &changes);
        info!("Applied {} change(s)", changes.len());
        println!("{updated}");

        Ok(())
    }
}

/// Split a `FIELD=VALUE` pair and type its value.
///
/// The field must be one of the recognized criteria field names; the value
/// is tried as integer, then number, then boolean, then kept as text.
fn parse_change(pair: &str) -> anyhow::Result<(String, FieldValue)> {
    let (name, raw) = pair
        .split_once('=')
        .with_context(|| format!("expected FIELD=VALUE, got `{pair}`"))?;

    CriterionField::from_str(name)
        .map_err(|e| anyhow::anyhow!("{e}: `{name}`"))?;

    let value = raw.parse::<u32>().map_or_else(
        |_| {
            raw.parse::<f64>().map_or_else(
                |_| {
                    raw.parse::<bool>()
                        .map_or_else(|_| FieldValue::Text(raw.to_string()), FieldValue::Bool)
                },
                FieldValue::Number,
            )
        },
        FieldValue::Integer,
    );

    Ok((name.to_string(), value))
}
