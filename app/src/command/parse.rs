use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use xuangu_config::Config;
use xuangu_core::{ScreeningCriteria, VariablesMap};
use xuangu_parser::{InstructionParser, describe};

/// Input for the parse command.
pub struct ParseInput {
    /// The instruction text.
    pub instruction: String,
    /// Emit the full report as JSON.
    pub json: bool,
}

/// Full result of processing one instruction.
#[derive(Debug, Serialize)]
pub struct ParseReport {
    /// The original instruction.
    pub instruction: String,
    /// The extracted criteria record.
    pub criteria: ScreeningCriteria,
    /// English rendering of the criteria.
    pub description: String,
    /// Fields explicitly found in the text.
    pub variables: VariablesMap,
    /// When this report was produced.
    pub processed_at: DateTime<Utc>,
}

/// Strategy for parsing an instruction into screening criteria.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = ParseInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default();
        let parser = InstructionParser::shared()?;

        let criteria = parser.extract_with(&input.instruction, config.defaults.clone());
        let variables = parser.extract_variables(&input.instruction);
        let description = describe(&criteria);

        info!("Parsed instruction ({} variables found)", variables.len());

        let report = ParseReport {
            instruction: input.instruction,
            criteria,
            description,
            variables,
            processed_at: Utc::now(),
        };

        if input.json || config.output.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report.description);
            for (name, value) in &report.variables {
                println!("  {name} = {}", serde_json::to_string(value)?);
            }
        }

        Ok(())
    }
}
