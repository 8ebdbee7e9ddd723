use crate::config::OutputFormat;
use crate::error::Result;
use crate::form::SubmittedRecord;

/// Render the submitted record for printing after the UI closes.
pub fn format_record(record: &SubmittedRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => Ok(record
            .displayed()
            .into_iter()
            .map(|(field, value)| format!("{}: {}", field.caption(), value))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
