//! Run a translation from CLI options

use super::CliError;
use crate::{InputFormat, translate_with};

/// Options for the translate command
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// The document to translate
    pub input: Option<String>,
    /// Syntax of the document
    pub format: InputFormat,
    /// Return the constants table instead of the translated document
    pub dump_constants: bool,
}

/// Result of a translate operation
#[derive(Debug)]
pub enum TranslateResult {
    /// Translated output lines
    Lines(Vec<String>),
    /// Declared constants as a JSON object
    Constants(serde_json::Value),
}

/// Execute a translation
pub fn execute_translate(options: &TranslateOptions) -> Result<TranslateResult, CliError> {
    let input = options.input.as_ref().ok_or(CliError::NoInput)?;

    let parser = options.format.parser();
    let translation = translate_with(input, parser.as_ref())?;

    if options.dump_constants {
        return Ok(TranslateResult::Constants(translation.constants.to_json()));
    }
    Ok(TranslateResult::Lines(translation.lines))
}
