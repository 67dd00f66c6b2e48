//! Render WOQL JSON trees to builder source

use std::collections::HashMap;

use super::CliError;
use crate::{Dialect, Vocab, WoqlPrinter};

/// Options for the render command
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// The query tree as a JSON string
    pub input: String,
    /// Dialect selector ("js", "python"); unknown values mean JavaScript
    pub dialect: String,
    /// Vocabulary as a JSON object string (alias -> full identifier)
    pub vocab: Option<String>,
}

/// Parse the inputs and render the query tree to source text
pub fn execute_render(options: &RenderOptions) -> Result<String, CliError> {
    let tree: serde_json::Value = serde_json::from_str(&options.input)?;

    let vocab: Vocab = match &options.vocab {
        Some(raw) => serde_json::from_str::<HashMap<String, String>>(raw)?,
        None => HashMap::new(),
    };

    let printer = WoqlPrinter::new(vocab, Dialect::from_selector(&options.dialect));
    Ok(printer.print_json(&tree)?)
}
