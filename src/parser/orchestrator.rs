//! Decoder registry and format selection.
//!
//! Decoders are tried in registration order; the first one whose
//! compatibility check accepts the input converts it. Supporting a new
//! capture format means implementing [`RuntimeParser`] and registering it.

use super::v8::V8Parser;
use crate::model::Runtime;
use crate::utils::error::ParseError;
use log::debug;

/// A decoder for one snapshot format
pub trait RuntimeParser {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether this decoder understands `input`
    fn is_compatible(&self, input: &serde_json::Value) -> bool;

    /// Store the raw input and drop any cached runtime
    fn load(&mut self, input: serde_json::Value);

    /// Convert the loaded input, reusing the cached runtime if there is one
    ///
    /// # Errors
    /// * `ParseError::InvalidState` - nothing has been loaded
    /// * `ParseError::Schema` - the input is malformed
    fn convert(&mut self) -> Result<&Runtime, ParseError>;
}

/// Ordered, first-match registry of decoders
pub struct RuntimeParserOrchestrator {
    parsers: Vec<Box<dyn RuntimeParser>>,
}

impl Default for RuntimeParserOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeParserOrchestrator {
    /// Registry with every built-in decoder
    pub fn new() -> Self {
        Self::with_parsers(vec![Box::new(V8Parser::new())])
    }

    pub fn with_parsers(parsers: Vec<Box<dyn RuntimeParser>>) -> Self {
        Self { parsers }
    }

    /// Append a decoder; earlier registrations take precedence
    pub fn register(&mut self, parser: Box<dyn RuntimeParser>) {
        self.parsers.push(parser);
    }

    pub fn parser_names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|parser| parser.name()).collect()
    }

    /// Convert `input` with the first compatible decoder
    ///
    /// **Public** - main entry point for untyped input
    ///
    /// # Returns
    /// `Ok(None)` when no registered decoder accepts the input
    ///
    /// # Errors
    /// Whatever the selected decoder fails with; later decoders are not tried
    pub fn select(&mut self, input: serde_json::Value) -> Result<Option<&Runtime>, ParseError> {
        let registered = self.parsers.len();

        for parser in self.parsers.iter_mut() {
            if !parser.is_compatible(&input) {
                debug!("Parser '{}' rejected input", parser.name());
                continue;
            }

            debug!("Using parser '{}'", parser.name());
            parser.load(input);
            return parser.convert().map(Some);
        }

        debug!("No compatible parser among {} registered", registered);
        Ok(None)
    }
}
