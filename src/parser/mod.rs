//! Heap snapshot parsing.
//!
//! This module handles:
//! - Deserializing the self-describing V8 snapshot schema
//! - Decoding flat node/edge/trace arrays into the runtime graph
//! - Selecting a decoder for an unknown input

pub mod layout;
pub mod orchestrator;
pub mod schema;
pub mod v8;

// Re-export main types
pub use orchestrator::{RuntimeParser, RuntimeParserOrchestrator};
pub use schema::{TraceFunctionInfo, TraceValue, V8RuntimeSchema};
pub use v8::{decode_snapshot, V8Parser};
