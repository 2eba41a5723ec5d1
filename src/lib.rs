//! JS Heap Inspector
//!
//! Decodes V8 heap snapshots and performance-reporter captures into a
//! single, engine-independent runtime graph (nodes, edges, stacks),
//! optionally annotated with per-object access metrics.
//!
//! ## Getting Started
//!
//! ```ignore
//! use heap_inspector::parser::RuntimeParserOrchestrator;
//!
//! let snapshot: serde_json::Value = serde_json::from_str(&text)?;
//! let mut orchestrator = RuntimeParserOrchestrator::new();
//! if let Some(runtime) = orchestrator.select(snapshot)? {
//!     println!("{} nodes", runtime.nodes.len());
//! }
//! ```
//!
//! The `heap-inspector` binary wraps the same API for the command line.

pub mod capture;
pub mod commands;
pub mod energy;
pub mod model;
pub mod output;
pub mod parser;
pub mod utils;
