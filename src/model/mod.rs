//! Engine-independent runtime graph.
//!
//! Every decoder produces this model, and it is what we write to disk:
//! - Nodes (heap objects)
//! - Edges (references between objects)
//! - Stacks (allocation trace tree)

pub mod energy;
pub mod runtime;

mod edge;
mod node;
mod stack;

// Re-export main types
pub use edge::Edge;
pub use energy::AccessMetric;
pub use node::Node;
pub use runtime::Runtime;
pub use stack::Stack;
