// Domain layer: Business logic and rules
pub mod domain;

// Line parsing: raw text to validated problems
pub mod parser;

// Selector adapters: Concrete implementations of Selector
pub mod selector;

// Application layer: Batch driver and gRPC service
pub mod application;

// Infrastructure layer: Input files, logging, server
pub mod infrastructure;

// Re-export commonly used types
pub use domain::{
    Amount, Combination, FormatError, Item, Limits, Problem, Selection, Selector,
    NOTHING_SELECTED,
};

pub use application::{join_results, Packer};
pub use infrastructure::{init_tracing, LineSource};
pub use parser::LineParser;
pub use selector::GreedySelector;

#[cfg(feature = "server")]
pub use application::GrpcPackerService;

#[cfg(feature = "server")]
pub use infrastructure::{start_server, ServerConfig};
