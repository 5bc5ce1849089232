// Infrastructure: input files, logging and the gRPC server

pub mod line_source;
pub mod logging;

#[cfg(feature = "server")]
pub mod server;

pub use line_source::LineSource;
pub use logging::init_tracing;

#[cfg(feature = "server")]
pub use server::{start_server, ServerConfig};
