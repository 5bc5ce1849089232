// Application layer: Use cases and service orchestration

pub mod packer;

#[cfg(feature = "server")]
pub mod grpc_service;

#[cfg(feature = "server")]
pub mod mappers;

pub use packer::{join_results, Packer};

#[cfg(feature = "server")]
pub use grpc_service::GrpcPackerService;
