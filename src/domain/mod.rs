// Domain module: Business logic and models

pub mod error;
pub mod models;
pub mod selector_service;
pub mod value_objects;

pub use error::*;
pub use models::*;
pub use selector_service::*;
pub use value_objects::*;
