// Mappers: Convert between gRPC protobuf types and domain models
// Keeps protobuf types out of the parsing and selection code

use tonic::Status;

use super::packer::join_results;
use crate::domain::{FormatError, Problem, Selection};

pub mod proto {
    tonic::include_proto!("packer");
}

/// Convert a batch of domain selections to protobuf PackResponse
pub fn selections_to_proto(selections: &[Selection]) -> proto::PackResponse {
    proto::PackResponse {
        results: selections.iter().map(Selection::to_string).collect(),
        output: join_results(selections),
    }
}

/// Convert the outcome of parsing one line to protobuf ValidationResult
pub fn validation_to_proto(parsed: &Result<Problem, FormatError>) -> proto::ValidationResult {
    match parsed {
        Ok(problem) => proto::ValidationResult {
            is_valid: true,
            error: String::new(),
            num_items: problem.num_items() as u32,
            capacity: problem.capacity,
        },
        Err(e) => proto::ValidationResult {
            is_valid: false,
            error: e.to_string(),
            num_items: 0,
            capacity: 0,
        },
    }
}

/// Input problems are the caller's fault; read failures are ours
pub fn format_error_to_status(error: FormatError) -> Status {
    match &error {
        FormatError::Io(_) => Status::internal(error.to_string()),
        _ => Status::invalid_argument(error.to_string()),
    }
}
