use tokio_stream::StreamExt;
use tonic::{Request, Response, Status, Streaming};
use tracing::{debug, info};

use super::mappers::{self, proto};
use super::packer::Packer;

/// gRPC service implementation
pub struct GrpcPackerService {
    packer: Packer,
}

impl GrpcPackerService {
    pub fn new(packer: Packer) -> Self {
        Self { packer }
    }
}

impl Default for GrpcPackerService {
    fn default() -> Self {
        Self::new(Packer::default())
    }
}

#[tonic::async_trait]
impl proto::packer_server::Packer for GrpcPackerService {
    async fn pack(
        &self,
        request: Request<proto::PackRequest>,
    ) -> Result<Response<proto::PackResponse>, Status> {
        let lines = request.into_inner().lines;
        info!(lines = lines.len(), "packing batch");

        let selections = self
            .packer
            .pack_lines(&lines)
            .map_err(mappers::format_error_to_status)?;

        Ok(Response::new(mappers::selections_to_proto(&selections)))
    }

    async fn pack_stream(
        &self,
        request: Request<Streaming<proto::PackLine>>,
    ) -> Result<Response<proto::PackResponse>, Status> {
        let mut stream = request.into_inner();

        // Collect the whole batch first; output is all-or-nothing
        let mut lines = Vec::new();
        while let Some(chunk) = stream.next().await {
            lines.push(chunk?.line);
        }
        info!(lines = lines.len(), "packing streamed batch");

        let selections = self
            .packer
            .pack_lines(&lines)
            .map_err(mappers::format_error_to_status)?;

        Ok(Response::new(mappers::selections_to_proto(&selections)))
    }

    async fn validate_line(
        &self,
        request: Request<proto::PackLine>,
    ) -> Result<Response<proto::ValidationResult>, Status> {
        let line = request.into_inner().line;
        let parsed = self.packer.parser().parse(&line);
        debug!(valid = parsed.is_ok(), "validated line");

        Ok(Response::new(mappers::validation_to_proto(&parsed)))
    }
}
