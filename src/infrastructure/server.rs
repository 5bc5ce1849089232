// Infrastructure: Server setup and configuration
// Single Responsibility: Manage server lifecycle and configuration

use std::net::SocketAddr;

use tonic::transport::Server;
use tracing::info;

use crate::application::mappers::proto::packer_server::PackerServer;
use crate::application::{GrpcPackerService, Packer};

pub struct ServerConfig {
    pub address: SocketAddr,
    pub packer: Packer,
}

impl ServerConfig {
    pub fn new(address: SocketAddr, packer: Packer) -> Self {
        Self { address, packer }
    }
}

pub async fn start_server(config: ServerConfig) -> Result<(), tonic::transport::Error> {
    info!(
        address = %config.address,
        selector = config.packer.selector_name(),
        max_capacity = config.packer.parser().limits().max_capacity,
        max_items = config.packer.parser().limits().max_items,
        "packer service listening"
    );

    let service = GrpcPackerService::new(config.packer);

    Server::builder()
        .add_service(PackerServer::new(service))
        .serve(config.address)
        .await
}
