// Example client for the packer gRPC service
//
// Start the server first:
//   cargo run --features server --bin packer-server
// then:
//   cargo run --features server --example client
//
// Sends the reference batch twice, once in a single request and once streamed
// line by line, then validates a broken line.

use futures::stream;
use tonic::Request;

pub mod proto {
    tonic::include_proto!("packer");
}

use proto::{packer_client::PackerClient, PackLine, PackRequest};

const LINES: [&str; 4] = [
    "81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48)",
    "8 : (1,15.3,€34)",
    "75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16) (4,26.24,€55) (5,63.69,€52) (6,76.25,€75) (7,60.02,€74) (8,93.18,€35) (9,89.95,€78)",
    "56 : (1,90.72,€13) (2,33.80,€40) (3,43.15,€10) (4,37.97,€16) (5,46.81,€36) (6,48.77,€79) (7,81.80,€45) (8,19.36,€79) (9,6.76,€64)",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = PackerClient::connect("http://127.0.0.1:50051").await?;

    println!("=== Single request ===");
    let response = client
        .pack(Request::new(PackRequest {
            lines: LINES.iter().map(|l| l.to_string()).collect(),
        }))
        .await?
        .into_inner();
    for (line, result) in LINES.iter().zip(&response.results) {
        println!("{:>8}  <=  {}", result, line);
    }

    println!("\n=== Streamed request ===");
    let outbound: Vec<PackLine> = LINES
        .iter()
        .map(|l| PackLine {
            line: l.to_string(),
        })
        .collect();
    let outbound = stream::iter(outbound);
    let response = client.pack_stream(Request::new(outbound)).await?.into_inner();
    println!("{}", response.output);

    println!("\n=== Validation ===");
    let result = client
        .validate_line(Request::new(PackLine {
            line: "200 : (1,15.3,€34)".to_string(),
        }))
        .await?
        .into_inner();
    println!("valid: {}, error: {}", result.is_valid, result.error);

    Ok(())
}
