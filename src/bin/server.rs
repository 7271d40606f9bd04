//! framelink server.
//!
//! Accepts any number of clients, prints every message it receives and
//! answers each one with a fixed acknowledgement. Runs until killed or
//! interrupted with Ctrl-C.
//!
//! ```text
//! framelink-server [PORT] [--bind ADDR] [--max-frame-size BYTES]
//! ```

use std::net::{IpAddr, Ipv4Addr};
use std::process::ExitCode;

use clap::Parser;
use framelink::protocol::DEFAULT_MAX_FRAME_SIZE;
use framelink::{logging, Server, DEFAULT_PORT};

/// Multi-client framed message server.
#[derive(Parser, Debug)]
#[command(name = "framelink-server", version, about)]
struct Args {
    /// Port to listen on
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,

    /// Largest frame accepted from a client, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FRAME_SIZE)]
    max_frame_size: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(logging::DEFAULT_FILTER);

    let server = match Server::builder()
        .bind_addr(args.bind)
        .port(args.port)
        .max_frame_size(args.max_frame_size)
        .bind()
        .await
    {
        Ok(server) => server,
        Err(e) => {
            eprintln!("The server has crashed, reason: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    match server.run_until(shutdown).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("The server has crashed, reason: {}", e);
            ExitCode::FAILURE
        }
    }
}
