//! framelink client.
//!
//! Connects to a server, prints every message it receives and sends each
//! line typed on stdin as one frame. `QUIT` or `EXIT` (any case) ends the
//! session.
//!
//! ```text
//! framelink-client <HOST> [PORT] [--max-frame-size BYTES]
//! ```

use std::process::ExitCode;

use clap::Parser;
use framelink::protocol::DEFAULT_MAX_FRAME_SIZE;
use framelink::{logging, Client, DEFAULT_PORT};
use tokio::io::BufReader;

/// Interactive client for a framelink server.
#[derive(Parser, Debug)]
#[command(name = "framelink-client", version, about)]
struct Args {
    /// Server host name or address
    host: String,

    /// Server port
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Largest frame accepted from the server, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FRAME_SIZE)]
    max_frame_size: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(logging::DEFAULT_FILTER);

    let client = match Client::builder()
        .host(args.host)
        .port(args.port)
        .max_frame_size(args.max_frame_size)
        .connect()
        .await
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.run_console(BufReader::new(tokio::io::stdin())).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
