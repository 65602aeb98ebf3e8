//! Terminal chat client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --url ws://127.0.0.1:8080/chat
//! ```

use clap::Parser;
use hiroba_client::{ClientArgs, ClientConfig};
use hiroba_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ClientArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let result = match ClientConfig::try_from(args) {
        Ok(config) => hiroba_client::run_client(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }

    // The readline thread may still be waiting for input
    std::process::exit(0);
}
