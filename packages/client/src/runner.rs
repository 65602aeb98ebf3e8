//! Client session loop.

use futures_util::{SinkExt, StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use hiroba_shared::time::local_clock;

use crate::{
    config::ClientConfig,
    error::ClientError,
    input::{Input, format_incoming},
};

const PROMPT: &str = ">> ";

/// Connect to the chat server and relay terminal input until the user quits
/// or the server closes the connection.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let (stream, _) = connect_async(config.url.as_str())
        .await
        .map_err(ClientError::Connect)?;
    tracing::info!("Connected to {}", config.url);
    println!("Connected. Type a message and press Enter, /quit to leave.");

    let (mut write, mut read) = stream.split();

    // rustyline blocks, so it gets its own thread and feeds lines through a channel
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    tokio::task::spawn_blocking(move || {
        if let Err(e) = read_lines(line_tx) {
            tracing::error!("{}", ClientError::from(e));
        }
    });

    loop {
        tokio::select! {
            frame = read.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    println!("{}", format_incoming(text.as_str(), &local_clock()));
                }
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(ClientError::WebSocket(e)),
            },
            line = line_rx.recv() => match line {
                Some(text) => {
                    write
                        .send(Message::Text(text.into()))
                        .await
                        .map_err(ClientError::WebSocket)?;
                }
                None => {
                    tracing::debug!("Input closed, leaving the chat");
                    if let Err(e) = write.send(Message::Close(None)).await {
                        tracing::debug!("Failed to send close frame: {}", e);
                    }
                    break;
                }
            },
        }
    }

    Ok(())
}

/// Read lines from the terminal until EOF, Ctrl+C or `/quit`.
fn read_lines(tx: mpsc::UnboundedSender<String>) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => match Input::parse(&line) {
                Input::Quit => return Ok(()),
                Input::Empty => continue,
                Input::Message(text) => {
                    let _ = editor.add_history_entry(text.as_str());
                    if tx.send(text).is_err() {
                        return Ok(());
                    }
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}
