//! Test fixtures for running the server binary.

#![allow(dead_code)]

use std::{
    net::TcpStream,
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use futures_util::StreamExt;
use tokio::net::TcpStream as TokioTcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

pub type WsStream = WebSocketStream<MaybeTlsStream<TokioTcpStream>>;

const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);
const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);
const SILENCE_WINDOW: Duration = Duration::from_millis(300);

/// A `hiroba-server` process listening on a fixed local port.
///
/// The process is killed when the fixture is dropped.
pub struct TestServer {
    child: Child,
    port: u16,
}

impl TestServer {
    pub fn start(port: u16) -> Self {
        let child = Command::new(env!("CARGO_BIN_EXE_hiroba-server"))
            .args(["--host", "127.0.0.1", "--port", &port.to_string()])
            .args(["--log-level", "warn"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start server binary");

        let server = Self { child, port };
        server.wait_until_listening();
        server
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn chat_url(&self) -> String {
        format!("ws://127.0.0.1:{}/chat", self.port)
    }

    fn wait_until_listening(&self) {
        let deadline = Instant::now() + STARTUP_TIMEOUT;
        while Instant::now() < deadline {
            if TcpStream::connect(("127.0.0.1", self.port)).is_ok() {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("Server did not start listening on port {}", self.port);
    }

    /// Open a chat connection.
    pub async fn connect(&self) -> WsStream {
        let (ws, _) = connect_async(self.chat_url())
            .await
            .expect("Failed to connect to /chat");
        ws
    }

    /// Poll `/api/room` until it reports `expected` participants.
    pub async fn wait_for_participants(&self, expected: usize) {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + RECEIVE_TIMEOUT;
        loop {
            let body: serde_json::Value = client
                .get(format!("{}/api/room", self.base_url()))
                .send()
                .await
                .expect("Failed to send request")
                .json()
                .await
                .expect("Failed to parse JSON");
            if body["count"] == expected {
                return;
            }
            assert!(
                Instant::now() < deadline,
                "Room never reached {expected} participants: {body}"
            );
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }

    /// Connect and wait until the server has registered the new client.
    pub async fn join(&self, expected_count: usize) -> WsStream {
        let ws = self.connect().await;
        self.wait_for_participants(expected_count).await;
        ws
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Next text frame, skipping control frames.
pub async fn recv_text(ws: &mut WsStream) -> String {
    let deadline = tokio::time::Instant::now() + RECEIVE_TIMEOUT;
    loop {
        let frame = tokio::time::timeout_at(deadline, ws.next())
            .await
            .expect("Timed out waiting for a text frame")
            .expect("Connection closed")
            .expect("WebSocket error");
        if let Message::Text(text) = frame {
            return text.as_str().to_owned();
        }
    }
}

/// Assert that no text frame arrives for a short while.
pub async fn assert_no_text(ws: &mut WsStream) {
    let deadline = tokio::time::Instant::now() + SILENCE_WINDOW;
    loop {
        match tokio::time::timeout_at(deadline, ws.next()).await {
            Err(_) => return,
            Ok(Some(Ok(Message::Text(text)))) => panic!("Unexpected text frame: {}", text.as_str()),
            Ok(Some(Ok(_))) => continue,
            Ok(other) => panic!("Connection ended unexpectedly: {other:?}"),
        }
    }
}
