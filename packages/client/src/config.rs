//! Client configuration.

use clap::Parser;

use crate::error::ClientError;

pub const DEFAULT_URL: &str = "ws://127.0.0.1:8080/chat";

/// Command line arguments of the `hiroba-client` binary
#[derive(Debug, Parser)]
#[command(version, about = "Terminal client for the Hiroba chat server")]
pub struct ClientArgs {
    /// WebSocket URL of the chat endpoint
    #[arg(short, long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Runtime configuration of the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
}

impl TryFrom<ClientArgs> for ClientConfig {
    type Error = ClientError;

    fn try_from(args: ClientArgs) -> Result<Self, Self::Error> {
        if !(args.url.starts_with("ws://") || args.url.starts_with("wss://")) {
            return Err(ClientError::InvalidUrl(args.url));
        }
        Ok(Self { url: args.url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        // テスト項目: 引数なしではローカルサーバーの /chat に接続する
        // when (操作):
        let args = ClientArgs::try_parse_from(["hiroba-client"]).unwrap();
        let config = ClientConfig::try_from(args).unwrap();

        // then (期待する結果):
        assert_eq!(config.url, "ws://127.0.0.1:8080/chat");
    }

    #[test]
    fn test_secure_url_is_accepted() {
        // テスト項目: wss:// の URL も受け付ける
        // when (操作):
        let args =
            ClientArgs::try_parse_from(["hiroba-client", "-u", "wss://chat.example/chat"]).unwrap();

        // then (期待する結果):
        assert!(ClientConfig::try_from(args).is_ok());
    }

    #[test]
    fn test_http_url_is_rejected() {
        // テスト項目: ws/wss 以外のスキームはエラーになる
        // given (前提条件):
        let args =
            ClientArgs::try_parse_from(["hiroba-client", "--url", "http://127.0.0.1:8080/chat"])
                .unwrap();

        // when (操作):
        let result = ClientConfig::try_from(args);

        // then (期待する結果):
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
