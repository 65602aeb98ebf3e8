//! Server configuration.

use clap::Parser;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OUTBOUND_BUFFER: usize = 64;

/// Command line arguments of the `hiroba-server` binary
#[derive(Debug, Parser)]
#[command(version, about = "Broadcast chat server over WebSocket")]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Messages buffered per client before broadcasts wait on it
    #[arg(long, default_value_t = DEFAULT_OUTBOUND_BUFFER)]
    pub outbound_buffer: usize,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    pub log_level: String,
}

/// Runtime configuration of the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub outbound_buffer: usize,
}

impl ServerConfig {
    /// `host:port` to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            outbound_buffer: DEFAULT_OUTBOUND_BUFFER,
        }
    }
}

impl From<ServerArgs> for ServerConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            outbound_buffer: args.outbound_buffer.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // テスト項目: 引数なしではデフォルト値が使われる
        // when (操作):
        let args = ServerArgs::try_parse_from(["hiroba-server"]).unwrap();
        let config = ServerConfig::from(args);

        // then (期待する結果):
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_custom_args() {
        // テスト項目: 引数で host / port / バッファ容量を指定できる
        // when (操作):
        let args = ServerArgs::try_parse_from([
            "hiroba-server",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--outbound-buffer",
            "16",
            "--log-level",
            "info",
        ])
        .unwrap();

        // then (期待する結果):
        assert_eq!(args.log_level, "info");
        let config = ServerConfig::from(args);
        assert_eq!(config.addr(), "0.0.0.0:9000");
        assert_eq!(config.outbound_buffer, 16);
    }

    #[test]
    fn test_zero_outbound_buffer_is_clamped() {
        // テスト項目: バッファ容量 0 は 1 に補正される
        // when (操作):
        let args =
            ServerArgs::try_parse_from(["hiroba-server", "--outbound-buffer", "0"]).unwrap();

        // then (期待する結果):
        assert_eq!(ServerConfig::from(args).outbound_buffer, 1);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        // テスト項目: 範囲外のポート番号はエラーになる
        // when (操作):
        let result = ServerArgs::try_parse_from(["hiroba-server", "--port", "70000"]);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
