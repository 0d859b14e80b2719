use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7070";
pub const DEFAULT_PING_INTERVAL_SECS: u64 = 15;
pub const DEFAULT_COMMAND_BUFFER: usize = 1024;

/// Omeglin matchmaking server: pairs anonymous participants and relays their
/// WebRTC signaling.
#[derive(Debug, Clone, Parser)]
#[command(name = "omeglin", version)]
pub struct ServerConfig {
    /// Address the HTTP/WebSocket server binds to
    #[arg(long, env = "OMEGLIN_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: SocketAddr,

    /// Directory with the browser client, served for every path not handled by the API
    #[arg(long, env = "OMEGLIN_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Seconds between keep-alive pings on each socket (0 disables pings)
    #[arg(long, env = "OMEGLIN_PING_INTERVAL_SECS", default_value_t = DEFAULT_PING_INTERVAL_SECS)]
    pub ping_interval_secs: u64,

    /// Capacity of the matchmaker's command channel
    #[arg(long, env = "OMEGLIN_COMMAND_BUFFER", default_value_t = DEFAULT_COMMAND_BUFFER)]
    pub command_buffer: usize,
}

impl ServerConfig {
    pub fn ping_interval(&self) -> Option<Duration> {
        (self.ping_interval_secs > 0).then(|| Duration::from_secs(self.ping_interval_secs))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 7070)),
            static_dir: None,
            ping_interval_secs: DEFAULT_PING_INTERVAL_SECS,
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}
