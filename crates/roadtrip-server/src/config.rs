use crate::env::Environment;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "localhost:9000";

/// Command line of the `roadtrip` server.
#[derive(Parser, Debug, Clone)]
#[command(name = "roadtrip", version, about = "Serve the roadtrip map and collect marker positions")]
pub struct Cli {
    /// Enable debugging features (no template/static caching, debug logs).
    #[arg(long)]
    pub debug: bool,

    /// Directory holding `templates/` and `static/`.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// TCP port to listen on (all interfaces). Falls back to `PORT`.
    #[arg(long)]
    pub port: Option<u16>,

    /// Unix socket path to listen on. Falls back to `SOCKET`; wins over a port.
    #[arg(long)]
    pub socket: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListenTarget {
    Unix(PathBuf),
    Tcp(String),
}

impl ListenTarget {
    /// A socket (flag or `SOCKET`) beats a port (flag or `PORT`); each flag
    /// beats its variable. Otherwise localhost:9000.
    pub fn resolve(cli: &Cli, env: &Environment) -> Self {
        if let Some(socket) = &cli.socket {
            return ListenTarget::Unix(socket.clone());
        }
        if let Some(socket) = env.get("SOCKET").filter(|s| !s.is_empty()) {
            return ListenTarget::Unix(PathBuf::from(socket));
        }
        if let Some(port) = cli.port {
            return ListenTarget::Tcp(format!("0.0.0.0:{}", port));
        }
        if let Some(port) = env.get("PORT").filter(|s| !s.is_empty()) {
            return ListenTarget::Tcp(format!("0.0.0.0:{}", port));
        }
        ListenTarget::Tcp(DEFAULT_ADDR.to_string())
    }
}

impl fmt::Display for ListenTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenTarget::Unix(path) => write!(f, "unix:{}", path.display()),
            ListenTarget::Tcp(addr) => write!(f, "tcp:{}", addr),
        }
    }
}
