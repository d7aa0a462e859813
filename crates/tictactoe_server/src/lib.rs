//! HTTP server for a single shared tic-tac-toe board.
//!
//! # Architecture
//!
//! - **Service**: [`GameService`] owns the one [`GameEngine`](tictactoe_engine::GameEngine)
//!   behind a lock and is cloned into every handler
//! - **Routes**: JSON API (`/state`, `/move`, `/reset`, `/state/peek`) plus
//!   the bundled front-end
//! - **Config**: [`ServerConfig`] from defaults, an optional TOML file and CLI flags
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_server::{GameService, ServerConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = router(GameService::new(), config.static_dir());
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod routes;
mod service;

pub use config::{ConfigError, ConfigOverrides, ServerConfig};
pub use error::{ApiError, ErrorBody};
pub use routes::{MoveRequest, router};
pub use service::GameService;
