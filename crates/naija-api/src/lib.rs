pub mod auth;
pub mod config;
pub mod emojis;
pub mod error;
pub mod middleware;
pub mod ownership;
pub mod router;
pub mod state;
pub mod validation;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, AppStateInner};
