pub mod admin;
pub mod auth;
pub mod chirps;
pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod metrics;
pub mod password;
pub mod response;
pub mod rows;
pub mod router;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use state::{AppState, AppStateInner};
