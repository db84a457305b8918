//! State and handlers of the food plate dashboard.
//!
//! The view owns a [`Dashboard`] and changes it only by applying [`Action`]s. Each handler in
//! [`ops`] performs exactly one request through a [`FoodsApi`] and returns the action to apply,
//! so success and failure look the same for every operation.

mod api;
pub mod ops;
mod state;

pub use api::FoodsApi;
pub use state::{Action, Dashboard};

#[cfg(test)]
mod mock;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server responded with {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("Could not decode response: {0}")]
    Decode(String),
    #[error("No food is being edited")]
    NoEditingTarget,
}

/// Dashboard result type.
pub type Result<T> = std::result::Result<T, Error>;
