//! huxley_client - welcome form controller, committee store and CLI for
//! the huxley advisor API.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod output;
pub mod store;

pub use client::HuxleyClient;
pub use config::ClientConfig;
pub use controller::{FormSyncController, SaveError, UiEvent};
pub use error::{ClientError, Result};
pub use store::{CommitteeCache, CommitteeStore};
