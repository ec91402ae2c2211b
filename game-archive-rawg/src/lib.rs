//! RAWG (rawg.io) metadata provider.

pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use client::{RawgClient, connect};
pub use credentials::{CredentialSource, CredentialSources, Credentials, credential_sources};
pub use error::RawgError;
pub use types::{RawgGame, SearchResponse};
