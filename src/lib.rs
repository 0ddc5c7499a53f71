//! Signing S3-compatible object storage requests with AWS SigV4.
//!
//! The signer is a pure, deterministic function of its inputs and the
//! captured instant: it builds the canonical request, derives the
//! date-scoped signing key, and produces the `Authorization`, `x-amz-date`
//! and `x-amz-content-sha256` headers. It performs no network I/O; sending
//! the signed request belongs to the caller's HTTP client.
//!
//! # Example
//!
//! ```no_run
//! use objsign::{Config, ObjectAcl, ObjectStore};
//!
//! fn main() -> objsign::Result<()> {
//!     // Unset fields are filled from the environment.
//!     let config = Config {
//!         endpoint: "https://s3.us-east-1.example.com".to_string(),
//!         bucket: "photos".to_string(),
//!         ..Default::default()
//!     }
//!     .from_env();
//!
//!     let store = ObjectStore::new(&config)?;
//!     let (parts, signature) = store.put_object(
//!         "projects/acme/p1/photos/42.jpg",
//!         b"jpeg bytes",
//!         Some(ObjectAcl::PublicRead),
//!     )?;
//!
//!     // Attach the body and send `parts` with your HTTP client of choice.
//!     println!("signed at {}", signature.amz_date);
//!     Ok(())
//! }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;

pub(crate) mod constants;
pub(crate) mod utils;

pub use constants::EMPTY_PAYLOAD_SHA256;

mod config;
pub use config::Config;
mod credential;
pub use credential::Credential;
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::SigningRequest;
mod sign;
pub use sign::{Payload, SignatureResult, Signer};
mod store;
pub use store::{ObjectAcl, ObjectStore};
