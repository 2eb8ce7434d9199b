#![warn(missing_docs)]
// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! # moneybird
//!
//! Rust bindings for the [Moneybird](https://www.moneybird.com) invoicing
//! API: the response-decoding layer.
//!
//! The crate wraps completed HTTP responses and turns their JSON bodies
//! into typed domain entities (contacts, invoices, payments, ledger
//! accounts, webhooks), or into a structured error when the API reports a
//! failure. Building requests, authentication, retries and pagination are
//! the caller's concern; this layer starts where the transport hands over
//! a finished response.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use moneybird::{Config, Response};
//!
//! #[tokio::main]
//! async fn main() -> moneybird::Result<()> {
//!     let config = Config::builder()
//!         .administration_id("123")
//!         .token(std::env::var("MONEYBIRD_TOKEN").unwrap())
//!         .build()?;
//!
//!     // The caller owns the transport; any reqwest response works.
//!     let url = format!(
//!         "{}/{}/contacts/1.json",
//!         config.base_url(),
//!         config.administration_id()
//!     );
//!     let raw = reqwest::Client::new()
//!         .get(url)
//!         .bearer_auth(config.token())
//!         .send()
//!         .await?;
//!
//!     let response = Response::new(raw);
//!     if response.status().is_success() {
//!         let contact = response.contact().await?;
//!         println!("{:?}", contact.company_name);
//!     } else {
//!         return Err(response.api_error().await);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Client configuration
pub mod config;

/// Error types for the client
pub mod error;

/// Domain entities mirroring the API's resource shapes
pub mod model;

/// Typed response decoding
pub mod response;

pub use config::{Config, ConfigBuilder};
pub use error::{ApiError, Error, Result};
pub use model::{
    Contact, Invoice, InvoiceDetails, InvoiceNote, InvoicePayment, InvoiceSending, LedgerAccount,
    Webhook,
};
pub use response::Response;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
