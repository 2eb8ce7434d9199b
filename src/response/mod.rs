//! Typed response decoding
//!
//! Wraps a completed HTTP response and turns its JSON body into one of the
//! domain entities, or into a structured API error. Every accessor takes
//! the response by value: the body is consumed at most once and the
//! underlying connection is released when the call returns, on success and
//! on failure alike. A second decode of the same response is a compile
//! error, not a runtime bug.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{ApiError, Error, Result};
use crate::model::{
    Contact, Invoice, InvoiceNote, InvoicePayment, InvoiceSending, LedgerAccount, Webhook,
};

/// Needle and replacement for the invoice payload rewrite, quotes included
/// so only JSON keys and whole-string values match.
const DETAILS_KEY: &[u8] = br#""details""#;
const DETAILS_ATTRIBUTES_KEY: &[u8] = br#""details_attributes""#;

/// A completed Moneybird API response, ready to be decoded exactly once
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    /// Wrap a transport response for decoding
    pub fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// HTTP status code, without consuming the body
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Response headers, without consuming the body
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Give the raw transport response back, undecoded
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }

    /// Decode the body as a [`Contact`]
    pub async fn contact(self) -> Result<Contact> {
        self.decode().await
    }

    /// Decode the body as an [`Invoice`]
    ///
    /// The API answers with `details` where request payloads (and the
    /// [`Invoice`] struct) use `details_attributes` for the same field, so
    /// the raw bytes are rewritten before structural decoding. The rewrite
    /// is a literal substring replace across the whole payload: a string
    /// value that is exactly `details` is rewritten too, while the
    /// substring inside longer text is left alone because the needle
    /// carries the surrounding quotes.
    pub async fn invoice(self) -> Result<Invoice> {
        let body = self.read_body().await?;
        let body = replace_all(&body, DETAILS_KEY, DETAILS_ATTRIBUTES_KEY);
        trace!("Rewrote invoice details key in {} body bytes", body.len());
        Ok(serde_json::from_slice(&body)?)
    }

    /// Decode the body as an [`InvoiceSending`]
    pub async fn invoice_sending(self) -> Result<InvoiceSending> {
        self.decode().await
    }

    /// Decode the body as an [`InvoicePayment`]
    pub async fn invoice_payment(self) -> Result<InvoicePayment> {
        self.decode().await
    }

    /// Decode the body as an [`InvoiceNote`]
    pub async fn note(self) -> Result<InvoiceNote> {
        self.decode().await
    }

    /// Decode the body as a [`LedgerAccount`]
    pub async fn ledger_account(self) -> Result<LedgerAccount> {
        self.decode().await
    }

    /// Decode the body as a [`Webhook`]
    pub async fn webhook(self) -> Result<Webhook> {
        self.decode().await
    }

    /// Decode a failure response into an error value
    ///
    /// The body is read as a generic JSON object and wrapped, together with
    /// the response's status and headers, in [`Error::Api`]. A body that is
    /// not valid JSON yields the bare [`Error::Decode`] instead, dropping
    /// the response context with it.
    pub async fn api_error(self) -> Error {
        let status = self.inner.status();
        let headers = self.inner.headers().clone();
        debug!("Decoding API error payload: {}", status);

        let body = match self.read_body().await {
            Ok(body) => body,
            Err(e) => return e,
        };

        match serde_json::from_slice::<Map<String, Value>>(&body) {
            Ok(data) => Error::Api(ApiError::new(status, headers, data)),
            Err(e) => Error::Decode(e),
        }
    }

    async fn decode<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.read_body().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Consume the response, releasing the connection once the body is read
    async fn read_body(self) -> Result<Bytes> {
        Ok(self.inner.bytes().await?)
    }
}

impl From<reqwest::Response> for Response {
    fn from(inner: reqwest::Response) -> Self {
        Self::new(inner)
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.inner.status())
            .field("url", &self.inner.url().as_str())
            .finish_non_exhaustive()
    }
}

/// Replace every occurrence of `needle` in `haystack`
fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = find(rest, needle) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(replacement);
        rest = &rest[pos + needle.len()..];
    }
    out.extend_from_slice(rest);
    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
