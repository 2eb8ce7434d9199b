//! Domain entities for the Moneybird API
//!
//! Plain serde records mirroring the JSON resource shapes of the remote
//! API. Field names follow the wire format; optional fields are skipped on
//! serialization so the same struct can serve as a request payload.
//! Nothing here asserts structure beyond what the API documents; these
//! types are decode targets, not domain logic.

mod contact;
mod invoice;
mod ledger_account;
mod webhook;

pub use contact::Contact;
pub use invoice::{Invoice, InvoiceDetails, InvoiceNote, InvoicePayment, InvoiceSending};
pub use ledger_account::LedgerAccount;
pub use webhook::Webhook;
