//! Sales invoice resources
//!
//! Covers the invoice itself plus the auxiliary shapes the API returns for
//! sending, payment registration and notes.

use super::contact::Contact;
use serde::{Deserialize, Serialize};

/// A sales invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice identifier, assigned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Administration the invoice belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration_id: Option<String>,

    /// Identifier of the billed contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,

    /// Embedded contact, present on detail responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    /// Human-readable invoice number, assigned when the draft is sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    /// Lifecycle state: draft, open, late, paid, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Invoice date (e.g., "2016-09-07")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,

    /// Date payment is due
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Caller-supplied reference text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Whether line prices include tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices_are_incl_tax: Option<bool>,

    /// Total excluding tax, decimal serialized as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price_excl_tax: Option<String>,

    /// Total including tax, decimal serialized as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price_incl_tax: Option<String>,

    /// Outstanding amount still to be paid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_unpaid: Option<String>,

    /// Public URL of the invoice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Invoice lines. The API expects `details_attributes` on outgoing
    /// payloads but answers with `details`; response bodies are rewritten
    /// to this name before decoding so one field serves both directions.
    #[serde(
        rename = "details_attributes",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub details: Vec<InvoiceDetails>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A single invoice line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetails {
    /// Unique line identifier, assigned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Line description shown on the invoice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price, decimal serialized as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Quantity, serialized as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Tax rate applied to the line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate_id: Option<String>,

    /// Ledger account the line is booked on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_account_id: Option<String>,

    /// Billing period in yyyymmdd..yyyymmdd form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    /// Position of the line on the invoice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_order: Option<i64>,
}

/// Delivery settings returned when an invoice is sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSending {
    /// Email, Simplerinvoicing, Post or Manual
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,

    /// Whether delivery is queued rather than immediate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sending_scheduled: Option<bool>,

    /// Whether a UBL attachment is included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliver_ubl: Option<bool>,

    /// Whether the delivery may be merged with other scheduled mail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mergeable: Option<bool>,

    /// Recipient email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Message body of the delivery email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
}

/// A payment registered against an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayment {
    /// Unique payment identifier, assigned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Invoice the payment is registered against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    /// Date of the payment (e.g., "2016-09-07")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,

    /// Paid amount in the invoice currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Paid amount in the administration's base currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_base: Option<String>,

    /// Financial account that received the payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_account_id: Option<String>,

    /// Bank mutation the payment is linked to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_mutation_id: Option<String>,

    /// Bank transaction identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_identifier: Option<String>,

    /// How a manually registered payment was settled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_payment_action: Option<String>,
}

/// A note or todo attached to an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceNote {
    /// Unique note identifier, assigned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Text of the note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Whether the note is a todo item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo: Option<bool>,

    /// User the todo is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,

    /// When the todo was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
