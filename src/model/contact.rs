//! Contact resource

use serde::{Deserialize, Serialize};

/// A contact in the administration's address book
///
/// Moneybird identifiers are large integers serialized as strings; they are
/// kept as strings here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique contact identifier, assigned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Administration the contact belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration_id: Option<String>,

    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// First name of the contact person
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,

    /// Last name of the contact person
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,

    /// First address line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Second address line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,

    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// ISO 3166-1 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Primary email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Caller-assigned customer number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// VAT number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,

    /// Chamber of commerce registration number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chamber_of_commerce: Option<String>,

    /// Bank account number (IBAN)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,

    /// Attention line used on outgoing invoices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_invoices_to_attention: Option<String>,

    /// Email address invoices are delivered to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_invoices_to_email: Option<String>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
