//! Ledger account resource

use serde::{Deserialize, Serialize};

/// A ledger account in the administration's chart of accounts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerAccount {
    /// Unique ledger account identifier, assigned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Administration the account belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration_id: Option<String>,

    /// Account name shown in the chart of accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// current_assets, expenses, revenue, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    /// Caller-assigned account code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Parent account for nested charts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
