use serde::{Deserialize, Serialize};

/// The slice of a Stripe customer object this tool cares about. Every other
/// field of the API response is ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One page of the customer list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerPage {
    pub data: Vec<Customer>,
    #[serde(default)]
    pub has_more: bool,
}

/// One row of the mapping record: the email a customer had before the run
/// and the email it ended up with. `new_email` equals `old_email` when the
/// address was already lowercase or the change was not approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub customer_id: String,
    pub old_email: String,
    pub new_email: String,
}

impl MappingEntry {
    pub fn new(
        customer_id: impl Into<String>,
        old_email: impl Into<String>,
        new_email: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            old_email: old_email.into(),
            new_email: new_email.into(),
        }
    }

    /// True when the normalization run actually rewrote this email.
    pub fn changed(&self) -> bool {
        self.old_email != self.new_email
    }
}
