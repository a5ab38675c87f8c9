use crate::domain::model::{Customer, CustomerPage, MappingEntry};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote customer source: paginated listing plus single-field updates.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// Fetch one page of customers, starting after the given cursor id.
    async fn list(&self, starting_after: Option<&str>) -> Result<CustomerPage>;

    /// Set a customer's email to the given value.
    async fn update_email(&self, id: &str, email: &str) -> Result<Customer>;

    /// Create a customer (fixture generation only).
    async fn create(&self, name: &str, email: &str, description: &str) -> Result<Customer>;
}

/// Synchronous approval prompt. The normalizer prints the proposed change
/// itself; this only collects the raw response, so tests can inject canned
/// answers instead of reading a terminal.
pub trait ApprovalPrompt {
    fn ask(&mut self) -> Result<String>;
}

/// Destination for mapping entries as they are produced.
pub trait MappingSink {
    fn record(&mut self, entry: MappingEntry) -> Result<()>;
}

/// In-memory sink, used by tests and anywhere a full run's entries are
/// wanted as a plain vector.
impl MappingSink for Vec<MappingEntry> {
    fn record(&mut self, entry: MappingEntry) -> Result<()> {
        self.push(entry);
        Ok(())
    }
}
