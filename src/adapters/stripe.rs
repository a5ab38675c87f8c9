use crate::config::credential::Credential;
use crate::domain::model::{Customer, CustomerPage};
use crate::domain::ports::CustomerApi;
use crate::utils::error::{NormalizerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Stripe caps `limit` at 100; one fetch per hundred customers.
const PAGE_LIMIT: u32 = 100;

pub struct StripeClient {
    client: Client,
    base_url: String,
    credential: Credential,
}

impl StripeClient {
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            credential,
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NormalizerError::ApiStatusError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CustomerApi for StripeClient {
    async fn list(&self, starting_after: Option<&str>) -> Result<CustomerPage> {
        let url = format!("{}/v1/customers", self.base_url);
        let mut query = vec![("limit", PAGE_LIMIT.to_string())];
        if let Some(cursor) = starting_after {
            query.push(("starting_after", cursor.to_string()));
        }

        tracing::debug!("GET {} (cursor: {:?})", url, starting_after);
        let response = self
            .client
            .get(&url)
            .query(&query)
            .bearer_auth(self.credential.secret())
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn update_email(&self, id: &str, email: &str) -> Result<Customer> {
        let url = format!("{}/v1/customers/{}", self.base_url, id);

        tracing::debug!("POST {} (email update)", url);
        let response = self
            .client
            .post(&url)
            .form(&[("email", email)])
            .bearer_auth(self.credential.secret())
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn create(&self, name: &str, email: &str, description: &str) -> Result<Customer> {
        let url = format!("{}/v1/customers", self.base_url);

        tracing::debug!("POST {} (create)", url);
        let response = self
            .client
            .post(&url)
            .form(&[("name", name), ("email", email), ("description", description)])
            .bearer_auth(self.credential.secret())
            .send()
            .await?;

        Self::decode(response).await
    }
}
