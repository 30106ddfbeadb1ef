//! Batched value-set retrieval over the SVS API.

use crate::cas::{Grant, ServiceTicket, TicketClient};
use crate::error::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use terbium_vsac_models::DescribedValueSet;

const VSAC_BASE_URL: &str = "https://vsac.nlm.nih.gov";

/// Client for the SVS retrieval endpoint.
pub struct ValueSetClient {
    client: Client,
    base_url: String,
}

impl ValueSetClient {
    /// Create a retrieval client against the production VSAC endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(VSAC_BASE_URL.to_string())
    }

    /// Create a retrieval client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client, base_url })
    }

    /// Retrieve all requested value sets in one batched call.
    ///
    /// Service tickets are single-use, so a fresh one is minted from the
    /// grant for this call.
    pub async fn retrieve_value_sets(
        &self,
        tickets: &TicketClient,
        grant: &Grant,
        oids: &[String],
    ) -> Result<Vec<DescribedValueSet>> {
        let ticket = tickets.obtain_service_ticket(grant).await?;
        let url = self.retrieve_url(oids, &ticket);
        tracing::debug!(oids = oids.len(), "retrieving value sets");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status {
                url,
                status: response.status(),
            });
        }

        let body = response.text().await?;
        Ok(terbium_svs_format::parse_retrieve_multiple_value_sets(
            &body,
        )?)
    }

    fn retrieve_url(&self, oids: &[String], ticket: &ServiceTicket) -> String {
        let mut query_params: Vec<String> = oids
            .iter()
            .map(|oid| format!("id={}", urlencoding::encode(oid)))
            .collect();
        query_params.push(format!("ticket={}", urlencoding::encode(ticket.as_str())));

        format!(
            "{}/vsac/svs/RetrieveMultipleValueSets?{}",
            self.base_url,
            query_params.join("&")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieve_url_repeats_id_and_appends_ticket() {
        let client = ValueSetClient::with_base_url("https://vsac.example".to_string()).unwrap();
        let oids = vec!["2.16.840.1.113762.1.4.1034.65".to_string(), "1.2.3".to_string()];
        let ticket = ServiceTicket("ST-42-abc".to_string());

        assert_eq!(
            client.retrieve_url(&oids, &ticket),
            "https://vsac.example/vsac/svs/RetrieveMultipleValueSets?\
id=2.16.840.1.113762.1.4.1034.65&id=1.2.3&ticket=ST-42-abc"
        );
    }
}
