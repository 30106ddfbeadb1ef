//! CAS ticket client for the UTS single-sign-on service.
//!
//! Authentication is a two-step exchange: the API key buys a long-lived
//! ticket-granting ticket, which in turn mints short-lived service tickets,
//! one per retrieval call. Ticket lifetimes are controlled server-side;
//! this client never refreshes proactively and any transient failure
//! propagates to the caller.

use crate::error::{Error, Result};
use regex::Regex;
use reqwest::Client;
use std::time::Duration;

const UTS_BASE_URL: &str = "https://utslogin.nlm.nih.gov";

/// Fixed service URL the ticket endpoint expects; identifies the UMLS
/// knowledge-source service the tickets are scoped to.
const TICKET_SERVICE_URL: &str = "http://umlsks.nlm.nih.gov";

/// Long-lived credential minted from the API key; only good for minting
/// service tickets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant(pub(crate) String);

impl Grant {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Short-lived single-use credential authorizing one retrieval call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTicket(pub(crate) String);

impl ServiceTicket {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Client for the CAS authentication endpoints.
pub struct TicketClient {
    client: Client,
    base_url: String,
}

impl TicketClient {
    /// Create a ticket client against the production UTS endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(UTS_BASE_URL.to_string())
    }

    /// Create a ticket client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client, base_url })
    }

    /// Exchange the API key for a ticket-granting ticket.
    ///
    /// The endpoint answers with an HTML page containing a form whose
    /// `action` URL carries the ticket as its final path segment.
    pub async fn obtain_grant(&self, api_key: &str) -> Result<Grant> {
        let url = format!("{}/cas/v1/api-key", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[("apikey", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                url,
                status: response.status(),
            });
        }

        let body = response.text().await?;
        let grant = extract_grant(&body).ok_or(Error::GrantNotFound)?;
        tracing::debug!("obtained ticket-granting ticket");
        Ok(Grant(grant))
    }

    /// Mint a single-use service ticket from a grant.
    ///
    /// The response body is the ticket itself, not wrapped in any markup.
    pub async fn obtain_service_ticket(&self, grant: &Grant) -> Result<ServiceTicket> {
        let url = format!("{}/cas/v1/tickets/{}", self.base_url, grant.as_str());
        let response = self
            .client
            .post(&url)
            .form(&[("service", TICKET_SERVICE_URL)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                url,
                status: response.status(),
            });
        }

        let body = response.text().await?;
        let ticket = body.trim();
        if ticket.is_empty() {
            return Err(Error::EmptyTicket);
        }
        Ok(ServiceTicket(ticket.to_string()))
    }
}

/// Pull the final path segment of the login form's `action` URL.
fn extract_grant(html: &str) -> Option<String> {
    let action_pattern =
        Regex::new(r#"<form[^>]*\baction="([^"]+)""#).expect("form action pattern compiles");
    let action = action_pattern.captures(html)?.get(1)?.as_str();

    // Strip any query/fragment before taking the last path segment.
    let path = action.split(['?', '#']).next().unwrap_or(action);
    let segment = path.trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}
