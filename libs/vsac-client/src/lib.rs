//! VSAC retrieval client
//!
//! Ticket-based authentication against the UTS CAS endpoints, batched
//! value-set retrieval over the SVS API, and a JSON snapshot cache for
//! skipping the network on reruns.
//!
//! # Example
//!
//! ```rust,no_run
//! use terbium_vsac_client::{TicketClient, ValueSetClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tickets = TicketClient::new()?;
//! let grant = tickets.obtain_grant("your-api-key").await?;
//!
//! let vsac = ValueSetClient::new()?;
//! let oids = vec!["2.16.840.1.113762.1.4.1034.65".to_string()];
//! let records = vsac.retrieve_value_sets(&tickets, &grant, &oids).await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cas;
pub mod error;
pub mod svs;

pub use cache::{CacheLookup, SnapshotCache};
pub use cas::{Grant, ServiceTicket, TicketClient};
pub use error::{Error, Result};
pub use svs::ValueSetClient;
