//! Run orchestration: cache probe, fetch, convert, write.
//!
//! The pipeline is a straight line. Failure at any step is fatal; there is
//! no partial-result recovery and no skip-and-continue on a bad record.

use anyhow::{bail, Context, Result};
use chrono::Local;
use terbium_vsac_client::{CacheLookup, SnapshotCache, TicketClient, ValueSetClient};
use terbium_vsac_models::DescribedValueSet;

use crate::args::{Args, Artifact};
use crate::{oids, output};

pub async fn run(args: &Args) -> Result<()> {
    let cache = SnapshotCache::new(&args.cache_dir, !args.no_cache);

    let records = match cache.load().context("Failed probing the snapshot cache")? {
        CacheLookup::Hit(records) => {
            tracing::info!(
                count = records.len(),
                path = %cache.path().display(),
                "Using cached value sets"
            );
            records
        }
        CacheLookup::Miss => {
            tracing::debug!(path = %cache.path().display(), "Snapshot cache miss");
            fetch(args, &cache).await?
        }
        CacheLookup::Disabled => {
            tracing::debug!("Snapshot cache disabled for this run");
            fetch(args, &cache).await?
        }
    };

    if records.is_empty() {
        bail!("no value sets to convert");
    }

    let accessed = Local::now().naive_local();
    let dir = output::run_dir(&args.out_dir, accessed)?;

    match args.artifact {
        Artifact::Codes => {
            let rows = terbium_convert::flatten_to_rows(&records, accessed, args.code_delimiter)
                .context("Failed flattening value sets to code rows")?;
            let path = output::write_codes_table(&dir, &rows, args.field_delimiter)?;
            tracing::info!(rows = rows.len(), path = %path.display(), "Wrote code table");
        }
        Artifact::Fhir => {
            for record in &records {
                let resource = terbium_convert::to_fhir(record);
                let path = output::write_json_artifact(
                    &dir,
                    &record.display_name,
                    &resource,
                    args.json_indent,
                )?;
                tracing::info!(oid = %record.id, path = %path.display(), "Wrote FHIR value set");
            }
        }
        Artifact::Omop => {
            for record in &records {
                let concept_set = terbium_convert::to_omop(record, accessed)
                    .with_context(|| format!("Failed converting {} to the OMOP shape", record.id))?;
                let path = output::write_json_artifact(
                    &dir,
                    &record.display_name,
                    &concept_set,
                    args.json_indent,
                )?;
                tracing::info!(oid = %record.id, path = %path.display(), "Wrote OMOP concept set");
            }
        }
    }

    Ok(())
}

async fn fetch(args: &Args, cache: &SnapshotCache) -> Result<Vec<DescribedValueSet>> {
    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("UMLS_API_KEY").ok())
        .context("No API key: pass --api-key or set UMLS_API_KEY")?;

    let requested = oids::read_oids(&args.oid_file)?;
    if requested.is_empty() {
        bail!("{} lists no OIDs", args.oid_file.display());
    }
    tracing::info!(count = requested.len(), "Read OIDs to retrieve");

    let tickets = TicketClient::with_base_url(args.uts_base_url.clone())
        .context("Failed building the ticket client")?;
    let grant = tickets
        .obtain_grant(&api_key)
        .await
        .context("Failed obtaining a ticket-granting ticket")?;

    let vsac = ValueSetClient::with_base_url(args.vsac_base_url.clone())
        .context("Failed building the retrieval client")?;
    let records = vsac
        .retrieve_value_sets(&tickets, &grant, &requested)
        .await
        .context("Failed retrieving value sets")?;
    tracing::info!(count = records.len(), "Retrieved value sets");

    cache
        .store(&records)
        .context("Failed writing the snapshot cache")?;
    Ok(records)
}
