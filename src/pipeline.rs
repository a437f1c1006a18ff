//! Lexicalization run
//!
//! ```text
//! config check → load inputs → select/resolve/serialize/assemble → backend → fragment
//! ```
//!
//! A run never fails with an error value: every hard failure is logged and
//! rendered as the generic error fragment, so `run` returns
//! `Result<Fragment, Fragment>` and leaves the exit code to the caller.

use tracing::Instrument;
use uuid::Uuid;

use tablex_agentic::{ChatClient, ChatRequest, LlmClient};
use tablex_core::{lexicalize, Lexicalization, TableSelector};

use crate::config::{BackendConfig, RunPaths};
use crate::error::{ConfigError, RunError};
use crate::input;
use crate::render::Fragment;

/// Run one lexicalization against the configured backend.
///
/// A configuration error short-circuits before any input is read.
pub async fn run(
    backend: Result<BackendConfig, ConfigError>,
    paths: &RunPaths,
    selector: TableSelector,
) -> Result<Fragment, Fragment> {
    let config = backend.map_err(|e| failed(e.into()))?;
    let client = ChatClient::new(config.endpoint(), config.api_key())
        .map_err(|e| failed(e.into()))?;
    run_with_client(&client, paths, selector).await
}

/// Run one lexicalization against `client`
pub async fn run_with_client<C>(
    client: &C,
    paths: &RunPaths,
    selector: TableSelector,
) -> Result<Fragment, Fragment>
where
    C: LlmClient + ?Sized,
{
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("lexicalize", %run_id);

    describe(client, paths, selector)
        .instrument(span)
        .await
        .map(|description| Fragment::success(&description))
        .map_err(failed)
}

/// Load the inputs and build the prompt without contacting the backend
pub fn prepare(paths: &RunPaths, selector: TableSelector) -> Result<Lexicalization, RunError> {
    let table = input::load_table(&paths.table)?;
    let params = input::load_params(&paths.params)?;

    let lexicalization = lexicalize(&table, params, selector);
    tracing::info!(
        table = %table.table_name,
        columns = lexicalization.reduced.column_count(),
        rows = lexicalization.reduced.row_count(),
        entities = lexicalization.resolved.entity_count(),
        types = lexicalization.resolved.type_count(),
        predicates = lexicalization.resolved.predicate_count(),
        policy = %selector.policy(),
        "table lexicalized"
    );
    Ok(lexicalization)
}

async fn describe<C>(
    client: &C,
    paths: &RunPaths,
    selector: TableSelector,
) -> Result<String, RunError>
where
    C: LlmClient + ?Sized,
{
    let lexicalization = prepare(paths, selector)?;

    tracing::info!(provider = client.provider_name(), "requesting description");
    let completion = client
        .complete(&ChatRequest::system(lexicalization.prompt))
        .await?;

    if completion.first_content().is_none() {
        tracing::warn!("backend response carried no choices, using placeholder");
    }
    Ok(completion.description())
}

fn failed(error: RunError) -> Fragment {
    tracing::error!("lexicalization failed: {}", error);
    Fragment::error()
}
