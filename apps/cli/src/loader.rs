//! Document loading on the blocking pool, bounded by a timeout.

use anyhow::{anyhow, Context};
use quiz_core::{extract, DocumentTextSource, Question};
use std::sync::Arc;
use std::time::Duration;

/// Load a document through `source` and extract its questions.
///
/// Loading failures and timeouts abort before extraction; nothing partial
/// is returned.
pub async fn load_questions<S>(
    source: Arc<S>,
    id: &str,
    timeout: Duration,
) -> anyhow::Result<Vec<Question>>
where
    S: DocumentTextSource + Send + Sync + 'static,
{
    tracing::info!(document = id, "Loading document...");

    let task_id = id.to_string();
    let task = tokio::task::spawn_blocking(move || source.read_text(&task_id));

    let text = tokio::time::timeout(timeout, task)
        .await
        .map_err(|_| anyhow!("loading {} timed out after {:?}", id, timeout))?
        .context("document loader task failed")??;

    let questions = extract(&text);
    tracing::info!(document = id, questions = questions.len(), "Extracted questions");

    Ok(questions)
}
