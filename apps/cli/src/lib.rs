pub mod config;
pub mod loader;
pub mod render;

use std::sync::Arc;

use clap::Parser;
use quiz_core::{search_refs, FileSource, Question};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, Command, Format};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let source = match &cli.docs_dir {
        Some(root) => FileSource::with_root(root),
        None => FileSource::new(),
    };

    let questions =
        loader::load_questions(Arc::new(source), cli.command.document(), cli.load_timeout()).await?;

    match &cli.command {
        Command::Extract { .. } => {
            println!("{}", render::render_extract(&questions, cli.format)?);
        }
        Command::Search { queries, .. } => {
            for query in queries {
                print!("{}", answer_query(&questions, query, cli.format)?);
            }
        }
        Command::Interactive { .. } => {
            let stdin = BufReader::new(tokio::io::stdin());
            answer_queries(&questions, cli.format, stdin, &mut tokio::io::stdout()).await?;
        }
    }

    Ok(())
}

/// Render the results for a single query.
pub fn answer_query(questions: &[Question], query: &str, format: Format) -> anyhow::Result<String> {
    let matches = search_refs(questions, query);
    tracing::debug!(query, matches = matches.len(), "search");

    let mut out = render::render_search(query, &matches, format)?;
    if format == Format::Json {
        out.push('\n');
    }
    Ok(out)
}

/// Answer queries read from `input` until EOF, writing results to `output`.
///
/// A blank line clears the results and writes nothing.
pub async fn answer_queries<R, W>(
    questions: &[Question],
    format: Format,
    input: R,
    output: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(query) = lines.next_line().await? {
        let query = query.strip_suffix('\r').unwrap_or(&query);
        if query.is_empty() {
            continue;
        }
        output
            .write_all(answer_query(questions, query, format)?.as_bytes())
            .await?;
        output.flush().await?;
    }

    Ok(())
}
