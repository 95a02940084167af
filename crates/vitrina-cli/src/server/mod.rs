//! Blocking `tiny_http` front end for the chat pipeline.
//!
//! The accept loop runs on a blocking thread. Each request is handled on
//! its own blocking task; only the pipeline call re-enters the runtime, in a
//! spawned task so a panic there becomes a 500 instead of a dropped socket.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tokio::runtime::Handle;
use vitrina_core::ChatResponse;
use vitrina_core::outcome::INTERNAL_ERROR_REPLY;
use vitrina_model::ModelClient;
use vitrina_pipeline::Orchestrator;
use vitrina_store::QueryExecutor;

mod assets;
mod reply;
mod routes;

use reply::HttpReply;
use routes::Route;

const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Bind `addr` and serve until the listener shuts down.
pub async fn serve<M, E>(
    addr: &str,
    public_dir: PathBuf,
    orchestrator: Arc<Orchestrator<M, E>>,
) -> anyhow::Result<()>
where
    M: ModelClient + 'static,
    E: QueryExecutor + 'static,
{
    let server = tiny_http::Server::http(addr)
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    tracing::info!(%addr, "listening");

    let runtime = Handle::current();
    tokio::task::spawn_blocking(move || accept_loop(&server, &runtime, &public_dir, &orchestrator))
        .await
        .context("accept loop join")?;
    Ok(())
}

fn accept_loop<M, E>(
    server: &tiny_http::Server,
    runtime: &Handle,
    public_dir: &Path,
    orchestrator: &Arc<Orchestrator<M, E>>,
) where
    M: ModelClient + 'static,
    E: QueryExecutor + 'static,
{
    for request in server.incoming_requests() {
        let orchestrator = Arc::clone(orchestrator);
        let public_dir = public_dir.to_path_buf();
        let task_runtime = runtime.clone();
        runtime.spawn_blocking(move || {
            respond(request, &public_dir, orchestrator, &task_runtime);
        });
    }
}

fn respond<M, E>(
    mut request: tiny_http::Request,
    public_dir: &Path,
    orchestrator: Arc<Orchestrator<M, E>>,
    runtime: &Handle,
) where
    M: ModelClient + 'static,
    E: QueryExecutor + 'static,
{
    let method = request.method().clone();
    let url = request.url().to_string();

    let reply = match routes::route(&method, &url) {
        Route::Preflight => HttpReply::no_content(),
        Route::NotFound => HttpReply::not_found(),
        Route::Asset(relative) => assets::load(public_dir, &relative),
        Route::Chat => match read_body(request.as_reader(), MAX_BODY_BYTES) {
            Body::Complete(body) => runtime.block_on(chat_reply(orchestrator, &body)),
            Body::TooLarge => {
                tracing::warn!(limit = MAX_BODY_BYTES, "chat body too large");
                HttpReply::payload_too_large()
            }
        },
    };

    tracing::debug!(%method, %url, status = reply.status, "request served");
    if let Err(error) = request.respond(reply.into_response()) {
        tracing::warn!(%error, "failed to write response");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Body {
    Complete(Vec<u8>),
    TooLarge,
}

/// Read at most `limit` bytes. One byte more than the limit means the body
/// was too large; it is never parsed cut short.
fn read_body(reader: &mut dyn Read, limit: u64) -> Body {
    let mut body = Vec::new();
    if let Err(error) = reader.take(limit + 1).read_to_end(&mut body) {
        tracing::warn!(%error, "failed to read request body");
        return Body::Complete(Vec::new());
    }
    if body.len() as u64 > limit {
        Body::TooLarge
    } else {
        Body::Complete(body)
    }
}

/// Run the pipeline for one chat body.
///
/// Modeled failures already arrive as 200 replies; only a panicking
/// pipeline task maps to 500.
async fn chat_reply<M, E>(orchestrator: Arc<Orchestrator<M, E>>, body: &[u8]) -> HttpReply
where
    M: ModelClient + 'static,
    E: QueryExecutor + 'static,
{
    let request = routes::parse_chat_body(body);
    let task = tokio::spawn(async move { orchestrator.process(request.trimmed()).await });

    match task.await {
        Ok(response) => HttpReply::json(200, &response),
        Err(error) => {
            tracing::error!(%error, "chat pipeline task failed");
            HttpReply::json(500, &ChatResponse::terminal(INTERNAL_ERROR_REPLY))
        }
    }
}
