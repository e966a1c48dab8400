//! The document-graph crawler.
//!
//! The reference graph is discovered incrementally: a document's references
//! are unknown until it has been fetched and parsed, and every resolution
//! may submit further resolutions. The crawler memoizes submissions by
//! normalized URI before their tasks run, so each document is fetched and
//! built at most once and cyclic references resolve to the in-flight handle
//! instead of re-entering the builder.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use futures::future::{FutureExt, Shared};
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;
use tokio::sync::{mpsc, Semaphore};

use crate::convert::model::{self, Model};
use crate::convert::{ConvertOptions, Fetch, PRELUDE};
use crate::error::{Error, Result};

/// A memoized, shareable handle to one model resolution.
///
/// The handle resolves when the producing task completes. It fails only when
/// that task was dropped, which happens while the run is already aborting on
/// another task's error.
pub(crate) type ModelHandle = Shared<oneshot::Receiver<Arc<Model>>>;

type Task = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

/// Cheap-to-clone handle to the shared state of one conversion run.
///
/// The state is created when the run starts and discarded when it
/// completes; it is never a process-wide singleton.
pub(crate) struct Crawler<F> {
    state: Arc<CrawlerState<F>>,
}

impl<F> Clone for Crawler<F> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

struct CrawlerState<F> {
    options: ConvertOptions,
    fetcher: F,
    /// Bounds concurrent fetches; resolution tasks themselves are unbounded.
    permits: Semaphore,
    queue: mpsc::UnboundedSender<Task>,
    memo: Mutex<HashMap<String, ModelHandle>>,
    /// Declarations in completion order.
    declarations: Mutex<Vec<String>>,
}

impl<F> Crawler<F>
where
    F: Fetch + 'static,
{
    fn new(options: ConvertOptions, fetcher: F) -> (Self, mpsc::UnboundedReceiver<Task>) {
        let (queue, pending) = mpsc::unbounded_channel();
        let permits = Semaphore::new(options.fetch_concurrency);
        let crawler = Self {
            state: Arc::new(CrawlerState {
                options,
                fetcher,
                permits,
                queue,
                memo: Mutex::new(HashMap::new()),
                declarations: Mutex::new(Vec::new()),
            }),
        };
        (crawler, pending)
    }

    pub(crate) fn options(&self) -> &ConvertOptions {
        &self.state.options
    }

    /// Submit a reference URI for resolution and return its handle.
    ///
    /// The memo entry is created before the task runs, under the same lock
    /// that schedules it, so duplicate submissions made while the first is
    /// still in flight reuse that handle rather than fetching again.
    pub(crate) fn resolve_reference(&self, uri: &str) -> ModelHandle {
        let uri = self.normalize(uri);

        let mut memo = self.state.memo.lock().expect("crawler memo poisoned");
        if let Some(handle) = memo.get(&uri) {
            log::trace!("reusing in-flight resolution for {uri}");
            return handle.clone();
        }

        let (sender, receiver) = oneshot::channel();
        let handle = receiver.shared();
        memo.insert(uri.clone(), handle.clone());

        let crawler = self.clone();
        let task: Task = Box::pin(async move {
            log::debug!("resolving {uri}");
            let built = Arc::new(model::build(&crawler, &uri).await?);
            crawler
                .state
                .declarations
                .lock()
                .expect("crawler accumulator poisoned")
                .push(built.declaration.clone());
            // Dependants waiting on the handle may have been dropped already.
            let _ = sender.send(Arc::clone(&built));
            Ok(())
        });
        // The receiving half lives in `run`; it only disappears once the run
        // is finished or aborting, so a failed send has nothing left to do.
        let _ = self.state.queue.send(task);

        handle
    }

    /// Fetch one document through the concurrency-bounded fetch layer.
    pub(crate) async fn fetch(&self, url: &str) -> Result<Value> {
        let _permit = self
            .state
            .permits
            .acquire()
            .await
            .map_err(|_| Error::Aborted(url.to_string()))?;
        self.state.fetcher.fetch(url).await
    }

    /// Strip the configured base-URI prefix so internal URIs become
    /// resolver-relative paths.
    fn normalize(&self, uri: &str) -> String {
        match uri.strip_prefix(self.state.options.base_uri.as_str()) {
            Some(rest) => format!("/{}", rest.trim_start_matches('/')),
            None => uri.to_string(),
        }
    }
}

/// Run one conversion: seed the crawler with the root URI and drive the
/// queue until it is idle, including tasks enqueued by tasks that were
/// themselves still running.
pub(crate) async fn run<F>(root: &str, options: ConvertOptions, fetcher: F) -> Result<String>
where
    F: Fetch + 'static,
{
    let (crawler, mut pending) = Crawler::new(options, fetcher);
    let _ = crawler.resolve_reference(root);

    let mut tasks = FuturesUnordered::new();
    loop {
        // Tasks submit further tasks only while they are being polled, so
        // once the queue is drained and no task is left, the run is idle.
        while let Ok(task) = pending.try_recv() {
            tasks.push(task);
        }
        if tasks.is_empty() {
            break;
        }
        tokio::select! {
            Some(task) = pending.recv() => tasks.push(task),
            completed = tasks.next() => {
                if let Some(result) = completed {
                    result?;
                }
            }
        }
    }

    let declarations = crawler
        .state
        .declarations
        .lock()
        .expect("crawler accumulator poisoned");
    log::debug!("run complete with {} declarations", declarations.len());

    let mut output: Vec<&str> = PRELUDE.to_vec();
    output.push("");
    output.extend(declarations.iter().map(String::as_str));
    Ok(output.join("\n"))
}
