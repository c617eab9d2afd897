//! Search/pagination state machine.
//!
//! Every operation is split in two: a synchronous `begin_*` step that performs
//! the state transition and returns a [`PageRequest`] ticket, and
//! [`SearchController::complete`], which applies the gateway outcome for that
//! ticket. A ticket is only honoured while the session is still waiting for
//! it, so responses that arrive after `clear()` or a newer search are dropped.

use crate::models::book::SearchResultPage;
use crate::models::session::{SearchSession, SearchStatus};
use crate::services::gateway::{GatewayError, SearchGateway};
use crate::utils::query::normalize_query;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// First page of a query; replaces whatever was accumulated.
    Replace,
    /// Next page of the current query; appended to the accumulated results.
    Append,
}

/// A page fetch issued by the controller, tagged with the session identity
/// it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    generation: u64,
    query: String,
    page: u32,
    mode: FetchMode,
}

impl PageRequest {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    pub async fn fetch<G>(&self, gateway: &G) -> Result<SearchResultPage, GatewayError>
    where
        G: SearchGateway + Sync + ?Sized,
    {
        gateway.fetch_page(&self.query, self.page).await
    }
}

pub struct SearchController<G: ?Sized> {
    gateway: Arc<G>,
    session: SearchSession,
    generation: u64,
    in_flight: Option<PageRequest>,
}

impl<G> SearchController<G>
where
    G: SearchGateway + Send + Sync + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            session: SearchSession::new(),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn gateway(&self) -> Arc<G> {
        Arc::clone(&self.gateway)
    }

    /// Starts a new search from page 1. Blank queries are ignored.
    pub fn begin_search(&mut self, raw_query: &str) -> Option<PageRequest> {
        let query = normalize_query(raw_query)?;

        self.generation += 1;

        if query != self.session.query {
            self.session.books.clear();
            self.session.total_results = 0;
            self.session.has_more = false;
            self.session.page = 1;
        }

        info!("Searching for '{}'", query);

        self.session.query = query.clone();
        self.session.status = SearchStatus::Loading;
        self.session.last_error = None;

        Some(self.issue(query, 1, FetchMode::Replace))
    }

    /// Requests the page after the last one fetched. No-op while a request is
    /// in flight, when nothing has been searched, or when no pages remain.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.session.is_loading() || !self.session.has_searched() || !self.session.has_more {
            debug!(
                "Ignoring load more (status {:?}, has_more {})",
                self.session.status, self.session.has_more
            );
            return None;
        }

        let next_page = self.session.page + 1;
        info!("Loading page {} for '{}'", next_page, self.session.query);

        self.session.status = SearchStatus::Loading;
        self.session.last_error = None;

        Some(self.issue(self.session.query.clone(), next_page, FetchMode::Append))
    }

    /// Re-runs the current query from page 1. No-op if nothing was searched.
    pub fn begin_retry(&mut self) -> Option<PageRequest> {
        if !self.session.has_searched() {
            return None;
        }
        let query = self.session.query.clone();
        self.begin_search(&query)
    }

    /// Returns the session to its initial state. Outstanding requests become stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.session = SearchSession::new();
    }

    /// Applies a gateway outcome. Returns `false` if the request is no longer
    /// the one the session is waiting for, in which case nothing changes.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        outcome: Result<SearchResultPage, GatewayError>,
    ) -> bool {
        if self.in_flight.as_ref() != Some(request) {
            debug!(
                "Discarding stale response for '{}' page {}",
                request.query, request.page
            );
            return false;
        }
        self.in_flight = None;

        let session = &mut self.session;
        match outcome {
            Ok(result_page) => {
                session.total_results = result_page.num_found;
                session.has_more = result_page.has_more();
                match request.mode {
                    FetchMode::Replace => session.books = result_page.docs,
                    FetchMode::Append => session.books.extend(result_page.docs),
                }
                session.page = request.page;
                session.status = SearchStatus::Success;
                session.last_error = None;

                info!(
                    "'{}': {} of {} books loaded",
                    session.query,
                    session.books.len(),
                    session.total_results
                );
            }
            Err(e) => {
                warn!(
                    "Search for '{}' page {} failed: {}",
                    request.query, request.page, e
                );
                // A failed first page has nothing worth keeping; a failed
                // load-more keeps what is already shown.
                if request.mode == FetchMode::Replace {
                    session.books.clear();
                    session.total_results = 0;
                    session.has_more = false;
                    session.page = 1;
                }
                session.status = SearchStatus::Error;
                session.last_error = Some(e.to_string());
            }
        }

        true
    }

    pub async fn search(&mut self, raw_query: &str) {
        if let Some(request) = self.begin_search(raw_query) {
            self.run(request).await;
        }
    }

    pub async fn load_more(&mut self) {
        if let Some(request) = self.begin_load_more() {
            self.run(request).await;
        }
    }

    pub async fn retry(&mut self) {
        if let Some(request) = self.begin_retry() {
            self.run(request).await;
        }
    }

    fn issue(&mut self, query: String, page: u32, mode: FetchMode) -> PageRequest {
        let request = PageRequest {
            generation: self.generation,
            query,
            page,
            mode,
        };
        self.in_flight = Some(request.clone());
        request
    }

    async fn run(&mut self, request: PageRequest) {
        let gateway = self.gateway();
        let outcome = request.fetch(gateway.as_ref()).await;
        self.complete(&request, outcome);
    }
}
