//! # Session State
//!
//! Core session state for Liftoff. This module contains domain logic only -
//! no HTTP, no terminal types.
//!
//! ```text
//! App
//! ├── source: Arc<dyn LaunchSource>   // fetch service, injected at startup
//! ├── phase: Phase                    // Loading / Ready / Failed
//! ├── base: Vec<LaunchRecord>         // full fetched sequence, set once
//! ├── search_term: String             // live user input
//! └── filtered: Vec<LaunchRecord>     // derived view, never stale
//! ```
//!
//! The one startup fetch runs in `main`; its outcome enters through
//! [`App::finish_load`]. Every mutation of `base` or `search_term` recomputes
//! `filtered` in the same step, so consumers can never observe a view that
//! disagrees with its inputs.

use std::sync::Arc;

use log::{info, warn};

use crate::core::filter::filter_launches;
use crate::graphql::{FetchError, LaunchRecord, LaunchSource};

/// Where the session stands. `Failed` is terminal: there is no retry or
/// refresh path, and it renders as an explicit error rather than a spinner.
#[derive(Debug)]
pub enum Phase {
    /// The startup fetch is still in flight.
    Loading,
    /// Base sequence populated (possibly with zero records); search-term
    /// refinement is active. Term updates stay in `Ready`.
    Ready,
    /// The startup fetch failed. Carries the cause so the renderer can show
    /// something distinguishable from loading.
    Failed(FetchError),
}

pub struct App {
    pub source: Arc<dyn LaunchSource>,
    phase: Phase,
    base: Vec<LaunchRecord>,
    search_term: String,
    filtered: Vec<LaunchRecord>,
}

impl App {
    pub fn new(source: Arc<dyn LaunchSource>) -> Self {
        Self {
            source,
            phase: Phase::Loading,
            base: Vec::new(),
            search_term: String::new(),
            filtered: Vec::new(),
        }
    }

    /// Applies the outcome of the startup fetch.
    ///
    /// Success replaces the base sequence wholesale and moves to `Ready`;
    /// an empty list is a valid `Ready` session, not a failure. An error
    /// moves to `Failed` and leaves the base untouched, so the filtered view
    /// is never derived from partial data. The base is set at most once per
    /// session: calls outside `Loading` are ignored.
    pub fn finish_load(&mut self, result: Result<Vec<LaunchRecord>, FetchError>) {
        if !matches!(self.phase, Phase::Loading) {
            warn!("finish_load called outside Loading; ignoring");
            return;
        }
        match result {
            Ok(records) => {
                info!("Session ready with {} launches", records.len());
                self.base = records;
                self.phase = Phase::Ready;
                self.refresh();
            }
            Err(e) => {
                warn!("Session failed: {}", e);
                self.phase = Phase::Failed(e);
            }
        }
    }

    /// Replaces the search term and recomputes the filtered view in the same
    /// step, so the view cannot be observed stale relative to the term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.filtered = filter_launches(&self.base, &self.search_term);
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The derived view the rendering layer consumes.
    pub fn filtered_launches(&self) -> &[LaunchRecord] {
        &self.filtered
    }
}
