use leptos::logging::{error, log};
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, HttpSource, JsonSource};
use crate::models::page::PageResult;

/// Hands out increasing cycle numbers; only the newest one may publish.
#[derive(Debug, Clone, Default)]
pub struct CycleTracker {
    latest: Rc<Cell<u64>>,
}

impl CycleTracker {
    pub fn begin(&self) -> u64 {
        let cycle = self.latest.get() + 1;
        self.latest.set(cycle);
        cycle
    }

    pub fn is_current(&self, cycle: u64) -> bool {
        self.latest.get() == cycle
    }

    /// Invalidates every cycle handed out so far.
    pub fn retire(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FetchState {
    pub data: ReadSignal<PageResult>,
    pub is_loading: ReadSignal<bool>,
}

/// Loads the page behind `fetch_url` from PokeAPI, again on every URL change.
pub fn use_fetch(fetch_url: Memo<String>) -> FetchState {
    use_fetch_with(HttpSource, fetch_url)
}

/// Same as [`use_fetch`] with an explicit JSON source.
///
/// Failures are logged and dropped: the last good page stays published and
/// the busy flag is cleared either way. Responses from superseded cycles, or
/// arriving after the owner is gone, are discarded.
pub fn use_fetch_with<S>(source: S, fetch_url: Memo<String>) -> FetchState
where
    S: JsonSource + Clone + 'static,
{
    let (data, set_data) = create_signal(PageResult::default());
    let (is_loading, set_loading) = create_signal(false);
    let cycles = CycleTracker::default();

    // Nothing may publish once the owning component is gone
    on_cleanup({
        let cycles = cycles.clone();
        move || cycles.retire()
    });

    create_effect(move |_| {
        // Every URL change opens a new cycle and supersedes the previous one
        let url = fetch_url.get();
        let cycle = cycles.begin();
        set_loading.set(true);

        let cycles = cycles.clone();
        let source = source.clone();
        spawn_local(async move {
            let outcome = api::load_page(&source, &url).await;
            // A newer cycle owns the signals now
            if !cycles.is_current(cycle) {
                log!("[FETCH] Discarding stale cycle #{} for {}", cycle, url);
                return;
            }
            // On failure the previous page stays visible
            match outcome {
                Ok(page) => set_data.set(page),
                Err(err) => error!("[FETCH] Cycle #{} for {} failed: {}", cycle, url, err),
            }
            set_loading.set(false);
        });
    });

    FetchState { data, is_loading }
}
