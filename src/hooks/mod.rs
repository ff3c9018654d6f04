pub mod use_fetch;

pub use use_fetch::{use_fetch, use_fetch_with, CycleTracker, FetchState};
