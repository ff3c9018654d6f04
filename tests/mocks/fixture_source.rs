use gloo_timers::future::sleep;
use pokemuseum::api::JsonSource;
use pokemuseum::error::FetchError;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// In-memory stand-in for PokeAPI with a per-URL answer delay.
///
/// Clones share the same fixtures and request log, so a test can keep one
/// handle while the component under test owns another.
#[derive(Clone, Default)]
pub struct FixtureSource {
    inner: Rc<RefCell<Fixtures>>,
}

#[derive(Default)]
struct Fixtures {
    responses: HashMap<String, Value>,
    delays: HashMap<String, u32>,
    requested: Vec<String>,
}

impl FixtureSource {
    pub fn respond(&self, url: &str, body: Value, delay_ms: u32) -> &Self {
        let mut fixtures = self.inner.borrow_mut();
        fixtures.responses.insert(url.to_string(), body);
        fixtures.delays.insert(url.to_string(), delay_ms);
        self
    }

    /// Answers `url` with a `NotFound` error after `delay_ms`.
    pub fn fail(&self, url: &str, delay_ms: u32) -> &Self {
        let mut fixtures = self.inner.borrow_mut();
        fixtures.responses.remove(url);
        fixtures.delays.insert(url.to_string(), delay_ms);
        self
    }

    /// List page at `url` whose entries all resolve to a front image instantly.
    pub fn page(&self, url: &str, names: &[&str], next: Option<&str>, delay_ms: u32) -> &Self {
        let results: Vec<Value> = names
            .iter()
            .map(|name| json!({ "name": name, "url": detail_url(name) }))
            .collect();
        for name in names {
            self.respond(
                &detail_url(name),
                json!({ "forms": [{ "name": name, "url": form_url(name) }] }),
                0,
            );
            self.respond(
                &form_url(name),
                json!({ "sprites": {
                    "front_default": format!("https://img.test/{name}.png"),
                    "back_default": null,
                    "front_shiny": null,
                    "back_shiny": null
                }}),
                0,
            );
        }
        self.respond(
            url,
            json!({ "count": 1302, "next": next, "previous": null, "results": results }),
            delay_ms,
        )
    }

    /// Every list-endpoint URL requested so far, in order.
    pub fn list_requests(&self) -> Vec<String> {
        self.inner
            .borrow()
            .requested
            .iter()
            .filter(|url| url.contains("/pokemon?"))
            .cloned()
            .collect()
    }
}

impl JsonSource for FixtureSource {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let delay = {
            let mut fixtures = self.inner.borrow_mut();
            fixtures.requested.push(url.to_string());
            fixtures.delays.get(url).copied().unwrap_or(0)
        };
        if delay > 0 {
            sleep(Duration::from_millis(delay.into())).await;
        }

        let body = self
            .inner
            .borrow()
            .responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))?;
        serde_json::from_value(body).map_err(|err| FetchError::from(err).for_url(url))
    }
}

fn detail_url(name: &str) -> String {
    format!("https://pokeapi.co/api/v2/pokemon/{name}/")
}

fn form_url(name: &str) -> String {
    format!("https://pokeapi.co/api/v2/pokemon-form/{name}/")
}
