//! PokeAPI client: one list request, then a detail → form chain per entry.

use futures::future::try_join_all;
use gloo_net::http::Request;
use leptos::logging::log;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::models::page::PageResult;
use crate::models::pokemon::{Pokemon, PokemonDetail, PokemonForm};

/// Anything that can answer a GET with a JSON document.
#[allow(async_fn_in_trait)]
pub trait JsonSource {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>;
}

/// Browser `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl JsonSource for HttpSource {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        // Send the request, then refuse anything that is not a 2xx
        let response = Request::get(url).send().await?;
        if !response.ok() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        // Decode straight into the expected payload
        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::from(err).for_url(url))
    }
}

/// Runs one full fetch cycle for `url`.
///
/// All entries are enriched concurrently; the page is only returned once every
/// chain has finished, with entries lacking a front image removed. Any failing
/// request fails the whole cycle.
pub async fn load_page<S: JsonSource>(source: &S, url: &str) -> Result<PageResult, FetchError> {
    // Fetch the list page itself
    let page: PageResult = source.get_json(url).await?;
    let PageResult {
        results,
        count,
        next,
        previous,
    } = page;
    let requested = results.len();

    // One detail -> form chain per entry, all in flight at once
    let enriched = try_join_all(results.into_iter().map(|pokemon| enrich(source, pokemon))).await?;
    // Entries without a primary image are never shown
    let results: Vec<Pokemon> = enriched
        .into_iter()
        .filter(Pokemon::has_front_photo)
        .collect();

    log!(
        "[FETCH] {} of {} entries from {} have a front image",
        results.len(),
        requested,
        url
    );

    Ok(PageResult {
        results,
        count,
        next,
        previous,
    })
}

/// Resolves sprite URLs for one stub. Stubs without a URL or without a form
/// named like themselves come back unchanged.
pub async fn enrich<S: JsonSource>(source: &S, pokemon: Pokemon) -> Result<Pokemon, FetchError> {
    if pokemon.url.is_empty() {
        return Ok(pokemon);
    }

    // The detail lists every form; pick the one named like the stub
    let detail: PokemonDetail = source.get_json(&pokemon.url).await?;
    let Some(form) = detail.forms.into_iter().find(|form| form.name == pokemon.name) else {
        return Ok(pokemon);
    };

    // The form carries the sprite URLs
    let form: PokemonForm = source.get_json(&form.url).await?;
    Ok(pokemon.with_sprites(form.sprites))
}
