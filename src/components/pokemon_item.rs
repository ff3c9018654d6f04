use leptos::logging::warn;
use leptos::*;
use std::collections::HashSet;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::models::card::{card_images, CardFace, CardImages};
use crate::models::pokemon::Pokemon;

/// One museum exhibit. Clicking turns it over when a back image exists.
///
/// Both faces are preloaded off-screen; the card stays transparent until the
/// image it shows has finished loading, so there is no broken-image flash.
#[component]
pub fn PokemonItem(pokemon: Pokemon, #[prop(into)] is_shiny: Signal<bool>) -> impl IntoView {
    let name = pokemon.name.clone();
    let (face, set_face) = create_signal(CardFace::default());
    let loaded = create_rw_signal(HashSet::<String>::new());

    let images = create_memo(move |_| card_images(&pokemon, is_shiny.get(), face.get()));

    create_effect(move |_| {
        let CardImages { shown, back } = images.get();
        preload(&shown, loaded);
        if back != shown {
            preload(&back, loaded);
        }
    });

    let is_loaded = move || {
        images.with(|CardImages { shown, .. }| {
            !shown.is_empty() && loaded.with(|urls| urls.contains(shown))
        })
    };
    let opacity = move || if is_loaded() { "1" } else { "0" };

    let turn = move |_| {
        let has_back = images.with(|i| !i.back.is_empty());
        set_face.update(|face| *face = face.flip_if(has_back));
    };

    view! {
        <div class="pokemon" on:click=turn>
            <img
                class="pokemon__photo"
                src=move || images.with(|i| i.shown.clone())
                alt=name.clone()
                style:opacity=opacity
            />
            <h3 class="pokemon__name" style:opacity=opacity>
                {name}
            </h3>
        </div>
    }
}

// Starts loading `url` in a detached image element and records it once done.
fn preload(url: &str, loaded: RwSignal<HashSet<String>>) {
    if url.is_empty() || loaded.with_untracked(|urls| urls.contains(url)) {
        return;
    }
    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(err) => {
            warn!("[CARD] Cannot create preload image for {}: {:?}", url, err);
            return;
        }
    };

    let done = url.to_string();
    let on_load = Closure::once_into_js(move || {
        // The card may be gone by the time the image arrives.
        loaded.try_update(|urls| urls.insert(done));
    });
    image.set_onload(Some(on_load.unchecked_ref::<js_sys::Function>()));
    image.set_src(url);
}
