use leptos::logging::log;
use leptos::*;

use crate::components::{debounced_input::DebouncedInput, loader::Loader, pokemon_item::PokemonItem};
use crate::api::{HttpSource, JsonSource};
use crate::hooks::{use_fetch_with, FetchState};
use crate::models::page_state::PageState;
use crate::models::pokemon::Pokemon;
use crate::pagination::derive_view;

/// The museum: header with counters and paging controls, then one card per
/// Pokémon on the current page.
#[component]
pub fn PokemonPage() -> impl IntoView {
    view! { <PokemonPageWith source=HttpSource/> }
}

/// [`PokemonPage`] reading its pages from `source`.
#[component]
pub fn PokemonPageWith<S>(source: S) -> impl IntoView
where
    S: JsonSource + Clone + 'static,
{
    // The URL is the only paging state; size and number are derived from it
    let state = create_rw_signal(PageState::default());

    let fetch_url = create_memo(move |_| state.with(|s| s.fetch_url.clone()));
    let page_view = create_memo(move |_| fetch_url.with(|url| derive_view(url)));
    let is_shiny = create_memo(move |_| state.with(|s| s.is_shiny));
    let total = create_memo(move |_| state.with(|s| s.total));

    let FetchState { data, is_loading } = use_fetch_with(source, fetch_url);

    // Only a changed, non-zero count may replace the running total
    let count = create_memo(move |_| data.with(|page| page.count));
    create_effect(move |_| {
        let count = count.get();
        state.update(|s| {
            if s.observe_count(count) {
                log!("[PAGE] Total is now {}", count);
            }
        });
    });

    // Prev/Next swap in the links of the page currently shown
    let follow = move |link: String| {
        state.update(|s| {
            if s.follow(&link) {
                log!("[PAGE] Moving to {}", link);
            }
        });
    };
    let go_previous = move |_| follow(data.with_untracked(|page| page.previous.clone()));
    let go_next = move |_| follow(data.with_untracked(|page| page.next.clone()));

    // A committed page size rewrites `limit`, which starts a new cycle
    let change_page_size = Callback::new(move |page_size: String| {
        state.update(|s| {
            if s.set_page_size(&page_size) {
                log!("[PAGE] Page size set to {:?}: {}", page_size, s.fetch_url);
            }
        });
    });

    let initial_page_size = page_view.get_untracked().page_size;

    view! {
        <div class="museum">
            <header class="museum__header">
                <h1>"Pokémon Museum"</h1>
                <h2>"Count " {move || total.get()}</h2>
                <div class="add-pokemon__frame">
                    <div class="add-pokemon" on:click=move |_| state.update(PageState::add_pokemon)>
                        <p>"Add pokemon"</p>
                        <svg width="40" height="40" xmlns="http://www.w3.org/2000/svg">
                            <rect x="14" y="0" width="12" height="40" fill="black"></rect>
                            <rect x="0" y="14" width="40" height="12" fill="black"></rect>
                        </svg>
                    </div>
                </div>
                <nav class="museum__controls">
                    <button
                        class="footer-button footer-button--prev"
                        on:click=go_previous
                        disabled=move || !data.with(|page| page.has_previous()) || is_loading.get()
                    >
                        "← Prev"
                    </button>
                    <button
                        class="footer-button footer-button--shiny"
                        on:click=move |_| state.update(PageState::toggle_shiny)
                        disabled=move || is_loading.get()
                    >
                        "→Shiny←"
                    </button>
                    <button
                        class="footer-button footer-button--next"
                        on:click=go_next
                        disabled=move || !data.with(|page| page.has_next()) || is_loading.get()
                    >
                        "Next →"
                    </button>
                </nav>
                <div class="museum__page-size">
                    <h3>"Pokémon per page"</h3>
                    <DebouncedInput
                        class="page-size-input"
                        value=initial_page_size
                        on_change=change_page_size
                        disabled=is_loading
                    />
                    <h3 class="museum__page-number">{move || format!("Page № {}", page_view.with(|v| v.page_number))}</h3>
                </div>
            </header>
            // Spinner while busy, otherwise one card per entry
            <section class="museum__list">
                <Show when=move || !is_loading.get() fallback=|| view! { <Loader/> }>
                    <For
                        each=move || data.with(|page| page.results.clone())
                        key=|pokemon: &Pokemon| pokemon.url.clone()
                        children=move |pokemon: Pokemon| {
                            view! { <PokemonItem pokemon=pokemon is_shiny=is_shiny/> }
                        }
                    />
                </Show>
            </section>
        </div>
    }
}
