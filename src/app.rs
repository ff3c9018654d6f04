/// Application root: document head plus the single museum route.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::pokemon_page::PokemonPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/pokemuseum.css"/>
        <Title text="Pokémon Museum"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=PokemonPage/>
                </Routes>
            </main>
        </Router>
    }
}
