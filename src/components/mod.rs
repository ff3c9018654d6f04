pub mod debounced_input;
pub mod loader;
pub mod pokemon_item;
pub mod pokemon_page;
