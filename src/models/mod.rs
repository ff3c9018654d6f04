pub mod card;
pub mod page;
pub mod page_state;
pub mod pokemon;
