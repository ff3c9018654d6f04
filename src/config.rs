/// First page requested when the museum opens.
pub const DEFAULT_URL: &str = "https://pokeapi.co/api/v2/pokemon?limit=5&offset=0";

/// Quiet period (ms) before a page-size edit is committed.
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

pub const LIMIT_PARAM: &str = "limit";
pub const OFFSET_PARAM: &str = "offset";
