use serde::{Deserialize, Deserializer, Serialize};

use super::pokemon::Pokemon;

/// One page of the list endpoint. Replaced wholesale on every successful fetch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PageResult {
    #[serde(default)]
    pub results: Vec<Pokemon>,
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub next: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub previous: String,
}

impl PageResult {
    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
