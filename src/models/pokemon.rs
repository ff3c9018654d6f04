use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One catalog entry. Starts as a stub from the list endpoint (`name`, `url`)
/// and gains image URLs once its forms and sprites have been resolved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_shiny: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_shiny: Option<String>,
    // Anything else the list endpoint sent along with the stub.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Pokemon {
    pub fn stub(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Only entries with a primary image are shown.
    pub fn has_front_photo(&self) -> bool {
        self.front_photo.as_deref().is_some_and(|p| !p.is_empty())
    }

    pub fn with_sprites(self, sprites: Sprites) -> Self {
        Self {
            front_photo: non_empty(sprites.front_default),
            back_photo: non_empty(sprites.back_default),
            front_shiny: non_empty(sprites.front_shiny),
            back_shiny: non_empty(sprites.back_shiny),
            ..self
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Detail endpoint payload; only the forms list matters here.
#[derive(Deserialize, Debug, Clone)]
pub struct PokemonDetail {
    pub forms: Vec<FormRef>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FormRef {
    pub name: String,
    pub url: String,
}

/// Form endpoint payload.
#[derive(Deserialize, Debug, Clone)]
pub struct PokemonForm {
    pub sprites: Sprites,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stub_keeps_unknown_fields() {
        let pokemon: Pokemon = serde_json::from_value(json!({
            "name": "bulbasaur",
            "url": "https://pokeapi.co/api/v2/pokemon/1/",
            "order": 1
        }))
        .unwrap();

        assert_eq!(pokemon.name, "bulbasaur");
        assert!(pokemon.front_photo.is_none());
        assert_eq!(pokemon.extra.get("order"), Some(&json!(1)));
    }

    #[test]
    fn sprites_are_renamed_and_blanks_dropped() {
        let sprites: Sprites = serde_json::from_value(json!({
            "front_default": "front.png",
            "back_default": null,
            "front_shiny": "",
            "back_shiny": "back_shiny.png"
        }))
        .unwrap();

        let pokemon = Pokemon::stub("ivysaur", "u").with_sprites(sprites);
        assert_eq!(pokemon.front_photo.as_deref(), Some("front.png"));
        assert_eq!(pokemon.back_photo, None);
        assert_eq!(pokemon.front_shiny, None);
        assert_eq!(pokemon.back_shiny.as_deref(), Some("back_shiny.png"));
        assert!(pokemon.has_front_photo());
    }

    #[test]
    fn empty_front_photo_does_not_count() {
        let mut pokemon = Pokemon::stub("missingno", "u");
        assert!(!pokemon.has_front_photo());
        pokemon.front_photo = Some(String::new());
        assert!(!pokemon.has_front_photo());
    }

    #[test]
    fn serializes_enriched_fields_in_camel_case() {
        let pokemon = Pokemon {
            front_photo: Some("f.png".into()),
            ..Pokemon::stub("pichu", "u")
        };
        let value = serde_json::to_value(&pokemon).unwrap();
        assert_eq!(value["frontPhoto"], "f.png");
        assert!(value.get("backPhoto").is_none());
    }
}
