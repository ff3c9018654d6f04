use super::pokemon::Pokemon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    /// Turns the card over, but only if there is something on the back.
    pub fn flip_if(self, has_back: bool) -> Self {
        match (self, has_back) {
            (_, false) => self,
            (CardFace::Front, true) => CardFace::Back,
            (CardFace::Back, true) => CardFace::Front,
        }
    }
}

/// Image URLs a card needs for its current face and variant.
/// Empty strings mean "no image".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardImages {
    pub shown: String,
    pub back: String,
}

pub fn card_images(pokemon: &Pokemon, shiny: bool, face: CardFace) -> CardImages {
    let front = pick(shiny, &pokemon.front_shiny, &pokemon.front_photo);
    let back = pick(shiny, &pokemon.back_shiny, &pokemon.back_photo);
    let shown = match face {
        CardFace::Front => front,
        CardFace::Back => back,
    };

    CardImages {
        shown: shown.unwrap_or_default().to_string(),
        back: back.unwrap_or_default().to_string(),
    }
}

// A missing shiny sprite falls back to the regular one.
fn pick<'a>(shiny: bool, alt: &'a Option<String>, regular: &'a Option<String>) -> Option<&'a str> {
    let alt = alt.as_deref().filter(|u| !u.is_empty());
    let regular = regular.as_deref().filter(|u| !u.is_empty());
    if shiny {
        alt.or(regular)
    } else {
        regular
    }
}
