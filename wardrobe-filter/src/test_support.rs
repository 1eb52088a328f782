use wardrobe_common::{Category, Color, Item, Occasion, Outfit, Pattern, Season, Style};

pub fn item(id: &str, name: &str, category: Category, color: Color, seasons: &[Season]) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category,
        color,
        pattern: Pattern::Solid,
        seasons: seasons.to_vec(),
        occasions: Vec::new(),
        gender: None,
        favorite: false,
        image_url: None,
        date_added: None,
    }
}

pub fn outfit(id: &str, name: &str, occasion: Occasion, season: Season, style: Style) -> Outfit {
    Outfit {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        occasion,
        season,
        style,
        color_scheme: None,
        gender: None,
        pieces: Vec::new(),
        ai_score: 0,
        image_url: None,
        date_created: None,
    }
}
