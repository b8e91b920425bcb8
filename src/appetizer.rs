use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dish::{CuisineType, Dish, MenuItem, ParseEnumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServingStyle {
    Plated,
    FamilyStyle,
    Buffet,
}

impl Default for ServingStyle {
    fn default() -> Self {
        ServingStyle::Plated
    }
}

impl fmt::Display for ServingStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ServingStyle::Plated => "PLATED",
            ServingStyle::FamilyStyle => "FAMILY_STYLE",
            ServingStyle::Buffet => "BUFFET",
        };
        f.write_str(name)
    }
}

impl FromStr for ServingStyle {
    type Err = ParseEnumError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "PLATED" => Ok(ServingStyle::Plated),
            "FAMILY_STYLE" => Ok(ServingStyle::FamilyStyle),
            "BUFFET" => Ok(ServingStyle::Buffet),
            other => Err(ParseEnumError::new("serving style", other)),
        }
    }
}

/// A starter: a dish plus how it reaches the table and how hot it runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Appetizer {
    #[serde(flatten)]
    dish: Dish,
    serving_style: ServingStyle,
    spiciness_level: i32,
    vegetarian: bool,
}

impl Appetizer {
    pub fn new(
        name: &str,
        ingredients: Vec<String>,
        prep_time: i32,
        price: f64,
        cuisine_type: CuisineType,
        serving_style: ServingStyle,
        spiciness_level: i32,
        vegetarian: bool,
    ) -> Self {
        Appetizer {
            dish: Dish::new(name, ingredients, prep_time, price, cuisine_type),
            serving_style,
            spiciness_level,
            vegetarian,
        }
    }

    pub fn serving_style(&self) -> ServingStyle {
        self.serving_style
    }

    pub fn set_serving_style(&mut self, serving_style: ServingStyle) {
        self.serving_style = serving_style;
    }

    /// Unbounded in both directions; the scale is whatever the menu author
    /// says it is.
    pub fn spiciness_level(&self) -> i32 {
        self.spiciness_level
    }

    pub fn set_spiciness_level(&mut self, spiciness_level: i32) {
        self.spiciness_level = spiciness_level;
    }

    pub fn is_vegetarian(&self) -> bool {
        self.vegetarian
    }

    pub fn set_vegetarian(&mut self, vegetarian: bool) {
        self.vegetarian = vegetarian;
    }
}

impl MenuItem for Appetizer {
    fn dish(&self) -> &Dish {
        &self.dish
    }
    fn dish_mut(&mut self) -> &mut Dish {
        &mut self.dish
    }
}

impl fmt::Display for Appetizer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.dish, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_appetizer_matches_stated_defaults() {
        let app = Appetizer::default();
        assert_eq!(app.serving_style(), ServingStyle::Plated);
        assert_eq!(app.spiciness_level(), 0);
        assert!(!app.is_vegetarian());
        assert_eq!(app.dish().name(), "UNKNOWN");
        assert_eq!(app.dish().cuisine_type(), CuisineType::Other);
    }

    #[test]
    fn mutated_default_appetizer_keeps_inherited_card_block() {
        let mut app = Appetizer::default();
        app.set_spiciness_level(7);
        app.set_serving_style(ServingStyle::FamilyStyle);
        app.set_vegetarian(true);

        assert_eq!(app.spiciness_level(), 7);
        assert_eq!(app.serving_style(), ServingStyle::FamilyStyle);
        assert!(app.is_vegetarian());
        assert_eq!(
            app.to_string(),
            "Dish Name: UNKNOWN\n\
             Ingredients: \n\
             Preparation Time: 0 minutes\n\
             Price: $0.00\n\
             Cuisine Type: OTHER\n"
        );
    }

    #[test]
    fn inherited_fields_mutate_through_the_dish_seam() {
        let mut app = Appetizer::default();
        app.dish_mut().set_name("Spring Rolls");
        app.dish_mut().set_price(6.5);
        assert_eq!(app.dish().name(), "Spring Rolls");
        assert_eq!(app.dish().price(), 6.5);
    }

    #[test]
    fn serving_style_names_round_trip() {
        for style in &[
            ServingStyle::Plated,
            ServingStyle::FamilyStyle,
            ServingStyle::Buffet,
        ] {
            let parsed: ServingStyle = style.to_string().parse().expect("known name");
            assert_eq!(parsed, *style);
        }
    }

    #[test]
    fn flattens_dish_fields_into_one_document() {
        let app = Appetizer::new(
            "Bruschetta",
            vec!["Bread".to_string(), "Tomato".to_string()],
            10,
            7.25,
            CuisineType::Italian,
            ServingStyle::Plated,
            1,
            true,
        );
        let json = serde_json::to_value(&app).expect("to json");
        assert_eq!(json["name"], "Bruschetta");
        assert_eq!(json["serving_style"], "PLATED");
        assert_eq!(json["vegetarian"], true);
    }
}
