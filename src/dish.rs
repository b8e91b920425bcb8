use std::fmt;
use std::str::FromStr;

use err_derive::Error;
use serde::{Deserialize, Serialize};

/// Raised when an enum name on the wire (or the command line) doesn't match
/// any known member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(display = "unrecognised {} name: {:?}", kind, value)]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        ParseEnumError {
            kind,
            value: value.to_string(),
        }
    }
}

/// Kitchen classification shared by every item on the card. Declaration
/// order is stable and part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CuisineType {
    American,
    Italian,
    Chinese,
    French,
    Indian,
    Mexican,
    Other,
}

impl Default for CuisineType {
    fn default() -> Self {
        CuisineType::Other
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CuisineType::American => "AMERICAN",
            CuisineType::Italian => "ITALIAN",
            CuisineType::Chinese => "CHINESE",
            CuisineType::French => "FRENCH",
            CuisineType::Indian => "INDIAN",
            CuisineType::Mexican => "MEXICAN",
            CuisineType::Other => "OTHER",
        };
        f.write_str(name)
    }
}

impl FromStr for CuisineType {
    type Err = ParseEnumError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "AMERICAN" => Ok(CuisineType::American),
            "ITALIAN" => Ok(CuisineType::Italian),
            "CHINESE" => Ok(CuisineType::Chinese),
            "FRENCH" => Ok(CuisineType::French),
            "INDIAN" => Ok(CuisineType::Indian),
            "MEXICAN" => Ok(CuisineType::Mexican),
            "OTHER" => Ok(CuisineType::Other),
            other => Err(ParseEnumError::new("cuisine type", other)),
        }
    }
}

/// The fields every menu item carries, whatever the course.
///
/// Setters are unconditional: the card records whatever the kitchen says,
/// including a negative prep time or price. Validation belongs to whoever
/// writes the card, not to the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub(crate) name: String,
    pub(crate) ingredients: Vec<String>,
    pub(crate) prep_time: i32,
    pub(crate) price: f64,
    pub(crate) cuisine_type: CuisineType,
}

impl Default for Dish {
    fn default() -> Self {
        Dish {
            name: "UNKNOWN".to_string(),
            ingredients: Vec::new(),
            prep_time: 0,
            price: 0.0,
            cuisine_type: CuisineType::default(),
        }
    }
}

impl Dish {
    pub fn new(
        name: &str,
        ingredients: Vec<String>,
        prep_time: i32,
        price: f64,
        cuisine_type: CuisineType,
    ) -> Self {
        Dish {
            name: name.to_string(),
            ingredients,
            prep_time,
            price,
            cuisine_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Ingredient names in insertion order.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn set_ingredients(&mut self, ingredients: Vec<String>) {
        self.ingredients = ingredients;
    }

    /// Preparation time in minutes.
    pub fn prep_time(&self) -> i32 {
        self.prep_time
    }

    pub fn set_prep_time(&mut self, prep_time: i32) {
        self.prep_time = prep_time;
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn cuisine_type(&self) -> CuisineType {
        self.cuisine_type
    }

    pub fn set_cuisine_type(&mut self, cuisine_type: CuisineType) {
        self.cuisine_type = cuisine_type;
    }
}

/// The fixed card block. Downstream comparisons key on this literal text, so
/// the labels, the field order, and the two-decimal price are load-bearing.
impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Dish Name: {}", self.name)?;
        writeln!(f, "Ingredients: {}", self.ingredients.join(", "))?;
        writeln!(f, "Preparation Time: {} minutes", self.prep_time)?;
        writeln!(f, "Price: ${:.2}", self.price)?;
        writeln!(f, "Cuisine Type: {}", self.cuisine_type)
    }
}

/// Seam between a course record and the dish fields it embeds, in the same
/// shape as a metadata accessor pair: one borrow for reading, one for
/// mutation. Courses don't override the card block; they only add fields of
/// their own next to it.
pub trait MenuItem {
    fn dish(&self) -> &Dish;
    fn dish_mut(&mut self) -> &mut Dish;
}

impl MenuItem for Dish {
    fn dish(&self) -> &Dish {
        self
    }
    fn dish_mut(&mut self) -> &mut Dish {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_dish_matches_stated_defaults() {
        let dish = Dish::default();
        assert_eq!(dish.name(), "UNKNOWN");
        assert_eq!(dish.ingredients(), &[] as &[String]);
        assert_eq!(dish.prep_time(), 0);
        assert_eq!(dish.price(), 0.0);
        assert_eq!(dish.cuisine_type(), CuisineType::Other);
    }

    #[test]
    fn constructor_stores_every_field_verbatim() {
        let dish = Dish::new(
            "Caesar Salad",
            vec!["Romaine".to_string(), "Croutons".to_string()],
            15,
            9.50,
            CuisineType::Italian,
        );
        assert_eq!(dish.name(), "Caesar Salad");
        assert_eq!(dish.ingredients(), ["Romaine", "Croutons"]);
        assert_eq!(dish.prep_time(), 15);
        assert_eq!(dish.price(), 9.50);
        assert_eq!(dish.cuisine_type(), CuisineType::Italian);
    }

    #[test]
    fn setters_accept_any_value_of_the_declared_type() {
        let mut dish = Dish::default();
        dish.set_name("");
        dish.set_prep_time(-20);
        dish.set_price(-1.5);
        dish.set_ingredients(Vec::new());
        assert_eq!(dish.name(), "");
        assert_eq!(dish.prep_time(), -20);
        assert_eq!(dish.price(), -1.5);
        assert!(dish.ingredients().is_empty());
    }

    #[test]
    fn default_card_block_is_byte_exact() {
        let dish = Dish::default();
        assert_eq!(
            dish.to_string(),
            "Dish Name: UNKNOWN\n\
             Ingredients: \n\
             Preparation Time: 0 minutes\n\
             Price: $0.00\n\
             Cuisine Type: OTHER\n"
        );
    }

    #[test]
    fn card_block_joins_ingredients_without_trailing_separator() {
        let mut dish = Dish::default();
        dish.set_name("Pad Thai");
        dish.set_ingredients(vec![
            "Rice Noodles".to_string(),
            "Peanuts".to_string(),
            "Lime".to_string(),
        ]);
        dish.set_prep_time(25);
        dish.set_price(12.0);
        assert_eq!(
            dish.to_string(),
            "Dish Name: Pad Thai\n\
             Ingredients: Rice Noodles, Peanuts, Lime\n\
             Preparation Time: 25 minutes\n\
             Price: $12.00\n\
             Cuisine Type: OTHER\n"
        );
    }

    #[test]
    fn card_block_is_deterministic() {
        let dish = Dish::new(
            "Tacos",
            vec!["Tortilla".to_string()],
            10,
            8.25,
            CuisineType::Mexican,
        );
        assert_eq!(dish.to_string(), dish.to_string());
    }

    #[test]
    fn cuisine_names_round_trip() {
        for cuisine in &[
            CuisineType::American,
            CuisineType::Italian,
            CuisineType::Chinese,
            CuisineType::French,
            CuisineType::Indian,
            CuisineType::Mexican,
            CuisineType::Other,
        ] {
            let parsed: CuisineType = cuisine.to_string().parse().expect("known name");
            assert_eq!(parsed, *cuisine);
        }
    }

    #[test]
    fn unknown_cuisine_name_is_a_parse_error() {
        let err = "KLINGON".parse::<CuisineType>().unwrap_err();
        assert_eq!(err, ParseEnumError::new("cuisine type", "KLINGON"));
    }

    #[test]
    fn serialises_cuisine_as_screaming_snake_case() {
        let json = serde_json::to_string(&CuisineType::French).expect("to json");
        assert_eq!(json, "\"FRENCH\"");
    }
}
