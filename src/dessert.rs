use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dish::{CuisineType, Dish, MenuItem, ParseEnumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlavorProfile {
    Sweet,
    Bitter,
    Sour,
    Salty,
    Umami,
}

impl Default for FlavorProfile {
    fn default() -> Self {
        FlavorProfile::Sweet
    }
}

impl fmt::Display for FlavorProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            FlavorProfile::Sweet => "SWEET",
            FlavorProfile::Bitter => "BITTER",
            FlavorProfile::Sour => "SOUR",
            FlavorProfile::Salty => "SALTY",
            FlavorProfile::Umami => "UMAMI",
        };
        f.write_str(name)
    }
}

impl FromStr for FlavorProfile {
    type Err = ParseEnumError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "SWEET" => Ok(FlavorProfile::Sweet),
            "BITTER" => Ok(FlavorProfile::Bitter),
            "SOUR" => Ok(FlavorProfile::Sour),
            "SALTY" => Ok(FlavorProfile::Salty),
            "UMAMI" => Ok(FlavorProfile::Umami),
            other => Err(ParseEnumError::new("flavor profile", other)),
        }
    }
}

/// The last course: a dish plus its flavor profile and an allergen flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dessert {
    #[serde(flatten)]
    dish: Dish,
    flavor_profile: FlavorProfile,
    sweetness_level: i32,
    contains_nuts: bool,
}

impl Dessert {
    pub fn new(
        name: &str,
        ingredients: Vec<String>,
        prep_time: i32,
        price: f64,
        cuisine_type: CuisineType,
        flavor_profile: FlavorProfile,
        sweetness_level: i32,
        contains_nuts: bool,
    ) -> Self {
        Dessert {
            dish: Dish::new(name, ingredients, prep_time, price, cuisine_type),
            flavor_profile,
            sweetness_level,
            contains_nuts,
        }
    }

    pub fn flavor_profile(&self) -> FlavorProfile {
        self.flavor_profile
    }

    pub fn set_flavor_profile(&mut self, flavor_profile: FlavorProfile) {
        self.flavor_profile = flavor_profile;
    }

    pub fn sweetness_level(&self) -> i32 {
        self.sweetness_level
    }

    pub fn set_sweetness_level(&mut self, sweetness_level: i32) {
        self.sweetness_level = sweetness_level;
    }

    pub fn contains_nuts(&self) -> bool {
        self.contains_nuts
    }

    pub fn set_contains_nuts(&mut self, contains_nuts: bool) {
        self.contains_nuts = contains_nuts;
    }
}

impl MenuItem for Dessert {
    fn dish(&self) -> &Dish {
        &self.dish
    }
    fn dish_mut(&mut self) -> &mut Dish {
        &mut self.dish
    }
}

impl fmt::Display for Dessert {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.dish, f)
    }
}
