use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dish::{CuisineType, Dish, MenuItem, ParseEnumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CookingMethod {
    Grilled,
    Baked,
    Fried,
    Steamed,
    Raw,
}

impl Default for CookingMethod {
    fn default() -> Self {
        CookingMethod::Grilled
    }
}

impl fmt::Display for CookingMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CookingMethod::Grilled => "GRILLED",
            CookingMethod::Baked => "BAKED",
            CookingMethod::Fried => "FRIED",
            CookingMethod::Steamed => "STEAMED",
            CookingMethod::Raw => "RAW",
        };
        f.write_str(name)
    }
}

impl FromStr for CookingMethod {
    type Err = ParseEnumError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "GRILLED" => Ok(CookingMethod::Grilled),
            "BAKED" => Ok(CookingMethod::Baked),
            "FRIED" => Ok(CookingMethod::Fried),
            "STEAMED" => Ok(CookingMethod::Steamed),
            "RAW" => Ok(CookingMethod::Raw),
            other => Err(ParseEnumError::new("cooking method", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SideCategory {
    Grain,
    Pasta,
    Legume,
    Bread,
    Salad,
    Soup,
    Starches,
    Vegetable,
}

impl fmt::Display for SideCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SideCategory::Grain => "GRAIN",
            SideCategory::Pasta => "PASTA",
            SideCategory::Legume => "LEGUME",
            SideCategory::Bread => "BREAD",
            SideCategory::Salad => "SALAD",
            SideCategory::Soup => "SOUP",
            SideCategory::Starches => "STARCHES",
            SideCategory::Vegetable => "VEGETABLE",
        };
        f.write_str(name)
    }
}

impl FromStr for SideCategory {
    type Err = ParseEnumError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "GRAIN" => Ok(SideCategory::Grain),
            "PASTA" => Ok(SideCategory::Pasta),
            "LEGUME" => Ok(SideCategory::Legume),
            "BREAD" => Ok(SideCategory::Bread),
            "SALAD" => Ok(SideCategory::Salad),
            "SOUP" => Ok(SideCategory::Soup),
            "STARCHES" => Ok(SideCategory::Starches),
            "VEGETABLE" => Ok(SideCategory::Vegetable),
            other => Err(ParseEnumError::new("side category", other)),
        }
    }
}

/// A side listed under a main course. Plain value, no identity of its own;
/// it lives and dies with the course that names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideDish {
    pub name: String,
    pub category: SideCategory,
}

impl SideDish {
    pub fn new(name: &str, category: SideCategory) -> Self {
        SideDish {
            name: name.to_string(),
            category,
        }
    }
}

/// A main: a dish plus how it's cooked, what protein it carries, and the
/// sides it comes with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainCourse {
    #[serde(flatten)]
    dish: Dish,
    cooking_method: CookingMethod,
    protein_type: String,
    side_dishes: Vec<SideDish>,
    gluten_free: bool,
}

impl Default for MainCourse {
    fn default() -> Self {
        MainCourse {
            dish: Dish::default(),
            cooking_method: CookingMethod::default(),
            protein_type: "UNKNOWN".to_string(),
            side_dishes: Vec::new(),
            gluten_free: false,
        }
    }
}

impl MainCourse {
    pub fn new(
        name: &str,
        ingredients: Vec<String>,
        prep_time: i32,
        price: f64,
        cuisine_type: CuisineType,
        cooking_method: CookingMethod,
        protein_type: &str,
        side_dishes: Vec<SideDish>,
        gluten_free: bool,
    ) -> Self {
        MainCourse {
            dish: Dish::new(name, ingredients, prep_time, price, cuisine_type),
            cooking_method,
            protein_type: protein_type.to_string(),
            side_dishes,
            gluten_free,
        }
    }

    pub fn cooking_method(&self) -> CookingMethod {
        self.cooking_method
    }

    pub fn set_cooking_method(&mut self, cooking_method: CookingMethod) {
        self.cooking_method = cooking_method;
    }

    pub fn protein_type(&self) -> &str {
        &self.protein_type
    }

    pub fn set_protein_type(&mut self, protein_type: &str) {
        self.protein_type = protein_type.to_string();
    }

    pub fn is_gluten_free(&self) -> bool {
        self.gluten_free
    }

    pub fn set_gluten_free(&mut self, gluten_free: bool) {
        self.gluten_free = gluten_free;
    }

    /// Sides in the order they were added.
    pub fn side_dishes(&self) -> &[SideDish] {
        &self.side_dishes
    }

    /// Appends to the end of the list. No deduplication, no cap.
    pub fn add_side_dish(&mut self, side_dish: SideDish) {
        self.side_dishes.push(side_dish);
    }
}

impl MenuItem for MainCourse {
    fn dish(&self) -> &Dish {
        &self.dish
    }
    fn dish_mut(&mut self) -> &mut Dish {
        &mut self.dish
    }
}

impl fmt::Display for MainCourse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.dish, f)
    }
}
