//! Menucard models the items on a restaurant's card: a shared [`Dish`]
//! record, three course records that embed it ([`Appetizer`],
//! [`MainCourse`], [`Dessert`]), and a [`Menu`] document that collects them
//! by section.
//!
//! The records are deliberately dumb. Every setter is unconditional, there
//! is no cross-field validation, and the only observable behaviour beyond
//! field storage is the fixed card block each item renders via `Display`.

pub mod appetizer;
pub mod config;
pub mod dessert;
pub mod dish;
pub mod main_course;
pub mod menu;

pub use crate::appetizer::{Appetizer, ServingStyle};
pub use crate::dessert::{Dessert, FlavorProfile};
pub use crate::dish::{CuisineType, Dish, MenuItem, ParseEnumError};
pub use crate::main_course::{CookingMethod, MainCourse, SideCategory, SideDish};
pub use crate::menu::Menu;
