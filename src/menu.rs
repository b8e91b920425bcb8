use serde::{Deserialize, Serialize};

use crate::appetizer::Appetizer;
use crate::dessert::Dessert;
use crate::main_course::MainCourse;

/// The whole card, one section per course. Sections keep insertion order
/// and accept duplicates; a menu is a document, not a set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default)]
    appetizers: Vec<Appetizer>,
    #[serde(default)]
    main_courses: Vec<MainCourse>,
    #[serde(default)]
    desserts: Vec<Dessert>,
}

impl Menu {
    pub fn new() -> Self {
        Menu::default()
    }

    pub fn add_appetizer(&mut self, appetizer: Appetizer) {
        self.appetizers.push(appetizer);
    }

    pub fn add_main_course(&mut self, main_course: MainCourse) {
        self.main_courses.push(main_course);
    }

    pub fn add_dessert(&mut self, dessert: Dessert) {
        self.desserts.push(dessert);
    }

    pub fn appetizers(&self) -> &[Appetizer] {
        &self.appetizers
    }

    pub fn main_courses(&self) -> &[MainCourse] {
        &self.main_courses
    }

    pub fn desserts(&self) -> &[Dessert] {
        &self.desserts
    }

    /// Items across all sections.
    pub fn len(&self) -> usize {
        self.appetizers.len() + self.main_courses.len() + self.desserts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
