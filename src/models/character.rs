use serde::Serialize;

use crate::data::portrait_url;

/// A quiz subject. `age` is always positive once normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub age: u32,
}

impl Character {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    /// Illustration URL for this character.
    pub fn portrait_url(&self) -> String {
        portrait_url(&self.id)
    }
}
