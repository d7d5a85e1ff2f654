use std::fmt;

use serde::Serialize;

use super::{Entity, Planet};

/// A person.
///
/// `homeworld` holds a snapshot of the resolved [`Planet`] taken at construction time, so the
/// projection is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub url: String,
    pub name: String,
    pub birth_year: String,
    pub height_m: Option<f64>,
    pub mass_kg: Option<f64>,
    pub homeworld: Option<Planet>,
    pub force_sensitive: bool,
}

impl Person {
    /// Create a person with only the required fields set; `force_sensitive` defaults to `false`.
    pub fn new(url: impl Into<String>, name: impl Into<String>, birth_year: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            birth_year: birth_year.into(),
            height_m: None,
            mass_kg: None,
            homeworld: None,
            force_sensitive: false,
        }
    }
}

impl Entity for Person {
    fn kind(&self) -> &'static str {
        "person"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
