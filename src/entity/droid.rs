use std::fmt;

use serde::Serialize;

use super::Entity;

/// A mechanical being.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Droid {
    pub url: String,
    pub name: String,
    pub model: String,
    pub manufacturer: Option<String>,
    pub create_year: Option<String>,
    pub height_m: Option<f64>,
    pub mass_kg: Option<f64>,
    /// Equipment carried, if any.
    pub equipment: Option<Vec<String>>,
}

impl Droid {
    /// Create a droid with only the required fields set.
    pub fn new(url: impl Into<String>, name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            model: model.into(),
            manufacturer: None,
            create_year: None,
            height_m: None,
            mass_kg: None,
            equipment: None,
        }
    }
}

impl Entity for Droid {
    fn kind(&self) -> &'static str {
        "droid"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Droid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
