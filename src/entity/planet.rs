use std::fmt;

use serde::Serialize;

use crate::convert::Gravity;

use super::Entity;

/// A planet.
///
/// Projection key order: `url`, `name`, `region`, `sector`, `suns`, `moons`,
/// `orbital_period_days`, `diameter_km`, `gravity_std`, `climate`, `terrain`, `population`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planet {
    /// Identifier/locator.
    pub url: String,
    /// Planet name.
    pub name: String,
    /// Galactic region.
    pub region: Option<String>,
    /// Sector within the region.
    pub sector: Option<String>,
    /// Number of suns. `0` and "unknown" are distinct.
    pub suns: Option<i64>,
    /// Number of moons.
    pub moons: Option<i64>,
    /// Orbital period in standard days.
    pub orbital_period_days: Option<f64>,
    /// Diameter in kilometers.
    pub diameter_km: Option<i64>,
    /// Surface gravity.
    pub gravity_std: Option<Gravity>,
    /// Climate types.
    pub climate: Option<Vec<String>>,
    /// Terrain types.
    pub terrain: Option<Vec<String>>,
    /// Population size.
    pub population: Option<i64>,
}

impl Planet {
    /// Create a planet with only the required fields set.
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            region: None,
            sector: None,
            suns: None,
            moons: None,
            orbital_period_days: None,
            diameter_km: None,
            gravity_std: None,
            climate: None,
            terrain: None,
            population: None,
        }
    }

    /// `true` if the population is known and non-zero.
    pub fn is_populated(&self) -> bool {
        self.population.is_some_and(|p| p > 0)
    }

    /// `true` if the planet has exactly one terrain type and it is `terrain` (case-insensitive).
    pub fn has_only_terrain(&self, terrain: &str) -> bool {
        matches!(self.terrain.as_deref(), Some([only]) if only.eq_ignore_ascii_case(terrain))
    }
}

impl Entity for Planet {
    fn kind(&self) -> &'static str {
        "planet"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
