//! Run-scoped planet registry.
//!
//! A [`PlanetRegistry`] is created by the caller for one processing run and passed explicitly
//! to whatever needs it. Planets are keyed by case-insensitive name and iterate in insertion
//! order.

use std::collections::HashMap;

use crate::entity::Planet;
use crate::error::CatalogResult;
use crate::factory::create_planet;
use crate::types::RawRecord;

#[derive(Debug, Clone, Default)]
pub struct PlanetRegistry {
    planets: Vec<Planet>,
    by_name: HashMap<String, usize>,
}

impl PlanetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every record with [`create_planet`]. Fails on the first record that does not
    /// convert.
    pub fn from_records<'a, I>(records: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let mut registry = Self::new();
        for record in records {
            registry.insert(create_planet(record)?);
        }
        Ok(registry)
    }

    /// Insert a planet. A planet with the same name (ignoring case) is replaced in place and
    /// returned.
    pub fn insert(&mut self, planet: Planet) -> Option<Planet> {
        let key = planet.name.to_lowercase();
        match self.by_name.get(&key) {
            Some(&idx) => Some(std::mem::replace(&mut self.planets[idx], planet)),
            None => {
                self.by_name.insert(key, self.planets.len());
                self.planets.push(planet);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Planet> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.planets[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter()
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Planets with a known, non-zero population.
    pub fn populated(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|p| p.is_populated())
    }

    /// Planets whose population is known to be zero. Unknown populations are excluded.
    pub fn uninhabited(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|p| p.population == Some(0))
    }

    /// Planets whose only terrain is `terrain`.
    pub fn single_terrain<'a>(&'a self, terrain: &'a str) -> impl Iterator<Item = &'a Planet> {
        self.planets.iter().filter(move |p| p.has_only_terrain(terrain))
    }

    /// Planet(s) with the largest known diameter; ties are all returned in insertion order.
    pub fn largest_by_diameter(&self) -> Vec<&Planet> {
        let Some(max) = self.planets.iter().filter_map(|p| p.diameter_km).max() else {
            return Vec::new();
        };
        self.planets
            .iter()
            .filter(|p| p.diameter_km == Some(max))
            .collect()
    }
}

impl<'a> IntoIterator for &'a PlanetRegistry {
    type Item = &'a Planet;
    type IntoIter = std::slice::Iter<'a, Planet>;

    fn into_iter(self) -> Self::IntoIter {
        self.planets.iter()
    }
}
