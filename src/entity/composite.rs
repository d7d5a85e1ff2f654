//! Crew and passenger composites.
//!
//! Both keep an explicit insertion-ordered list of entries instead of a hash map so that display
//! strings and projections follow the order the caller supplied.

use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{Entity, Occupant};

/// Crew of a starship: role name (e.g. `"pilot"`) to occupant.
///
/// Occupants are owned by the crew and projected when the crew is serialized, so updates made
/// through [`Crew::get_mut`] show up in later projections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Crew {
    members: Vec<(String, Occupant)>,
}

impl Crew {
    /// Create an empty crew.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a crew from `(role, occupant)` pairs. A repeated role replaces the earlier
    /// occupant and keeps the earlier position.
    pub fn from_roles<I, K, O>(roles: I) -> Self
    where
        I: IntoIterator<Item = (K, O)>,
        K: Into<String>,
        O: Into<Occupant>,
    {
        let mut crew = Self::new();
        for (role, occupant) in roles {
            crew.insert(role, occupant);
        }
        crew
    }

    /// Assign `occupant` to `role`, returning the previous occupant of that role.
    pub fn insert(&mut self, role: impl Into<String>, occupant: impl Into<Occupant>) -> Option<Occupant> {
        let role = role.into();
        let occupant = occupant.into();
        match self.members.iter_mut().find(|(r, _)| *r == role) {
            Some((_, slot)) => Some(std::mem::replace(slot, occupant)),
            None => {
                self.members.push((role, occupant));
                None
            }
        }
    }

    /// Occupant assigned to `role`.
    pub fn get(&self, role: &str) -> Option<&Occupant> {
        self.members.iter().find(|(r, _)| r == role).map(|(_, o)| o)
    }

    /// Mutable access to the occupant assigned to `role`.
    pub fn get_mut(&mut self, role: &str) -> Option<&mut Occupant> {
        self.members.iter_mut().find(|(r, _)| r == role).map(|(_, o)| o)
    }

    /// Roles in insertion order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(r, _)| r.as_str())
    }

    /// `(role, occupant)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Occupant)> {
        self.members.iter().map(|(r, o)| (r.as_str(), o))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `{role: occupant projection, ...}`.
    pub fn jsonable(&self) -> Value {
        Value::Object(
            self.members
                .iter()
                .map(|(role, occupant)| (role.clone(), occupant.jsonable()))
                .collect(),
        )
    }
}

impl Serialize for Crew {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.members.len()))?;
        for (role, occupant) in &self.members {
            map.serialize_entry(role, occupant)?;
        }
        map.end()
    }
}

/// `"pilot: Anakin Skywalker, copilot: Obi-Wan Kenobi"`
impl fmt::Display for Crew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (role, occupant)) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{role}: {}", occupant.name())?;
        }
        Ok(())
    }
}

/// Normalized passenger key: lowercase, spaces and dashes replaced with `_`.
///
/// `"Luke Skywalker"` becomes `"luke_skywalker"`, `"C-3PO"` becomes `"c_3po"`.
pub fn passenger_key(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

/// One passenger: normalized key, display name, and the projection captured on boarding.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerEntry {
    pub key: String,
    pub name: String,
    pub snapshot: Value,
}

/// Passengers on board a starship.
///
/// Unlike [`Crew`], passengers are snapshots: the occupant's projection is captured when the
/// passenger is added. Names that normalize to the same key replace the earlier passenger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Passengers {
    entries: Vec<PassengerEntry>,
}

impl Passengers {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manifest from people and droids in boarding order.
    ///
    /// Only occupants can board; other entities are rejected at compile time:
    ///
    /// ```compile_fail
    /// use swapi_entities::entity::{Passengers, Planet};
    ///
    /// let tatooine = Planet::new("planets/1", "Tatooine");
    /// let _ = Passengers::from_list([&tatooine]);
    /// ```
    pub fn from_list<I>(occupants: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Occupant>,
    {
        let mut passengers = Self::new();
        for occupant in occupants {
            passengers.add(&occupant.into());
        }
        passengers
    }

    /// Add one passenger, returning the key it was stored under.
    pub fn add(&mut self, occupant: &Occupant) -> String {
        let entry = PassengerEntry {
            key: passenger_key(occupant.name()),
            name: occupant.name().to_owned(),
            snapshot: occupant.jsonable(),
        };
        let key = entry.key.clone();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
        key
    }

    /// Snapshot stored under a normalized key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.snapshot)
    }

    /// Normalized keys in boarding order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Entries in boarding order.
    pub fn iter(&self) -> impl Iterator<Item = &PassengerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ordered list of passenger snapshots.
    pub fn jsonable(&self) -> Value {
        Value::Array(self.entries.iter().map(|e| e.snapshot.clone()).collect())
    }
}

impl Serialize for Passengers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(&entry.snapshot)?;
        }
        seq.end()
    }
}

/// `"Passengers: Padmé Amidala, C-3PO"`
impl fmt::Display for Passengers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            f.write_str(if i == 0 { "Passengers: " } else { ", " })?;
            f.write_str(&entry.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::entity::{Droid, Person};

    fn anakin() -> Person {
        Person::new("people/11", "Anakin Skywalker", "41.9BBY")
    }

    fn obi_wan() -> Person {
        Person::new("people/10", "Obi-Wan Kenobi", "57BBY")
    }

    fn c3po() -> Droid {
        Droid::new("people/2", "C-3PO", "3PO unit")
    }

    #[test]
    fn crew_projection_maps_roles_to_occupant_projections() {
        let crew = Crew::from_roles([("pilot", anakin()), ("copilot", obi_wan())]);
        assert_eq!(
            crew.jsonable(),
            json!({"pilot": anakin().jsonable(), "copilot": obi_wan().jsonable()})
        );
        assert_eq!(crew.to_string(), "pilot: Anakin Skywalker, copilot: Obi-Wan Kenobi");
    }

    #[test]
    fn crew_duplicate_role_overwrites_in_place() {
        let mut crew = Crew::from_roles([("pilot", anakin()), ("copilot", obi_wan())]);
        let previous = crew.insert("pilot", c3po());

        assert_eq!(previous.map(|o| o.name().to_owned()), Some("Anakin Skywalker".to_string()));
        assert_eq!(crew.roles().collect::<Vec<_>>(), vec!["pilot", "copilot"]);
        assert_eq!(crew.to_string(), "pilot: C-3PO, copilot: Obi-Wan Kenobi");
    }

    #[test]
    fn crew_projection_reflects_later_updates() {
        let mut crew = Crew::from_roles([("pilot", anakin())]);
        if let Some(Occupant::Person(p)) = crew.get_mut("pilot") {
            p.force_sensitive = true;
        }
        assert_eq!(crew.jsonable()["pilot"]["force_sensitive"], json!(true));
    }

    #[test]
    fn passenger_keys_are_normalized() {
        assert_eq!(passenger_key("C-3PO"), "c_3po");
        assert_eq!(passenger_key("Luke Skywalker"), "luke_skywalker");
        assert_eq!(passenger_key("Obi-Wan Kenobi"), "obi_wan_kenobi");
    }

    #[test]
    fn passengers_project_every_occupant_in_order() {
        let occupants: Vec<Occupant> = vec![anakin().into(), c3po().into(), obi_wan().into()];
        let passengers = Passengers::from_list(&occupants);

        assert_eq!(
            passengers.jsonable(),
            json!([anakin().jsonable(), c3po().jsonable(), obi_wan().jsonable()])
        );
        assert_eq!(
            passengers.keys().collect::<Vec<_>>(),
            vec!["anakin_skywalker", "c_3po", "obi_wan_kenobi"]
        );
        assert_eq!(
            passengers.to_string(),
            "Passengers: Anakin Skywalker, C-3PO, Obi-Wan Kenobi"
        );
    }

    #[test]
    fn passengers_are_snapshots() {
        let mut luke = Person::new("people/1", "Luke Skywalker", "19BBY");
        let passengers = Passengers::from_list([&luke]);
        luke.force_sensitive = true;

        assert_eq!(passengers.get("luke_skywalker").unwrap()["force_sensitive"], json!(false));
    }

    #[test]
    fn colliding_passenger_names_overwrite() {
        let a = Droid::new("u1", "R2-D2", "R2");
        let b = Droid::new("u2", "R2 D2", "R2");
        let passengers = Passengers::from_list([&a, &b]);

        assert_eq!(passengers.len(), 1);
        assert_eq!(passengers.get("r2_d2").unwrap()["url"], json!("u2"));
    }

    #[test]
    fn add_takes_occupants_of_either_kind() {
        let mut passengers = Passengers::new();
        assert_eq!(passengers.add(&Occupant::from(c3po())), "c_3po");
        assert_eq!(passengers.add(&anakin().into()), "anakin_skywalker");

        assert_eq!(passengers.get("c_3po").unwrap()["model"], json!("3PO unit"));
        assert_eq!(passengers.get("anakin_skywalker").unwrap()["birth_year"], json!("41.9BBY"));
    }

    #[test]
    fn empty_composites_display_as_empty() {
        assert_eq!(Crew::new().to_string(), "");
        assert_eq!(Passengers::new().to_string(), "");
        assert_eq!(Passengers::new().jsonable(), json!([]));
    }
}
