use std::fmt;

use serde::Serialize;

use crate::assembly::{self, AttachOutcome, Attachment};

use super::{Crew, Entity, Passengers};

/// A crewed vehicle used for traveling in realspace or hyperspace.
///
/// Crew and passengers are attached after construction, see [`crate::assembly`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Starship {
    pub url: String,
    pub name: String,
    /// Manufacturer's model name. Used as the display label, since names tend to be generic.
    pub model: String,
    pub starship_class: String,
    pub manufacturer: Option<String>,
    pub length_m: Option<f64>,
    /// Maximum sub-orbital speed.
    pub max_atmosphering_speed: Option<i64>,
    pub hyperdrive_rating: Option<f64>,
    /// Megalights per hour.
    #[serde(rename = "MGLT")]
    pub mglt: Option<i64>,
    pub armament: Option<Vec<String>>,
    pub crew_members: Option<Crew>,
    pub passengers_on_board: Option<Passengers>,
    pub cargo_capacity_kg: Option<f64>,
    /// Max period before on-board provisions must be replenished, e.g. `"2 months"`.
    pub consumables: Option<String>,
}

impl Starship {
    /// Create a starship with only the required fields set.
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        model: impl Into<String>,
        starship_class: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            model: model.into(),
            starship_class: starship_class.into(),
            manufacturer: None,
            length_m: None,
            max_atmosphering_speed: None,
            hyperdrive_rating: None,
            mglt: None,
            armament: None,
            crew_members: None,
            passengers_on_board: None,
            cargo_capacity_kg: None,
            consumables: None,
        }
    }

    /// Attach a crew. Anything that is not a [`Crew`] clears the slot.
    ///
    /// Shorthand for [`assembly::assign_crew`] without an observer.
    pub fn assign_crew_members(&mut self, crew: impl Into<Attachment>) -> AttachOutcome {
        assembly::assign_crew(self, crew, None)
    }

    /// Attach passengers. Anything that is not [`Passengers`] clears the slot.
    ///
    /// Shorthand for [`assembly::attach_passengers`] without an observer.
    pub fn add_passengers(&mut self, passengers: impl Into<Attachment>) -> AttachOutcome {
        assembly::attach_passengers(self, passengers, None)
    }
}

impl Entity for Starship {
    fn kind(&self) -> &'static str {
        "starship"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> String {
        self.model.clone()
    }
}

impl fmt::Display for Starship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::Starship;
    use crate::entity::Entity;

    #[test]
    fn projection_order_and_mglt_key() {
        let s = Starship::new("u", "Twilight", "G9 Rigger-class light freighter", "freighter");
        let json = s.jsonable();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "url",
                "name",
                "model",
                "starship_class",
                "manufacturer",
                "length_m",
                "max_atmosphering_speed",
                "hyperdrive_rating",
                "MGLT",
                "armament",
                "crew_members",
                "passengers_on_board",
                "cargo_capacity_kg",
                "consumables",
            ]
        );
        assert!(json["crew_members"].is_null());
    }

    #[test]
    fn display_uses_model() {
        let s = Starship::new("u", "Twilight", "G9 Rigger-class light freighter", "freighter");
        assert_eq!(s.to_string(), "G9 Rigger-class light freighter");
        assert_eq!(s.display_name(), "G9 Rigger-class light freighter");
    }
}
