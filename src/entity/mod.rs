//! Typed catalog entities and their fixed-order JSON projections.
//!
//! Every entity serializes its fields in declaration order (the crate enables
//! `serde_json/preserve_order`), and absent optional values are emitted as `null` rather than
//! omitted. Consumers of the exported JSON depend on both properties.
//!
//! - [`Planet`], [`Person`], [`Droid`], [`Starship`]: value objects built by [`crate::factory`]
//! - [`Occupant`]: a [`Person`] or a [`Droid`], the unit a crew or passenger manifest holds
//! - [`Crew`], [`Passengers`]: composites attached to a [`Starship`] by [`crate::assembly`]

mod composite;
mod droid;
mod person;
mod planet;
mod starship;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

pub use composite::{Crew, PassengerEntry, Passengers, passenger_key};
pub use droid::Droid;
pub use person::Person;
pub use planet::Planet;
pub use starship::Starship;

/// Capabilities shared by every catalog entity.
pub trait Entity: Serialize {
    /// Short lowercase kind name (`"planet"`, `"person"`, ...), used in diagnostics.
    fn kind(&self) -> &'static str;

    /// Stable external identifier/locator.
    fn url(&self) -> &str;

    /// Entity name.
    fn name(&self) -> &str;

    /// Human-facing label. Defaults to the name.
    fn display_name(&self) -> String {
        self.name().to_owned()
    }

    /// Canonical JSON projection, keys in fixed order.
    fn jsonable(&self) -> Value {
        // Entities are string-keyed structs, so conversion to a JSON value cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl<T: Entity + ?Sized> Entity for &T {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn url(&self) -> &str {
        (**self).url()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn display_name(&self) -> String {
        (**self).display_name()
    }

    fn jsonable(&self) -> Value {
        (**self).jsonable()
    }
}

/// A crew member or passenger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Occupant {
    /// An organic being.
    Person(Person),
    /// A droid.
    Droid(Droid),
}

impl Occupant {
    /// The person, if this occupant is one.
    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Self::Person(p) => Some(p),
            Self::Droid(_) => None,
        }
    }

    /// The droid, if this occupant is one.
    pub fn as_droid(&self) -> Option<&Droid> {
        match self {
            Self::Droid(d) => Some(d),
            Self::Person(_) => None,
        }
    }
}

impl Entity for Occupant {
    fn kind(&self) -> &'static str {
        match self {
            Self::Person(p) => p.kind(),
            Self::Droid(d) => d.kind(),
        }
    }

    fn url(&self) -> &str {
        match self {
            Self::Person(p) => p.url(),
            Self::Droid(d) => d.url(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Person(p) => p.name(),
            Self::Droid(d) => d.name(),
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Person> for Occupant {
    fn from(p: Person) -> Self {
        Self::Person(p)
    }
}

impl From<Droid> for Occupant {
    fn from(d: Droid) -> Self {
        Self::Droid(d)
    }
}

impl From<&Person> for Occupant {
    fn from(p: &Person) -> Self {
        Self::Person(p.clone())
    }
}

impl From<&Droid> for Occupant {
    fn from(d: &Droid) -> Self {
        Self::Droid(d.clone())
    }
}

impl From<&Occupant> for Occupant {
    fn from(o: &Occupant) -> Self {
        o.clone()
    }
}
