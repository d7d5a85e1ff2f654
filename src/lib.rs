//! `swapi-entities` turns raw Star Wars catalog records into typed entities and writes them back
//! out as fixed-order JSON.
//!
//! Raw records come from CSV/JSON files ([`ingestion`]) or a catalog lookup ([`catalog`]). The
//! [`factory`] functions coerce each field with the [`convert`] helpers and build a
//! [`entity::Planet`], [`entity::Person`], [`entity::Droid`] or [`entity::Starship`]. People and
//! droids can be grouped into a [`entity::Crew`] or [`entity::Passengers`] and attached to a
//! starship through [`assembly`]. Every entity's [`entity::Entity::jsonable`] projection emits
//! its keys in a fixed order with `null` for absent values; [`export`] writes projections to disk.
//!
//! ## Field conventions
//!
//! - Empty strings, whitespace, `"unknown"` and `"n/a"` are absent ([`convert::is_blank`]).
//! - A literal `"0"` is a value, so zero suns and unknown suns stay distinguishable.
//! - A non-numeric value in a numeric field is a [`CatalogError::Conversion`]; a missing
//!   required field is a [`CatalogError::MissingField`].
//!
//! ## Quick example: droid from a raw record
//!
//! ```rust
//! use serde_json::json;
//! use swapi_entities::entity::Entity;
//! use swapi_entities::factory::create_droid;
//! use swapi_entities::types::RawRecord;
//!
//! let record: RawRecord = [
//!     ("url", "u1"),
//!     ("name", "R2-D2"),
//!     ("model", "R2-series"),
//!     ("height", "0.96"),
//!     ("equipment", "holoprojector|tools"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let r2 = create_droid(&record).unwrap();
//! assert_eq!(r2.jsonable()["equipment"], json!(["holoprojector", "tools"]));
//! assert_eq!(r2.jsonable()["mass_kg"], json!(null));
//! ```
//!
//! ## Assembling a starship
//!
//! ```rust
//! use swapi_entities::assembly::AttachOutcome;
//! use swapi_entities::entity::{Crew, Droid, Occupant, Passengers, Person, Starship};
//!
//! let mut twilight = Starship::new("s1", "Twilight", "G9 Rigger-class light freighter", "freighter");
//! let anakin = Person::new("p11", "Anakin Skywalker", "41.9BBY");
//! let obi_wan = Person::new("p10", "Obi-Wan Kenobi", "57BBY");
//!
//! let crew = Crew::from_roles([("pilot", anakin), ("copilot", obi_wan)]);
//! assert_eq!(crew.to_string(), "pilot: Anakin Skywalker, copilot: Obi-Wan Kenobi");
//! assert_eq!(twilight.assign_crew_members(crew), AttachOutcome::Accepted);
//!
//! let manifest: Vec<Occupant> = vec![
//!     Person::new("p35", "Padmé Amidala", "46BBY").into(),
//!     Droid::new("p2", "C-3PO", "3PO unit").into(),
//! ];
//! twilight.add_passengers(Passengers::from_list(&manifest));
//!
//! // A lone droid is not a crew: the slot is cleared instead of failing.
//! let outcome = twilight.assign_crew_members(Droid::new("p3", "R2-D2", "R2-series"));
//! assert_eq!(outcome, AttachOutcome::Cleared { found: "droid" });
//! assert!(twilight.crew_members.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the raw record type
//! - [`convert`]: scalar converters
//! - [`entity`]: entity types and composites
//! - [`factory`]: raw record → entity
//! - [`assembly`]: crew/passenger attachment
//! - [`catalog`]: lookup collaborator and homeworld resolution
//! - [`registry`]: run-scoped planet registry
//! - [`ingestion`]: CSV/JSON loading with observer hooks
//! - [`export`]: JSON output
//! - [`error`]: the shared error type

pub mod assembly;
pub mod catalog;
pub mod convert;
pub mod entity;
pub mod error;
pub mod export;
pub mod factory;
pub mod ingestion;
pub mod registry;
pub mod types;

pub use error::{CatalogError, CatalogResult};
