//! Entity factories: raw catalog records in, fully populated entities out.
//!
//! Each factory reads the catalog's native field names (`height`, `mass`, `orbital_period`, ...),
//! renames them to the entity's attribute names, and runs every optional field through the
//! matching converter from [`crate::convert`]. Absent or blank optional fields become `None`;
//! a missing required field is [`CatalogError::MissingField`]; a malformed optional value is
//! [`CatalogError::Conversion`]. Factories never hand back a partially built entity.

use serde_json::Value;

use crate::catalog::{CatalogSource, ResourceKind, resolve_record};
use crate::convert::{self, Gravity};
use crate::entity::{Droid, Person, Planet, Starship};
use crate::error::CatalogResult;
use crate::types::RawRecord;

/// Build a [`Planet`].
///
/// | source field | attribute | conversion |
/// |---|---|---|
/// | `suns`, `moons` | same | int |
/// | `orbital_period` | `orbital_period_days` | float |
/// | `diameter` | `diameter_km` | int |
/// | `gravity` | `gravity_std` | gravity |
/// | `climate`, `terrain` | same | list, `", "` |
/// | `population` | same | int |
/// | `region`, `sector` | same | text |
pub fn create_planet(record: &RawRecord) -> CatalogResult<Planet> {
    const ENTITY: &str = "planet";

    let url = record.require(ENTITY, "url")?;
    let name = record.require(ENTITY, "name")?;

    Ok(Planet {
        region: optional_text(record, "region"),
        sector: optional_text(record, "sector"),
        suns: optional_int(record, "suns")?,
        moons: optional_int(record, "moons")?,
        orbital_period_days: optional_float(record, "orbital_period")?,
        diameter_km: optional_int(record, "diameter")?,
        gravity_std: optional_gravity(record, "gravity")?,
        climate: optional_list(record, "climate", ", "),
        terrain: optional_list(record, "terrain", ", "),
        population: optional_int(record, "population")?,
        ..Planet::new(url, name)
    })
}

/// Build a [`Droid`]. `height`/`mass` become `height_m`/`mass_kg` (float) and `equipment` is a
/// `|`-separated list.
pub fn create_droid(record: &RawRecord) -> CatalogResult<Droid> {
    const ENTITY: &str = "droid";

    let url = record.require(ENTITY, "url")?;
    let name = record.require(ENTITY, "name")?;
    let model = record.require(ENTITY, "model")?;

    Ok(Droid {
        manufacturer: optional_text(record, "manufacturer"),
        create_year: optional_text(record, "create_year"),
        height_m: optional_float(record, "height")?,
        mass_kg: optional_float(record, "mass")?,
        equipment: optional_list(record, "equipment", "|"),
        ..Droid::new(url, name, model)
    })
}

/// Build a [`Starship`] without crew or passengers.
///
/// `length` → `length_m`, `cargo_capacity` → `cargo_capacity_kg` (float); `max_atmosphering_speed`
/// tolerates a trailing `km`; `armament` is a `,`-separated list.
pub fn create_starship(record: &RawRecord) -> CatalogResult<Starship> {
    const ENTITY: &str = "starship";

    let url = record.require(ENTITY, "url")?;
    let name = record.require(ENTITY, "name")?;
    let model = record.require(ENTITY, "model")?;
    let starship_class = record.require(ENTITY, "starship_class")?;

    let max_atmosphering_speed = match record.text("max_atmosphering_speed") {
        Some(raw) => match convert::to_none(&raw) {
            Some(v) => Some(convert::to_int(
                "max_atmosphering_speed",
                v.strip_suffix("km").unwrap_or(v),
            )?),
            None => None,
        },
        None => None,
    };

    Ok(Starship {
        manufacturer: optional_text(record, "manufacturer"),
        length_m: optional_float(record, "length")?,
        max_atmosphering_speed,
        hyperdrive_rating: optional_float(record, "hyperdrive_rating")?,
        mglt: optional_int(record, "MGLT")?,
        armament: optional_list(record, "armament", ","),
        cargo_capacity_kg: optional_float(record, "cargo_capacity")?,
        consumables: optional_text(record, "consumables"),
        ..Starship::new(url, name, model, starship_class)
    })
}

/// Build a [`Person`], resolving `homeworld` through `catalog`.
///
/// The homeworld name is looked up case-insensitively; every record in `supplemental_planets`
/// whose name matches is merged over the catalog record before it goes through
/// [`create_planet`]. The person keeps a snapshot of that planet. A blank homeworld leaves
/// `homeworld` as `None`; a homeworld the catalog cannot find is an error.
pub fn create_person<S>(
    record: &RawRecord,
    catalog: &S,
    supplemental_planets: &[RawRecord],
) -> CatalogResult<Person>
where
    S: CatalogSource + ?Sized,
{
    const ENTITY: &str = "person";

    let url = record.require(ENTITY, "url")?;
    let name = record.require(ENTITY, "name")?;
    let birth_year = record.require(ENTITY, "birth_year")?;

    let homeworld = match optional_text(record, "homeworld") {
        Some(query) => {
            let planet = resolve_record(catalog, ResourceKind::Planets, &query, supplemental_planets)?;
            Some(create_planet(&planet)?)
        }
        None => None,
    };

    let force_sensitive = match record.get("force_sensitive") {
        Some(Value::Bool(b)) => *b,
        _ => match record.text("force_sensitive") {
            Some(raw) => match convert::to_none(&raw) {
                Some(v) => convert::to_bool("force_sensitive", v)?,
                None => false,
            },
            None => false,
        },
    };

    Ok(Person {
        height_m: optional_float(record, "height")?,
        mass_kg: optional_float(record, "mass")?,
        homeworld,
        force_sensitive,
        ..Person::new(url, name, birth_year)
    })
}

fn optional_text(record: &RawRecord, field: &str) -> Option<String> {
    let raw = record.text(field)?;
    convert::to_none(&raw).map(str::to_owned)
}

fn optional_int(record: &RawRecord, field: &str) -> CatalogResult<Option<i64>> {
    if let Some(n) = record.get(field).and_then(Value::as_i64) {
        return Ok(Some(n));
    }
    optional_text(record, field)
        .map(|v| convert::to_int(field, &v))
        .transpose()
}

fn optional_float(record: &RawRecord, field: &str) -> CatalogResult<Option<f64>> {
    if let Some(n) = record.get(field).and_then(Value::as_f64) {
        return Ok(Some(n));
    }
    optional_text(record, field)
        .map(|v| convert::to_float(field, &v))
        .transpose()
}

fn optional_gravity(record: &RawRecord, field: &str) -> CatalogResult<Option<Gravity>> {
    optional_text(record, field)
        .map(|v| convert::convert_gravity_value(field, &v))
        .transpose()
}

/// Lists arrive either as delimited text or, from JSON sources, as arrays of strings.
fn optional_list(record: &RawRecord, field: &str, separator: &str) -> Option<Vec<String>> {
    let items: Vec<String> = match record.get(field)? {
        Value::Array(values) => values
            .iter()
            .filter_map(Value::as_str)
            .filter_map(convert::to_none)
            .map(str::to_owned)
            .collect(),
        _ => convert::to_list(&optional_text(record, field)?, separator),
    };
    if items.is_empty() { None } else { Some(items) }
}
