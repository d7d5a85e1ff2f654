//! Starship assembly: attaching a [`Crew`] or [`Passengers`] to a [`Starship`].
//!
//! Attachment is all-or-nothing. A value of the right composite type replaces the slot; any
//! other value clears the slot to `None` without failing, and the rejection is reported to the
//! observer when one is supplied.

use std::fmt;

use crate::entity::{Crew, Droid, Entity, Occupant, Passengers, Person, Starship};
use crate::ingestion::{AttachmentCleared, CatalogObserver};

/// Anything a caller might try to attach to a starship slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    Crew(Crew),
    Passengers(Passengers),
    /// A lone person or droid (not wrapped in a composite).
    Occupant(Occupant),
    /// Nothing at all.
    Empty,
}

impl Attachment {
    /// Short name of the carried value, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Crew(_) => "crew",
            Self::Passengers(_) => "passengers",
            Self::Occupant(o) => o.kind(),
            Self::Empty => "none",
        }
    }
}

impl From<Crew> for Attachment {
    fn from(crew: Crew) -> Self {
        Self::Crew(crew)
    }
}

impl From<Passengers> for Attachment {
    fn from(passengers: Passengers) -> Self {
        Self::Passengers(passengers)
    }
}

impl From<Occupant> for Attachment {
    fn from(occupant: Occupant) -> Self {
        Self::Occupant(occupant)
    }
}

impl From<Person> for Attachment {
    fn from(person: Person) -> Self {
        Self::Occupant(person.into())
    }
}

impl From<Droid> for Attachment {
    fn from(droid: Droid) -> Self {
        Self::Occupant(droid.into())
    }
}

impl<T: Into<Attachment>> From<Option<T>> for Attachment {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Which starship slot an attachment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentSlot {
    CrewMembers,
    PassengersOnBoard,
}

impl fmt::Display for AttachmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CrewMembers => "crew_members",
            Self::PassengersOnBoard => "passengers_on_board",
        })
    }
}

/// Result of an attachment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// The value was attached.
    Accepted,
    /// The value had the wrong type; the slot is now `None`.
    Cleared { found: &'static str },
}

impl AttachOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Attach a crew to `starship`. Any value other than a [`Crew`] clears `crew_members`.
pub fn assign_crew(
    starship: &mut Starship,
    value: impl Into<Attachment>,
    observer: Option<&dyn CatalogObserver>,
) -> AttachOutcome {
    match value.into() {
        Attachment::Crew(crew) => {
            starship.crew_members = Some(crew);
            AttachOutcome::Accepted
        }
        other => {
            starship.crew_members = None;
            cleared(starship, AttachmentSlot::CrewMembers, &other, observer)
        }
    }
}

/// Attach passengers to `starship`. Any value other than [`Passengers`] clears
/// `passengers_on_board`.
pub fn attach_passengers(
    starship: &mut Starship,
    value: impl Into<Attachment>,
    observer: Option<&dyn CatalogObserver>,
) -> AttachOutcome {
    match value.into() {
        Attachment::Passengers(passengers) => {
            starship.passengers_on_board = Some(passengers);
            AttachOutcome::Accepted
        }
        other => {
            starship.passengers_on_board = None;
            cleared(starship, AttachmentSlot::PassengersOnBoard, &other, observer)
        }
    }
}

fn cleared(
    starship: &Starship,
    slot: AttachmentSlot,
    offered: &Attachment,
    observer: Option<&dyn CatalogObserver>,
) -> AttachOutcome {
    let found = offered.type_name();
    if let Some(obs) = observer {
        obs.on_attachment_cleared(&AttachmentCleared {
            starship: starship.name.clone(),
            slot,
            found,
        });
    }
    AttachOutcome::Cleared { found }
}
