//! `ob-location` — the sites people move between.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`kind`]        | `LocationKind` and category-tag parsing                    |
//! | [`location`]    | `Location`, `Contamination`, `DisinfectOutcome`            |
//! | [`interaction`] | `Mixing`, `RestaurantMixing`, `InteractionReport`          |
//! | [`index`]       | `LocationIndex` — ids grouped by kind                      |
//! | [`roster`]      | `LocationDescriptor`, `load_roster_csv`, `load_roster_reader` |
//! | [`error`]       | `LocationError`, `LocationResult<T>`                       |
//!
//! # Interaction contract
//!
//! Once per turn, after every person has moved, each location receives the
//! ids of exactly the people standing in it and may expose any of them,
//! using pathogens carried by contagious patrons or its own contamination.
//! The list of people present is never altered by an interaction.

pub mod error;
pub mod index;
pub mod interaction;
pub mod kind;
pub mod location;
pub mod roster;


pub use error::{LocationError, LocationResult};
pub use index::LocationIndex;
pub use interaction::{InteractionReport, Mixing, RestaurantMixing};
pub use kind::{LocationKind, parse_category_tag};
pub use location::{Contamination, DisinfectOutcome, Location};
pub use roster::{LocationDescriptor, load_roster_csv, load_roster_reader};
