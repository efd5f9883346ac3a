pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::menagerie::{Census, Menagerie};
pub use crate::core::species::{animal_from_species, Dog, Snake, Spider, KNOWN_SPECIES};
pub use crate::domain::model::{AnimalProfile, LegCount, PLANET};
pub use crate::domain::ports::{Animal, LivingBeing};
pub use crate::utils::error::{ParkError, Result};
