pub mod menagerie;
pub mod species;

pub use crate::domain::model::AnimalProfile;
pub use crate::domain::ports::{Animal, LivingBeing};
pub use crate::utils::error::Result;
