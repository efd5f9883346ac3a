use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkError {
    #[error("Unknown species: {species} (known species: dog, spider, snake)")]
    UnknownSpecies { species: String },

    #[error("No animal named '{name}' in the park")]
    AnimalNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, ParkError>;
