use crate::core::{Animal, LivingBeing};
use crate::utils::error::{ParkError, Result};

/// Park-wide totals reported by [`Menagerie::census`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    pub animals: usize,
    pub named: usize,
    pub total_legs: u64,
    pub total_eyes: u64,
}

/// A heterogeneous collection of animals, kept in admission order.
pub struct Menagerie {
    animals: Vec<Box<dyn Animal>>,
    reporting: bool,
}

impl Menagerie {
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
            reporting: false,
        }
    }

    /// Like [`Menagerie::new`], with census stats logged via `tracing`.
    pub fn with_reporting(reporting: bool) -> Self {
        Self {
            animals: Vec::new(),
            reporting,
        }
    }

    pub fn admit(&mut self, animal: Box<dyn Animal>) {
        tracing::debug!(
            "Admitting {} '{}'",
            animal.species(),
            animal.name().unwrap_or("unnamed")
        );
        self.animals.push(animal);
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// First animal carrying the given name.
    pub fn find(&self, name: &str) -> Option<&dyn Animal> {
        self.animals
            .iter()
            .find(|animal| animal.name() == Some(name))
            .map(|animal| animal.as_ref())
    }

    /// Remove and hand back the first animal carrying the given name.
    pub fn dismiss(&mut self, name: &str) -> Result<Box<dyn Animal>> {
        let position = self
            .animals
            .iter()
            .position(|animal| animal.name() == Some(name));

        match position {
            Some(index) => {
                tracing::debug!("Dismissing '{}'", name);
                Ok(self.animals.remove(index))
            }
            None => Err(ParkError::AnimalNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Every animal's greeting, in admission order.
    pub fn greet_all(&self) -> Vec<&'static str> {
        self.animals.iter().map(|animal| animal.greet()).collect()
    }

    /// Every animal's gait description, in admission order.
    pub fn walk_all(&self) -> Vec<String> {
        tracing::debug!("Walking {} animals", self.animals.len());
        self.animals.iter().map(|animal| animal.walk()).collect()
    }

    /// Every animal's breath sound, in admission order.
    pub fn breathe_all(&self) -> Vec<&'static str> {
        self.animals.iter().map(|animal| animal.breathe()).collect()
    }

    /// Count animals, names, legs and eyes across the park.
    ///
    /// An empty park yields the zero census.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for animal in &self.animals {
            census.animals += 1;
            if animal.name().is_some() {
                census.named += 1;
            }
            census.total_legs = census.total_legs.saturating_add(u64::from(animal.legs()));
            census.total_eyes = census.total_eyes.saturating_add(u64::from(animal.eyes()));
        }

        if self.reporting {
            tracing::info!(
                "Census - Animals: {}, Named: {}, Legs: {}, Eyes: {}",
                census.animals,
                census.named,
                census.total_legs,
                census.total_eyes
            );
        }

        census
    }
}

impl Default for Menagerie {
    fn default() -> Self {
        Self::new()
    }
}
