use crate::core::{Animal, AnimalProfile, LivingBeing};
use crate::utils::error::{ParkError, Result};

/// Labels accepted by [`animal_from_species`].
pub const KNOWN_SPECIES: [&str; 3] = ["dog", "spider", "snake"];

/// Four legs, two eyes.
#[derive(Debug)]
pub struct Dog {
    profile: AnimalProfile,
}

impl Dog {
    pub fn new() -> Self {
        Self {
            profile: AnimalProfile::new(4, 2),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            profile: AnimalProfile::new(4, 2).with_name(name),
        }
    }
}

impl Default for Dog {
    fn default() -> Self {
        Self::new()
    }
}

impl LivingBeing for Dog {}

impl Animal for Dog {
    fn profile(&self) -> &AnimalProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut AnimalProfile {
        &mut self.profile
    }

    fn species(&self) -> &'static str {
        "dog"
    }

    fn walk(&self) -> String {
        match self.legs() {
            0 => "drags itself forward".to_string(),
            n => format!("trots on {} legs", n),
        }
    }
}

/// Eight legs, eight eyes.
#[derive(Debug)]
pub struct Spider {
    profile: AnimalProfile,
}

impl Spider {
    pub fn new() -> Self {
        Self {
            profile: AnimalProfile::new(8, 8),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            profile: AnimalProfile::new(8, 8).with_name(name),
        }
    }
}

impl Default for Spider {
    fn default() -> Self {
        Self::new()
    }
}

impl LivingBeing for Spider {}

impl Animal for Spider {
    fn profile(&self) -> &AnimalProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut AnimalProfile {
        &mut self.profile
    }

    fn species(&self) -> &'static str {
        "spider"
    }

    fn walk(&self) -> String {
        match self.legs() {
            0 => "curls up and stays put".to_string(),
            n => format!("scuttles on {} legs", n),
        }
    }
}

/// No legs at all; walking happens anyway.
#[derive(Debug)]
pub struct Snake {
    profile: AnimalProfile,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            profile: AnimalProfile::new(0, 2),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            profile: AnimalProfile::new(0, 2).with_name(name),
        }
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl LivingBeing for Snake {}

impl Animal for Snake {
    fn profile(&self) -> &AnimalProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut AnimalProfile {
        &mut self.profile
    }

    fn species(&self) -> &'static str {
        "snake"
    }

    fn walk(&self) -> String {
        // Legs play no part here, whatever the counter says
        "slithers".to_string()
    }
}

/// Resolve a species label to a boxed animal.
///
/// Labels are trimmed and matched case-insensitively; anything outside
/// [`KNOWN_SPECIES`] is rejected with [`ParkError::UnknownSpecies`].
pub fn animal_from_species(species: &str, name: Option<&str>) -> Result<Box<dyn Animal>> {
    let mut animal: Box<dyn Animal> = match species.trim().to_ascii_lowercase().as_str() {
        "dog" => Box::new(Dog::new()),
        "spider" => Box::new(Spider::new()),
        "snake" => Box::new(Snake::new()),
        _ => {
            return Err(ParkError::UnknownSpecies {
                species: species.to_string(),
            });
        }
    };

    if let Some(name) = name {
        animal.profile_mut().set_name(name);
    }

    tracing::debug!(
        "Created {} '{}'",
        animal.species(),
        animal.name().unwrap_or("unnamed")
    );
    Ok(animal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_defaults() {
        let dog = Dog::new();
        assert_eq!(dog.legs(), 4);
        assert_eq!(dog.eyes(), 2);

        let spider = Spider::new();
        assert_eq!(spider.legs(), 8);
        assert_eq!(spider.eyes(), 8);

        let snake = Snake::new();
        assert_eq!(snake.legs(), 0);
        assert_eq!(snake.eyes(), 2);
    }

    #[test]
    fn test_walk_descriptions_follow_the_leg_count() {
        assert_eq!(Dog::new().walk(), "trots on 4 legs");
        assert_eq!(Spider::new().walk(), "scuttles on 8 legs");
        assert_eq!(Snake::new().walk(), "slithers");

        let mut dog = Dog::new();
        dog.lose_leg();
        assert_eq!(dog.walk(), "trots on 3 legs");

        dog.set_legs(0);
        assert_eq!(dog.walk(), "drags itself forward");
    }

    #[test]
    fn test_factory_resolves_known_labels() {
        for label in KNOWN_SPECIES {
            let animal = animal_from_species(label, None).unwrap();
            assert_eq!(animal.species(), label);
        }
    }

    #[test]
    fn test_factory_is_case_insensitive_and_trims() {
        let animal = animal_from_species("  Spider ", None).unwrap();
        assert_eq!(animal.species(), "spider");

        let animal = animal_from_species("SNAKE", None).unwrap();
        assert_eq!(animal.species(), "snake");
    }

    #[test]
    fn test_factory_attaches_the_given_name() {
        let animal = animal_from_species("dog", Some("Rex")).unwrap();
        assert_eq!(animal.name(), Some("Rex"));

        let unnamed = animal_from_species("dog", None).unwrap();
        assert_eq!(unnamed.name(), None);
    }

    #[test]
    fn test_factory_rejects_unknown_species() {
        let result = animal_from_species("unicorn", None);
        assert!(matches!(
            result,
            Err(ParkError::UnknownSpecies { ref species }) if species == "unicorn"
        ));
    }
}
