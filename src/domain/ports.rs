use crate::domain::model::{AnimalProfile, PLANET};

/// Contract for anything alive.
///
/// `breathe` comes with the shared default every animal uses; species simply
/// take it over with an empty `impl` block.
pub trait LivingBeing {
    /// The breath sound. Fixed for every animal.
    fn breathe(&self) -> &'static str {
        tracing::debug!("schnauf");
        "schnauf"
    }
}

/// The animal contract: access to the shared profile, a species label, and
/// the one operation every species answers for itself.
///
/// `greet` and `planet` are fixed and never overridden; the leg, name and
/// eye accessors delegate to the embedded [`AnimalProfile`].
pub trait Animal: LivingBeing {
    fn profile(&self) -> &AnimalProfile;

    fn profile_mut(&mut self) -> &mut AnimalProfile;

    /// Species label used in reports and by the factory.
    fn species(&self) -> &'static str;

    /// How this animal moves, described with its current leg count.
    fn walk(&self) -> String;

    /// The fixed greeting.
    fn greet(&self) -> &'static str {
        "hey"
    }

    /// The planet every animal lives on.
    fn planet(&self) -> &'static str {
        PLANET
    }

    fn legs(&self) -> u32 {
        self.profile().legs()
    }

    /// Store a new leg count. Negative input is clamped to zero.
    fn set_legs(&mut self, raw: i64) {
        self.profile_mut().set_legs(raw);
    }

    /// Drop one leg, never below zero.
    fn lose_leg(&mut self) {
        self.profile_mut().lose_leg();
    }

    fn name(&self) -> Option<&str> {
        self.profile().name()
    }

    fn eyes(&self) -> u32 {
        self.profile().eyes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tripod {
        profile: AnimalProfile,
    }

    impl Tripod {
        fn new() -> Self {
            Self {
                profile: AnimalProfile::new(3, 2),
            }
        }
    }

    impl LivingBeing for Tripod {}

    impl Animal for Tripod {
        fn profile(&self) -> &AnimalProfile {
            &self.profile
        }

        fn profile_mut(&mut self) -> &mut AnimalProfile {
            &mut self.profile
        }

        fn species(&self) -> &'static str {
            "tripod"
        }

        fn walk(&self) -> String {
            format!("hobbles on {} legs", self.legs())
        }
    }

    #[test]
    fn test_default_greeting_is_hey() {
        let animal = Tripod::new();
        assert_eq!(animal.greet(), "hey");
    }

    #[test]
    fn test_default_planet_is_erde() {
        let animal = Tripod::new();
        assert_eq!(animal.planet(), "Erde");
        assert_eq!(animal.planet(), PLANET);
    }

    #[test]
    fn test_default_breath_sound_is_schnauf() {
        let animal = Tripod::new();
        assert_eq!(animal.breathe(), "schnauf");
    }

    #[test]
    fn test_accessors_delegate_to_the_profile() {
        let mut animal = Tripod::new();
        assert_eq!(animal.legs(), 3);
        assert_eq!(animal.eyes(), 2);
        assert_eq!(animal.name(), None);

        animal.set_legs(-1);
        assert_eq!(animal.legs(), 0);

        animal.set_legs(5);
        animal.lose_leg();
        assert_eq!(animal.legs(), 4);
    }

    #[test]
    fn test_trait_objects_are_supported() {
        let mut animal: Box<dyn Animal> = Box::new(Tripod::new());
        assert_eq!(animal.greet(), "hey");
        assert_eq!(animal.walk(), "hobbles on 3 legs");

        animal.lose_leg();
        assert_eq!(animal.walk(), "hobbles on 2 legs");
    }
}
