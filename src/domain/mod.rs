// Domain layer: the animal model and its ports (traits).

pub mod model;
pub mod ports;
