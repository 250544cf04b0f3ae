// Domain layer: value types and the traits the core implements.

pub mod model;
pub mod ports;
