// Domain layer: request/outcome models and the ports the engine is generic over.

pub mod model;
pub mod ports;
