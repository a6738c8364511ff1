// Domain layer: core models, the fixed column mapping and ports (interfaces).
// No dependencies beyond std/serde.

pub mod mapping;
pub mod model;
pub mod ports;
