// Domain layer: run model and ports. Adapters live under config/.

pub mod model;
pub mod ports;
