// Domain layer: records, per-tournament outcomes and the ports the pipeline is built on.

pub mod model;
pub mod ports;
