// Record shapes, the resource port and the domain type vocabulary.

pub mod model;
pub mod ports;
pub mod types;
