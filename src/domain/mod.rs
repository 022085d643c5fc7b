// Domain layer: puzzle data model and the seams between parsing, solving and input.

pub mod model;
pub mod ports;
