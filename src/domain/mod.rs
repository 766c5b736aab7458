// Domain layer: the check's value types and the collaborator port.

pub mod model;
pub mod ports;
