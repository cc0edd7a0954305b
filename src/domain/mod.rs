// Domain layer: request/material types and the collaborator ports the provisioner is built on.

pub mod model;
pub mod ports;
