//! Infrastructure layer: port traits plus concrete implementations.

pub mod memory;
pub mod ports;
pub mod responder;
