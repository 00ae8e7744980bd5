//! Ports - interface definitions the rest of the crate depends on

pub mod outbound;
