//! Response DTOs for the REST surface.

pub mod response;
