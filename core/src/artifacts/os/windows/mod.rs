pub(crate) mod artifacts;
pub mod error;
pub mod registry;
pub mod userassist;
