pub mod error;
pub mod export;
pub mod memory;
pub mod store;
