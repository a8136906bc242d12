//! Decode Windows `UserAssist` execution history.
//!
//! Value names are ROT13 encoded and value data uses one of several binary layouts.
//! The crate reads both from a [`RegistryStore`](artifacts::os::windows::registry::store::RegistryStore),
//! produces version independent records and can write them as csv, json or jsonl.

pub mod artifacts;
pub mod core;
pub mod error;
mod filesystem;
mod output;
pub mod structs;
pub mod utils;
