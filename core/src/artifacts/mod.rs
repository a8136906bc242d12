pub(crate) mod error;
pub mod os;
pub(crate) mod output;
pub(crate) mod windows_collection;
