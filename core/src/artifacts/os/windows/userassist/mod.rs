pub mod assist;
pub mod error;
pub mod events;
mod folders;
pub mod layout;
pub mod parser;
mod registry;
pub mod report;
pub mod session;
