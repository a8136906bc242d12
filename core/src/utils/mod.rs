pub(crate) mod compression;
pub(crate) mod encoding;
pub(crate) mod error;
pub(crate) mod logging;
pub(crate) mod nom_helper;
pub(crate) mod output;
pub(crate) mod regex_options;
pub mod time;
pub(crate) mod uuid;
