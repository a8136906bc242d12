pub(crate) mod csv;
pub(crate) mod error;
pub(crate) mod json;
pub(crate) mod jsonl;
pub(crate) mod report;
