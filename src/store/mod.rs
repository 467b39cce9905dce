pub(crate) mod json_file;
pub(crate) mod repository;
