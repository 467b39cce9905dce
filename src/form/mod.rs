pub(crate) mod schema;
pub(crate) mod values;
