pub(crate) mod qr;
pub(crate) mod upc;
