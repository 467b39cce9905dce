pub(crate) mod simulator;
