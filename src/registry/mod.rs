pub(crate) mod stage;
