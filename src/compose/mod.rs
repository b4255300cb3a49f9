pub(crate) mod blend;
pub(crate) mod composer;
pub(crate) mod scene;
