pub(crate) mod pipeline;
pub(crate) mod request;
pub(crate) mod response;
