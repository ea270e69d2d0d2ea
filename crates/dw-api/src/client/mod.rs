pub(crate) mod connectivity;
pub(crate) mod http_client;
