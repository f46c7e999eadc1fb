mod embedded_search_backend;
mod http_search_backend;

pub use embedded_search_backend::EmbeddedSearchBackend;
pub use http_search_backend::HttpSearchBackend;
