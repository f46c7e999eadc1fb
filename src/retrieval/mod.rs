pub mod corpus;
pub mod inverted_index;
pub mod search_engine;
pub mod server;
pub mod stopwords;
pub mod term_weighting;
pub mod text_operations;
