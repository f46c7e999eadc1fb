mod corpus_stats;
mod document;
mod query;
mod search_result;
mod search_session;

pub use corpus_stats::{CorpusStats, TermFrequency};
pub use document::{convert_scraped_date, Document};
pub use query::SearchQuery;
pub use search_result::{SearchResponse, SearchResult};
pub use search_session::{SearchPhase, SearchSession};
