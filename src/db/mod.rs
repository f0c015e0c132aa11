pub mod match_queries;

pub use match_queries::{connect_with_retry, MatchStore};
