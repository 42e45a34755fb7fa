//! CV Ranker - ranks job candidates against employer postings
//!
//! Employers and candidates are read from flat text documents, mapped onto
//! typed records and ranked per employer by TF-IDF cosine similarity between
//! the job description and each résumé.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{load_candidates, load_employers, rank_candidates, similarity_scores, DataSources, DuplicateIdPolicy, Matcher};
pub use error::RankerError;
pub use models::{Candidate, Dataset, Employer, MatchSet, ScoredCandidate};
pub use services::SnapshotStore;
