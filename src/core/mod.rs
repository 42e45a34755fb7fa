// Core algorithm exports
pub mod loader;
pub mod matcher;
pub mod similarity;
pub mod tokenizer;

pub use loader::{load_candidates, load_employers, split_blocks};
pub use matcher::{rank_candidates, DataSources, DuplicateIdPolicy, Matcher};
pub use similarity::{cosine_similarity, similarity_scores, TfIdfModel};
pub use tokenizer::tokenize;
