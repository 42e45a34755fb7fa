// Model exports
pub mod domain;
pub mod record;
pub mod responses;

pub use domain::{Candidate, Dataset, Employer, MatchSet, ScoredCandidate};
pub use record::{FieldKind, FieldSpec, FieldValue, Record, Schema};
pub use responses::{ErrorResponse, HealthResponse, ReloadResponse};
