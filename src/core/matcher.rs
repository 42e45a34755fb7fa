use std::path::PathBuf;

use serde::Deserialize;

use crate::core::{loader, similarity::similarity_scores};
use crate::error::RankerError;
use crate::models::{Candidate, Dataset, Employer, MatchSet, ScoredCandidate};

/// Locations of the two source documents
#[derive(Debug, Clone)]
pub struct DataSources {
    pub employers: PathBuf,
    pub candidates: PathBuf,
}

/// How an employer lookup resolves repeated identifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// First employer with the id wins
    #[default]
    FirstMatch,
    /// Ambiguous lookups fail with `DuplicateEmployerId`
    Reject,
}

/// Rank candidates against one employer's job description.
///
/// Descending by score; equal scores keep candidate load order.
pub fn rank_candidates(employer: &Employer, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
    let texts: Vec<&str> = candidates.iter().map(|c| c.cv_text.as_str()).collect();
    let scores = similarity_scores(&employer.job_description, texts.as_slice());

    let mut ranked: Vec<ScoredCandidate> = candidates
        .iter()
        .zip(scores)
        .map(|(candidate, score)| ScoredCandidate {
            name: candidate.name.clone(),
            score,
        })
        .collect();

    // sort_by is stable, which keeps ties in load order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Matching orchestrator.
///
/// Every public operation re-reads both source documents; nothing is
/// cached between calls. Use `SnapshotStore` to serve from memory.
#[derive(Debug, Clone)]
pub struct Matcher {
    sources: DataSources,
    duplicate_ids: DuplicateIdPolicy,
}

impl Matcher {
    pub fn new(sources: DataSources, duplicate_ids: DuplicateIdPolicy) -> Self {
        Self {
            sources,
            duplicate_ids,
        }
    }

    pub fn sources(&self) -> &DataSources {
        &self.sources
    }

    pub fn duplicate_ids(&self) -> DuplicateIdPolicy {
        self.duplicate_ids
    }

    /// Employer directory, freshly loaded
    pub fn load_employers(&self) -> Result<Vec<Employer>, RankerError> {
        loader::load_employers(&self.sources.employers)
    }

    /// Load both documents, employers first
    pub fn load_dataset(&self) -> Result<Dataset, RankerError> {
        let employers = loader::load_employers(&self.sources.employers)?;
        let candidates = loader::load_candidates(&self.sources.candidates)?;
        Ok(Dataset {
            employers,
            candidates,
        })
    }

    /// Rankings for every employer
    pub fn compute_matches(&self) -> Result<MatchSet, RankerError> {
        let dataset = self.load_dataset()?;
        Ok(self.match_all(&dataset))
    }

    /// Ranking for one employer; empty when the id is unknown
    pub fn candidates_for_employer(
        &self,
        employer_id: i64,
    ) -> Result<Vec<ScoredCandidate>, RankerError> {
        let dataset = self.load_dataset()?;
        self.match_employer(&dataset, employer_id)
    }

    pub fn match_all(&self, dataset: &Dataset) -> MatchSet {
        let mut results = MatchSet::new();
        for employer in &dataset.employers {
            let ranked = rank_candidates(employer, &dataset.candidates);
            results.insert(employer.name.clone(), ranked);
        }

        tracing::info!(
            "Ranked {} candidates for {} employers",
            dataset.candidates.len(),
            dataset.employers.len()
        );
        results
    }

    pub fn match_employer(
        &self,
        dataset: &Dataset,
        employer_id: i64,
    ) -> Result<Vec<ScoredCandidate>, RankerError> {
        let employer = match self.find_employer(&dataset.employers, employer_id)? {
            Some(employer) => employer,
            None => {
                tracing::debug!("No employer with id {}", employer_id);
                return Ok(Vec::new());
            }
        };

        Ok(rank_candidates(employer, &dataset.candidates))
    }

    fn find_employer<'a>(
        &self,
        employers: &'a [Employer],
        employer_id: i64,
    ) -> Result<Option<&'a Employer>, RankerError> {
        let mut matching = employers.iter().filter(|e| e.id == employer_id);
        let first = matching.next();

        if first.is_some() && matching.next().is_some() {
            match self.duplicate_ids {
                DuplicateIdPolicy::FirstMatch => {
                    tracing::warn!("Employer id {} is not unique, using first match", employer_id);
                }
                DuplicateIdPolicy::Reject => {
                    return Err(RankerError::DuplicateEmployerId(employer_id));
                }
            }
        }

        Ok(first)
    }
}
