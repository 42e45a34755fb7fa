use std::path::Path;

use crate::error::RankerError;
use crate::models::{Candidate, Employer, Record, Schema};
use crate::services::documents::read_paragraphs;

/// Gap placed between paragraphs before re-splitting into blocks
const BLOCK_SEPARATOR: &str = "\n\n";

/// Rebuild record blocks from parsed paragraphs.
///
/// Paragraphs are joined with a blank-line gap and split on it again, so
/// each block is the list of trimmed lines of one paragraph.
pub fn split_blocks<S: AsRef<str>>(paragraphs: &[S]) -> Vec<Vec<String>> {
    let joined = paragraphs
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR);

    joined
        .split(BLOCK_SEPARATOR)
        .map(|block| {
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|lines| !lines.is_empty())
        .collect()
}

/// Map every block onto the schema, dropping blocks that are too short
pub fn records_from_paragraphs<S: AsRef<str>>(
    paragraphs: &[S],
    schema: &Schema,
) -> Result<Vec<Record>, RankerError> {
    let blocks = split_blocks(paragraphs);
    let mut records = Vec::with_capacity(blocks.len());
    let mut skipped = 0;

    for (index, lines) in blocks.iter().enumerate() {
        match schema.from_positional(lines.as_slice(), index)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(
            "Skipped {} {} block(s) with fewer than {} lines",
            skipped,
            schema.entity,
            schema.required_count()
        );
    }

    Ok(records)
}

pub fn employers_from_paragraphs<S: AsRef<str>>(
    paragraphs: &[S],
) -> Result<Vec<Employer>, RankerError> {
    let records = records_from_paragraphs(paragraphs, &Employer::SCHEMA)?;
    Ok(records.iter().map(Employer::from_record).collect())
}

pub fn candidates_from_paragraphs<S: AsRef<str>>(
    paragraphs: &[S],
) -> Result<Vec<Candidate>, RankerError> {
    let records = records_from_paragraphs(paragraphs, &Candidate::SCHEMA)?;
    Ok(records.iter().map(Candidate::from_record).collect())
}

/// Load employers from a source document
pub fn load_employers<P: AsRef<Path>>(path: P) -> Result<Vec<Employer>, RankerError> {
    let paragraphs = read_paragraphs(&path)?;
    let employers = employers_from_paragraphs(&paragraphs)?;
    tracing::debug!("Loaded {} employers from {}", employers.len(), path.as_ref().display());
    Ok(employers)
}

/// Load candidates from a source document
pub fn load_candidates<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, RankerError> {
    let paragraphs = read_paragraphs(&path)?;
    let candidates = candidates_from_paragraphs(&paragraphs)?;
    tracing::debug!("Loaded {} candidates from {}", candidates.len(), path.as_ref().display());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_blocks_one_per_paragraph() {
        let blocks = split_blocks(&["1\nAcme", "2\nGlobex\nx"]);
        assert_eq!(
            blocks,
            vec![
                vec!["1".to_string(), "Acme".to_string()],
                vec!["2".to_string(), "Globex".to_string(), "x".to_string()],
            ]
        );
    }

    #[test]
    fn test_split_blocks_empty_input() {
        let paragraphs: Vec<String> = vec![];
        assert!(split_blocks(&paragraphs).is_empty());
    }

    #[test]
    fn test_employer_positional_mapping() {
        let paragraphs = ["7\nAcme\nNeed Python backend engineer\nRemote\n50000\n90000.5\n3\n4"];
        let employers = employers_from_paragraphs(&paragraphs).unwrap();

        assert_eq!(
            employers,
            vec![Employer {
                id: 7,
                name: "Acme".to_string(),
                job_description: "Need Python backend engineer".to_string(),
                location: "Remote".to_string(),
                min_salary: 50000.0,
                max_salary: 90000.5,
                education_level: 3,
                experience_required: 4,
            }]
        );
    }

    #[test]
    fn test_employer_defaults_for_missing_trailing_fields() {
        let paragraphs = ["1\nAcme\nNeed Python backend engineer\nRemote\n40000"];
        let employer = &employers_from_paragraphs(&paragraphs).unwrap()[0];

        assert_eq!(employer.min_salary, 40000.0);
        assert_eq!(employer.max_salary, 0.0);
        assert_eq!(employer.education_level, 0);
        assert_eq!(employer.experience_required, 0);
    }

    #[test]
    fn test_short_blocks_are_dropped_silently() {
        let paragraphs = [
            "1\nAcme\nJob",
            "2\nGlobex\nGo developer\nBerlin",
            "just a name",
        ];
        let employers = employers_from_paragraphs(&paragraphs).unwrap();
        assert_eq!(employers.len(), 1);
        assert_eq!(employers[0].name, "Globex");
    }

    #[test]
    fn test_candidate_positional_mapping() {
        let paragraphs = [
            "Alice\nExperienced Python backend developer\nRemote\nTrue\n90000\n2\n6",
            "Bob\nFrontend designer\nNYC\nfalse\n70000",
        ];
        let candidates = candidates_from_paragraphs(&paragraphs).unwrap();

        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].willing_to_relocate);
        assert_eq!(candidates[0].education_level, 2);
        assert_eq!(candidates[0].years_experience, 6);
        assert!(!candidates[1].willing_to_relocate);
        assert_eq!(candidates[1].expected_salary, 70000.0);
        assert_eq!(candidates[1].education_level, 0);
        assert_eq!(candidates[1].years_experience, 0);
    }

    #[test]
    fn test_candidate_requires_salary_line() {
        let paragraphs = ["Carol\nRust developer\nParis\ntrue"];
        assert!(candidates_from_paragraphs(&paragraphs).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_salary_fails_load() {
        let paragraphs = [
            "Alice\nPython developer\nRemote\ntrue\n90000",
            "Bob\nFrontend designer\nNYC\nfalse\nninety-k",
        ];
        let err = candidates_from_paragraphs(&paragraphs).unwrap_err();
        match err {
            RankerError::Validation { entity, field, value, block, .. } => {
                assert_eq!(entity, "candidate");
                assert_eq!(field, "expected_salary");
                assert_eq!(value, "ninety-k");
                assert_eq!(block, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_employer_id_fails_load() {
        let paragraphs = ["one\nAcme\nJob\nRemote"];
        assert!(matches!(
            employers_from_paragraphs(&paragraphs),
            Err(RankerError::Validation { field: "id", .. })
        ));
    }
}
