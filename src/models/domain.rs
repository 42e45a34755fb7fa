use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::record::{FieldKind, FieldSpec, Record, Schema};

/// Employer posting with the job description candidates are ranked against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    pub id: i64,
    pub name: String,
    pub job_description: String,
    pub location: String,
    #[serde(default)]
    pub min_salary: f64,
    #[serde(default)]
    pub max_salary: f64,
    /// Ordinal education code
    #[serde(default)]
    pub education_level: i64,
    #[serde(default)]
    pub experience_required: i64,
}

impl Employer {
    pub const SCHEMA: Schema = Schema {
        entity: "employer",
        fields: &[
            FieldSpec::required("id", FieldKind::Integer),
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::required("job_description", FieldKind::Text),
            FieldSpec::required("location", FieldKind::Text),
            FieldSpec::optional("min_salary", FieldKind::Float),
            FieldSpec::optional("max_salary", FieldKind::Float),
            FieldSpec::optional("education_level", FieldKind::Integer),
            FieldSpec::optional("experience_required", FieldKind::Integer),
        ],
    };

    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.integer("id"),
            name: record.text("name"),
            job_description: record.text("job_description"),
            location: record.text("location"),
            min_salary: record.float("min_salary"),
            max_salary: record.float("max_salary"),
            education_level: record.integer("education_level"),
            experience_required: record.integer("experience_required"),
        }
    }
}

/// Job candidate with résumé text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub cv_text: String,
    pub current_location: String,
    pub willing_to_relocate: bool,
    pub expected_salary: f64,
    #[serde(default)]
    pub education_level: i64,
    #[serde(default)]
    pub years_experience: i64,
}

impl Candidate {
    pub const SCHEMA: Schema = Schema {
        entity: "candidate",
        fields: &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::required("cv_text", FieldKind::Text),
            FieldSpec::required("current_location", FieldKind::Text),
            FieldSpec::required("willing_to_relocate", FieldKind::Flag),
            FieldSpec::required("expected_salary", FieldKind::Float),
            FieldSpec::optional("education_level", FieldKind::Integer),
            FieldSpec::optional("years_experience", FieldKind::Integer),
        ],
    };

    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.text("name"),
            cv_text: record.text("cv_text"),
            current_location: record.text("current_location"),
            willing_to_relocate: record.flag("willing_to_relocate"),
            expected_salary: record.float("expected_salary"),
            education_level: record.integer("education_level"),
            years_experience: record.integer("years_experience"),
        }
    }
}

/// One candidate's similarity to an employer's job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub name: String,
    pub score: f64,
}

/// Rankings keyed by employer name, in employer load order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSet {
    entries: Vec<(String, Vec<ScoredCandidate>)>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a ranking; a repeated employer name replaces the earlier
    /// ranking in place.
    pub fn insert(&mut self, employer_name: String, ranking: Vec<ScoredCandidate>) {
        match self.entries.iter_mut().find(|(name, _)| *name == employer_name) {
            Some(entry) => entry.1 = ranking,
            None => self.entries.push((employer_name, ranking)),
        }
    }

    pub fn get(&self, employer_name: &str) -> Option<&[ScoredCandidate]> {
        self.entries
            .iter()
            .find(|(name, _)| name == employer_name)
            .map(|(_, ranking)| ranking.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScoredCandidate])> {
        self.entries
            .iter()
            .map(|(name, ranking)| (name.as_str(), ranking.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MatchSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, ranking) in &self.entries {
            map.serialize_entry(name, ranking)?;
        }
        map.end()
    }
}

/// One full load of both source documents
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub employers: Vec<Employer>,
    pub candidates: Vec<Candidate>,
}
