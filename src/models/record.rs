use std::collections::BTreeMap;

use crate::error::RankerError;

/// Kind of value a schema field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    /// Case-insensitive "true"; any other text is false
    Flag,
}

impl FieldKind {
    fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "an integer",
            FieldKind::Float => "a number",
            FieldKind::Flag => "true/false",
        }
    }

    fn default_value(self) -> FieldValue {
        match self {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Integer => FieldValue::Integer(0),
            FieldKind::Float => FieldValue::Float(0.0),
            FieldKind::Flag => FieldValue::Flag(false),
        }
    }
}

/// A named field in a record schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }
}

/// Typed value of a single record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

/// Explicit schema for one entity kind.
///
/// Field order doubles as the legacy positional order, so required fields
/// must come before optional ones.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Number of leading fields a block must provide
    pub fn required_count(&self) -> usize {
        self.fields.iter().filter(|f| f.required).count()
    }

    /// Legacy adapter: map a block's positional lines onto named fields.
    ///
    /// Returns `Ok(None)` when the block has fewer lines than the schema
    /// requires. Absent optional fields get the kind's default; a present
    /// field that does not parse fails the whole block.
    pub fn from_positional<S: AsRef<str>>(
        &self,
        lines: &[S],
        block: usize,
    ) -> Result<Option<Record>, RankerError> {
        if lines.len() < self.required_count() {
            return Ok(None);
        }

        let mut values = BTreeMap::new();
        for (index, spec) in self.fields.iter().enumerate() {
            let value = match lines.get(index) {
                Some(raw) => self.parse_field(spec, raw.as_ref(), block)?,
                None => spec.kind.default_value(),
            };
            values.insert(spec.name, value);
        }

        Ok(Some(Record { values }))
    }

    fn parse_field(
        &self,
        spec: &FieldSpec,
        raw: &str,
        block: usize,
    ) -> Result<FieldValue, RankerError> {
        let text = raw.trim();
        let invalid = || RankerError::Validation {
            entity: self.entity,
            field: spec.name,
            expected: spec.kind.describe(),
            value: text.to_string(),
            block,
        };

        Ok(match spec.kind {
            FieldKind::Text => FieldValue::Text(text.to_string()),
            FieldKind::Integer => FieldValue::Integer(text.parse().map_err(|_| invalid())?),
            FieldKind::Float => FieldValue::Float(text.parse().map_err(|_| invalid())?),
            FieldKind::Flag => FieldValue::Flag(text.eq_ignore_ascii_case("true")),
        })
    }
}

/// Record keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: BTreeMap<&'static str, FieldValue>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn text(&self, field: &str) -> String {
        match self.values.get(field) {
            Some(FieldValue::Text(s)) => s.clone(),
            _ => String::new(),
        }
    }

    pub fn integer(&self, field: &str) -> i64 {
        match self.values.get(field) {
            Some(FieldValue::Integer(v)) => *v,
            _ => 0,
        }
    }

    pub fn float(&self, field: &str) -> f64 {
        match self.values.get(field) {
            Some(FieldValue::Float(v)) => *v,
            Some(FieldValue::Integer(v)) => *v as f64,
            _ => 0.0,
        }
    }

    pub fn flag(&self, field: &str) -> bool {
        matches!(self.values.get(field), Some(FieldValue::Flag(true)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
