//! Exact-match filtering over record collections.
//!
//! A [`RecordFilter`] selects the subsequence of a record slice whose
//! records satisfy every field=value constraint, preserving input order.
//! Filtering only reads; it is safe to run repeatedly and from multiple
//! concurrent readers over records nobody is mutating mid-scan.

use crate::error::{BiocatError, BiocatResult};
use crate::record::record::Record;
use serde_json::{Map, Value};

/// An exact-value predicate over named record fields.
///
/// Constraints are combined with logical AND; an empty predicate is the
/// identity filter. A constraint key that is not declared on a record's
/// schema fails with [`BiocatError::UnknownField`] rather than matching
/// nothing, so "no such field" stays distinguishable from "no matches".
///
/// # Examples
///
/// ```rust
/// use strenda_biocat::RecordFilter;
///
/// let filter = RecordFilter::new()
///     .field("name", "lipase")
///     .field("formulation", "lyophilized powder");
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    predicate: Map<String, Value>,
}

impl RecordFilter {
    /// Create an empty (identity) filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from an existing predicate mapping.
    pub fn from_predicate(predicate: Map<String, Value>) -> Self {
        Self { predicate }
    }

    /// Add a field=value constraint.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicate.insert(name.into(), value.into());
        self
    }

    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.predicate.len()
    }

    /// Whether this is the identity filter.
    pub fn is_empty(&self) -> bool {
        self.predicate.is_empty()
    }

    /// Select matching records, preserving their relative order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> BiocatResult<Vec<&'a Record>> {
        let mut matches = Vec::new();
        for record in records {
            if self.matches(record)? {
                matches.push(record);
            }
        }
        Ok(matches)
    }

    /// Whether a single record satisfies every constraint.
    ///
    /// Constraint keys are checked against the record's schema as they
    /// are evaluated; a record excluded by an earlier constraint is
    /// never probed for later keys.
    pub fn matches(&self, record: &Record) -> BiocatResult<bool> {
        for (field, expected) in &self.predicate {
            if !record.schema().has_field(field) {
                return Err(BiocatError::unknown_field(&record.schema().name, field));
            }
            match record.get(field) {
                Some(actual) if values_equal(actual, expected) => {}
                _ => return Ok(false),
            }
        }
        Ok(true)
    }
}

/// Exact value equality, with numbers compared by numeric value so that
/// a widened integer predicate still matches its stored float.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}
