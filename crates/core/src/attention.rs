//! Students-needing-attention filter.
//!
//! The dean's attention query scans every student and keeps those matching
//! up to three independently optional criteria. The predicate lives here so
//! the filtering rules are unit-testable without a database.

/// Filter criteria parsed from the attention query string.
///
/// Every field is optional; an absent field does not constrain the result.
#[derive(Debug, Clone, Default)]
pub struct AttentionCriteria {
    /// Keep students whose effective GPA is strictly below this threshold.
    pub gpa_below: Option<f64>,
    /// Keep students with exactly this many prior decisions.
    pub warnings: Option<i64>,
    /// Keep students in exactly this department.
    pub department: Option<String>,
}

/// A student's standing as seen by the attention scan.
#[derive(Debug, Clone)]
pub struct StudentStanding<'a> {
    /// Profile GPA; `None` when the student has no profile record.
    pub gpa: Option<f64>,
    /// Count of academic decisions already issued against the student.
    pub prior_warnings: i64,
    /// Effective department, if any.
    pub department: Option<&'a str>,
}

/// Effective GPA used by the scan: missing profile data counts as 0.0.
pub fn effective_gpa(gpa: Option<f64>) -> f64 {
    gpa.unwrap_or(0.0)
}

/// Whether a student matches every supplied criterion.
pub fn needs_attention(standing: &StudentStanding<'_>, criteria: &AttentionCriteria) -> bool {
    if let Some(threshold) = criteria.gpa_below {
        if effective_gpa(standing.gpa) >= threshold {
            return false;
        }
    }
    if let Some(expected) = criteria.warnings {
        if standing.prior_warnings != expected {
            return false;
        }
    }
    if let Some(ref dept) = criteria.department {
        if standing.department != Some(dept.as_str()) {
            return false;
        }
    }
    true
}
