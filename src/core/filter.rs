use crate::domain::model::Record;
use crate::domain::query::UniversityQuery;

pub const NAME: &[&str] = &["name"];
pub const COUNTRY: &[&str] = &["location", "country"];
pub const CITY: &[&str] = &["location", "city"];
pub const STATE: &[&str] = &["location", "state"];
pub const MAJORS: &[&str] = &["academics", "majors"];
pub const STUDY_LEVELS: &[&str] = &["academics", "study_levels"];
pub const FORMATS: &[&str] = &["academics", "formats"];
pub const ACCEPTANCE: &[&str] = &["academics", "acceptance_rate_percent"];
pub const TUITION: &[&str] = &["finance", "tuition_year_usd"];
pub const TOTAL_COST: &[&str] = &["finance", "total_cost_year_usd"];
pub const FINANCIAL_AID: &[&str] = &["finance", "financial_aid_available"];
pub const GPA: &[&str] = &["exams_avg", "GPA"];
pub const IELTS: &[&str] = &["exams_avg", "IELTS"];
pub const SIZE: &[&str] = &["student_life", "size"];

type FieldPath = &'static [&'static str];

/// 單一查詢條件
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// case-insensitive substring on a string field
    Contains { path: FieldPath, needle: String },
    /// case-insensitive equality on a string field
    Equals { path: FieldPath, value: String },
    /// any list element contains the needle
    AnyContains { path: FieldPath, needle: String },
    /// any list element equals the value
    AnyEquals { path: FieldPath, value: String },
    /// inclusive range; absent values never match
    Range {
        path: FieldPath,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// cost <= budget OR financial aid available
    Budget(f64),
    FinancialAid(bool),
}

impl Predicate {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Contains { path, needle } => record
                .str_at(path)
                .map(|s| s.to_lowercase().contains(needle.as_str()))
                .unwrap_or(false),
            Predicate::Equals { path, value } => record
                .str_at(path)
                .map(|s| s.trim().to_lowercase() == *value)
                .unwrap_or(false),
            Predicate::AnyContains { path, needle } => record
                .list_at(path)
                .iter()
                .any(|item| item.to_lowercase().contains(needle.as_str())),
            Predicate::AnyEquals { path, value } => record
                .list_at(path)
                .iter()
                .any(|item| item.trim().to_lowercase() == *value),
            Predicate::Range { path, min, max } => match record.f64_at(path) {
                Some(v) => min.map_or(true, |m| v >= m) && max.map_or(true, |m| v <= m),
                None => false,
            },
            Predicate::Budget(budget) => {
                record_cost(record).map_or(false, |cost| cost <= *budget)
                    || record.bool_at(FINANCIAL_AID)
            }
            Predicate::FinancialAid(wanted) => record.bool_at(FINANCIAL_AID) == *wanted,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Predicate::Contains { path, .. }
            | Predicate::Equals { path, .. }
            | Predicate::AnyContains { path, .. }
            | Predicate::AnyEquals { path, .. }
            | Predicate::Range { path, .. } => path.join("."),
            Predicate::Budget(_) => "budget".to_string(),
            Predicate::FinancialAid(_) => FINANCIAL_AID.join("."),
        }
    }
}

/// Yearly cost: total cost if present, otherwise tuition. An absent cost never fits a budget.
pub fn record_cost(record: &Record) -> Option<f64> {
    record
        .f64_at(TOTAL_COST)
        .or_else(|| record.f64_at(TUITION))
}

fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

fn range(path: FieldPath, min: Option<f64>, max: Option<f64>) -> Option<Predicate> {
    if min.is_none() && max.is_none() {
        return None;
    }
    Some(Predicate::Range { path, min, max })
}

/// 由查詢參數建立條件清單；未提供的參數不產生條件
pub fn build_predicates(query: &UniversityQuery) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    if let Some(needle) = normalized(&query.q) {
        predicates.push(Predicate::Contains { path: NAME, needle });
    }
    for (path, raw) in [
        (COUNTRY, &query.country),
        (CITY, &query.city),
        (STATE, &query.state),
    ] {
        if let Some(value) = normalized(raw) {
            predicates.push(Predicate::Equals { path, value });
        }
    }
    if let Some(needle) = normalized(&query.major) {
        predicates.push(Predicate::AnyContains {
            path: MAJORS,
            needle,
        });
    }
    if let Some(value) = normalized(&query.study_level) {
        predicates.push(Predicate::AnyEquals {
            path: STUDY_LEVELS,
            value,
        });
    }
    if let Some(value) = normalized(&query.format) {
        predicates.push(Predicate::AnyEquals {
            path: FORMATS,
            value,
        });
    }
    if let Some(value) = normalized(&query.size) {
        predicates.push(Predicate::Equals { path: SIZE, value });
    }

    predicates.extend(
        [
            range(TUITION, query.min_tuition, query.max_tuition),
            range(ACCEPTANCE, query.min_acceptance, query.max_acceptance),
            range(GPA, query.min_gpa, query.max_gpa),
            range(IELTS, query.min_ielts, query.max_ielts),
        ]
        .into_iter()
        .flatten(),
    );

    if let Some(aid) = query.financial_aid {
        predicates.push(Predicate::FinancialAid(aid));
    }
    if let Some(budget) = query.budget {
        predicates.push(Predicate::Budget(budget));
    }

    predicates
}

/// Narrows `records` by every predicate in turn (logical AND).
pub fn apply_filters(mut records: Vec<Record>, predicates: &[Predicate]) -> Vec<Record> {
    for predicate in predicates {
        let before = records.len();
        records.retain(|record| predicate.matches(record));
        tracing::debug!(
            "🔎 filter {}: {} -> {} records",
            predicate.label(),
            before,
            records.len()
        );
    }
    records
}
