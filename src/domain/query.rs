use serde::{Deserialize, Serialize};

pub const MAX_LIMIT: usize = 500;
pub const DEFAULT_LIMIT: usize = 20;

/// `GET /universities` 的查詢參數。所有條件都是選填。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniversityQuery {
    pub q: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub major: Option<String>,
    pub study_level: Option<String>,
    pub format: Option<String>,
    pub size: Option<String>,

    pub min_tuition: Option<f64>,
    pub max_tuition: Option<f64>,
    pub min_acceptance: Option<f64>,
    pub max_acceptance: Option<f64>,
    pub min_gpa: Option<f64>,
    pub max_gpa: Option<f64>,
    pub min_ielts: Option<f64>,
    pub max_ielts: Option<f64>,

    pub budget: Option<f64>,
    pub financial_aid: Option<bool>,

    pub sort: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl UniversityQuery {
    pub fn sort_key(&self) -> SortKey {
        self.sort.as_deref().map(SortKey::parse).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    TuitionAsc,
    TuitionDesc,
    AcceptanceAsc,
    AcceptanceDesc,
    GpaDesc,
    IeltsDesc,
}

impl SortKey {
    /// Unknown keys fall back to `name_asc`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "name_desc" => SortKey::NameDesc,
            "tuition_asc" => SortKey::TuitionAsc,
            "tuition_desc" => SortKey::TuitionDesc,
            "acceptance_asc" => SortKey::AcceptanceAsc,
            "acceptance_desc" => SortKey::AcceptanceDesc,
            "gpa_desc" => SortKey::GpaDesc,
            "ielts_desc" => SortKey::IeltsDesc,
            _ => SortKey::NameAsc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::TuitionAsc => "tuition_asc",
            SortKey::TuitionDesc => "tuition_desc",
            SortKey::AcceptanceAsc => "acceptance_asc",
            SortKey::AcceptanceDesc => "acceptance_desc",
            SortKey::GpaDesc => "gpa_desc",
            SortKey::IeltsDesc => "ielts_desc",
        }
    }
}

/// 已驗證的分頁參數 (page >= 1, 1 <= limit <= 500)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}
