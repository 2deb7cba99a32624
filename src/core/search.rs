use crate::core::filter::{apply_filters, build_predicates};
use crate::core::paginate::paginate;
use crate::core::sort::sort_records;
use crate::domain::model::Record;
use crate::domain::ports::UniversityRepository;
use crate::domain::query::{PageRequest, UniversityQuery, DEFAULT_LIMIT};
use crate::utils::error::{ApiError, Result};
use serde::Serialize;
use std::sync::Arc;

/// `GET /universities` 的回應
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub items: Vec<Record>,
    pub count: usize,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub sort: String,
}

/// Filter → sort → paginate over a freshly loaded record set.
pub struct SearchService {
    repository: Arc<dyn UniversityRepository>,
    default_limit: usize,
}

impl SearchService {
    pub fn new(repository: Arc<dyn UniversityRepository>) -> Self {
        Self {
            repository,
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, default_limit: usize) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Storage failures degrade to an empty collection.
    pub async fn load_records(&self) -> Vec<Record> {
        match self.repository.load_all().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "⚠️ Failed to load universities from {}: {} (serving empty result)",
                    self.repository.describe(),
                    e
                );
                Vec::new()
            }
        }
    }

    pub async fn search(&self, query: &UniversityQuery) -> Result<SearchPage> {
        let request = PageRequest::from_params(query.page, query.limit, self.default_limit)?;
        check_finite(query)?;

        let sort = query.sort_key();
        let predicates = build_predicates(query);

        let records = self.load_records().await;
        let loaded = records.len();

        let mut matched = apply_filters(records, &predicates);
        let total = matched.len();
        sort_records(&mut matched, sort);

        let items = paginate(matched, request);
        tracing::debug!(
            "📋 search: {} loaded, {} predicates, {} matched, page {} -> {} items",
            loaded,
            predicates.len(),
            total,
            request.page,
            items.len()
        );

        Ok(SearchPage {
            count: items.len(),
            items,
            total,
            page: request.page,
            limit: request.limit,
            sort: sort.as_str().to_string(),
        })
    }

    /// 依 id 查詢單筆資料，第一筆符合者勝出
    pub async fn find_by_id(&self, id: &str) -> Result<Record> {
        self.load_records()
            .await
            .into_iter()
            .find(|record| record.id_string().as_deref() == Some(id))
            .ok_or_else(|| ApiError::NotFoundError { id: id.to_string() })
    }
}

fn check_finite(query: &UniversityQuery) -> Result<()> {
    let numeric = [
        ("min_tuition", query.min_tuition),
        ("max_tuition", query.max_tuition),
        ("min_acceptance", query.min_acceptance),
        ("max_acceptance", query.max_acceptance),
        ("min_gpa", query.min_gpa),
        ("max_gpa", query.max_gpa),
        ("min_ielts", query.min_ielts),
        ("max_ielts", query.max_ielts),
        ("budget", query.budget),
    ];

    for (field, value) in numeric {
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            return Err(ApiError::InvalidParameterError {
                field: field.to_string(),
                value: v.to_string(),
                reason: "Value must be a finite number".to_string(),
            });
        }
    }
    Ok(())
}
