use crate::domain::query::{PageRequest, MAX_LIMIT};
use crate::utils::error::Result;
use crate::utils::validation::validate_param_range;

impl PageRequest {
    /// 驗證 page/limit；未提供時使用預設值
    pub fn from_params(page: Option<usize>, limit: Option<usize>, default_limit: usize) -> Result<Self> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(default_limit);

        validate_param_range("page", page, 1, usize::MAX)?;
        validate_param_range("limit", limit, 1, MAX_LIMIT)?;

        Ok(Self { page, limit })
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Returns the `[offset, offset + limit)` window; empty when the offset is past the end.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Vec<T> {
    items
        .into_iter()
        .skip(request.offset())
        .take(request.limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ApiError;

    #[test]
    fn test_defaults() {
        let request = PageRequest::from_params(None, None, 20).unwrap();
        assert_eq!(request, PageRequest { page: 1, limit: 20 });
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_rejects_out_of_domain_values() {
        for (page, limit) in [(Some(0), None), (None, Some(0)), (None, Some(501))] {
            let err = PageRequest::from_params(page, limit, 20).unwrap_err();
            assert!(matches!(err, ApiError::InvalidParameterError { .. }));
        }
        assert!(PageRequest::from_params(Some(1), Some(500), 20).is_ok());
    }

    #[test]
    fn test_slices_requested_page() {
        let items: Vec<u32> = (1..=25).collect();

        let first = paginate(items.clone(), PageRequest { page: 1, limit: 10 });
        assert_eq!(first, (1..=10).collect::<Vec<_>>());

        let last = paginate(items.clone(), PageRequest { page: 3, limit: 10 });
        assert_eq!(last, vec![21, 22, 23, 24, 25]);

        let beyond = paginate(items, PageRequest { page: 4, limit: 10 });
        assert!(beyond.is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let request = PageRequest {
            page: usize::MAX,
            limit: MAX_LIMIT,
        };
        assert!(paginate(vec![1, 2, 3], request).is_empty());
    }

    #[test]
    fn test_count_never_exceeds_limit_or_total() {
        let items: Vec<u32> = (0..37).collect();
        for limit in [1, 5, 10, 36, 37, 100] {
            for page in 1..=10 {
                let total = items.len();
                let count = paginate(items.clone(), PageRequest { page, limit }).len();
                assert!(count <= limit);
                assert!(count <= total);
            }
        }
    }
}
