use crate::utils::error::{ApiError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 與 `validate_range` 相同，但用於請求參數 (回傳 422 類錯誤)
pub fn validate_param_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ApiError::InvalidParameterError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("server.bind", "127.0.0.1:8000").is_ok());
        assert!(validate_socket_addr("server.bind", "0.0.0.0:0").is_ok());
        assert!(validate_socket_addr("server.bind", "localhost").is_err());
        assert!(validate_socket_addr("server.bind", "").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data.path", "data/universities.json").is_ok());
        assert!(validate_path("data.path", "").is_err());
        assert!(validate_path("data.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("search.default_limit", 20, 1, 500).is_ok());
        assert!(validate_range("search.default_limit", 0, 1, 500).is_err());
        assert!(validate_range("search.default_limit", 501, 1, 500).is_err());
    }

    #[test]
    fn test_validate_param_range_is_parameter_error() {
        let err = validate_param_range("limit", 0usize, 1, 500).unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameterError { .. }));
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("cors.allowed_origins", "http://localhost:5500").is_ok());
        assert!(validate_non_empty_string("cors.allowed_origins", "   ").is_err());
    }
}
