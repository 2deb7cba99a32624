use crate::domain::model::coerce_f64;
use crate::utils::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Accepted exams and their inclusive score ranges.
pub const EXAM_RANGES: &[(&str, f64, f64)] = &[
    ("IELTS", 0.0, 9.0),
    ("TOEFL", 0.0, 120.0),
    ("DUOLINGO", 10.0, 160.0),
    ("SAT", 400.0, 1600.0),
    ("ACT", 1.0, 36.0),
    ("GRE", 260.0, 340.0),
    ("GMAT", 200.0, 800.0),
    ("GPA", 0.0, 4.0),
];

/// `POST /exams/validate` 的請求內容。欄位型別故意放寬，由驗證器回報錯誤。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExamScoreRequest {
    pub exam: Option<Value>,
    pub score: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamScore {
    pub ok: bool,
    pub exam: String,
    pub score: f64,
}

pub fn exam_range(exam: &str) -> Option<(f64, f64)> {
    let key = exam.trim().to_uppercase();
    EXAM_RANGES
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|(_, min, max)| (*min, *max))
}

pub fn validate_exam_score(request: &ExamScoreRequest) -> Result<ExamScore> {
    let exam = match &request.exam {
        None | Some(Value::Null) => return Err(ApiError::validation("Field 'exam' is required")),
        Some(Value::String(e)) if e.trim().is_empty() => {
            return Err(ApiError::validation("Field 'exam' is required"))
        }
        Some(Value::String(e)) => e.trim().to_uppercase(),
        Some(other) => {
            return Err(ApiError::validation(format!(
                "Field 'exam' must be a string, got {}",
                other
            )))
        }
    };

    let raw_score = match &request.score {
        None | Some(Value::Null) => return Err(ApiError::validation("Field 'score' is required")),
        Some(v) => v,
    };
    let score = coerce_f64(raw_score)
        .ok_or_else(|| ApiError::validation(format!("Score must be numeric, got {}", raw_score)))?;

    let (min, max) = exam_range(&exam).ok_or_else(|| {
        let known: Vec<&str> = EXAM_RANGES.iter().map(|(name, _, _)| *name).collect();
        ApiError::validation(format!(
            "Unknown exam '{}'. Supported exams: {}",
            exam,
            known.join(", ")
        ))
    })?;

    if score < min || score > max {
        return Err(ApiError::validation(format!(
            "Score for {} must be between {} and {}, got {}",
            exam, min, max, score
        )));
    }

    Ok(ExamScore {
        ok: true,
        exam,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(exam: Option<&str>, score: Option<Value>) -> ExamScoreRequest {
        ExamScoreRequest {
            exam: exam.map(|e| json!(e)),
            score,
        }
    }

    #[test]
    fn test_valid_score_is_normalized() {
        let result = validate_exam_score(&request(Some(" ielts "), Some(json!(7.0)))).unwrap();
        assert_eq!(
            result,
            ExamScore {
                ok: true,
                exam: "IELTS".to_string(),
                score: 7.0
            }
        );
    }

    #[test]
    fn test_score_above_max_fails() {
        let err = validate_exam_score(&request(Some("ielts"), Some(json!(9.5)))).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError { .. }));
        assert!(err.to_string().contains("IELTS"));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(validate_exam_score(&request(Some("SAT"), Some(json!(400)))).is_ok());
        assert!(validate_exam_score(&request(Some("SAT"), Some(json!(1600)))).is_ok());
        assert!(validate_exam_score(&request(Some("SAT"), Some(json!(399)))).is_err());
        assert!(validate_exam_score(&request(Some("GPA"), Some(json!(-0.1)))).is_err());
    }

    #[test]
    fn test_numeric_string_score_is_parsed() {
        let result = validate_exam_score(&request(Some("toefl"), Some(json!("105")))).unwrap();
        assert_eq!(result.exam, "TOEFL");
        assert_eq!(result.score, 105.0);
    }

    #[test]
    fn test_missing_or_malformed_input() {
        assert!(validate_exam_score(&request(None, Some(json!(7)))).is_err());
        assert!(validate_exam_score(&request(Some("  "), Some(json!(7)))).is_err());
        assert!(validate_exam_score(&request(Some("IELTS"), None)).is_err());
        assert!(validate_exam_score(&request(Some("IELTS"), Some(Value::Null))).is_err());
        assert!(validate_exam_score(&request(Some("IELTS"), Some(json!("seven")))).is_err());
        assert!(validate_exam_score(&request(Some("IELTS"), Some(json!([7])))).is_err());
    }

    #[test]
    fn test_non_string_exam_is_a_validation_error() {
        let numeric = ExamScoreRequest {
            exam: Some(json!(5)),
            score: Some(json!(7)),
        };
        let err = validate_exam_score(&numeric).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError { .. }));
        assert_eq!(err.to_string(), "Field 'exam' must be a string, got 5");

        let list = ExamScoreRequest {
            exam: Some(json!(["IELTS"])),
            score: Some(json!(7)),
        };
        assert!(matches!(
            validate_exam_score(&list),
            Err(ApiError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_unknown_exam() {
        let err = validate_exam_score(&request(Some("MCAT"), Some(json!(500)))).unwrap_err();
        assert!(err.to_string().contains("Unknown exam 'MCAT'"));
    }

    #[test]
    fn test_exam_range_lookup() {
        assert_eq!(exam_range("gre"), Some((260.0, 340.0)));
        assert_eq!(exam_range("unknown"), None);
    }
}
