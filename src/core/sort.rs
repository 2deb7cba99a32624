use crate::core::filter::{ACCEPTANCE, GPA, IELTS, TUITION};
use crate::domain::model::Record;
use crate::domain::query::SortKey;
use std::cmp::Ordering;

/// Orders two optional keys; `None` always goes last regardless of direction.
fn missing_last<T, F>(a: Option<T>, b: Option<T>, ascending: bool, cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => {
            let ordering = cmp(&a, &b);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_name(a: &Record, b: &Record, ascending: bool) -> Ordering {
    missing_last(
        a.name().map(str::to_lowercase),
        b.name().map(str::to_lowercase),
        ascending,
        |x, y| x.cmp(y),
    )
}

fn by_number(a: &Record, b: &Record, path: &[&str], ascending: bool) -> Ordering {
    missing_last(a.f64_at(path), b.f64_at(path), ascending, |x, y| x.total_cmp(y))
}

/// 穩定排序：相同鍵值維持原本順序
pub fn sort_records(records: &mut [Record], key: SortKey) {
    match key {
        SortKey::NameAsc => records.sort_by(|a, b| by_name(a, b, true)),
        SortKey::NameDesc => records.sort_by(|a, b| by_name(a, b, false)),
        SortKey::TuitionAsc => records.sort_by(|a, b| by_number(a, b, TUITION, true)),
        SortKey::TuitionDesc => records.sort_by(|a, b| by_number(a, b, TUITION, false)),
        SortKey::AcceptanceAsc => records.sort_by(|a, b| by_number(a, b, ACCEPTANCE, true)),
        SortKey::AcceptanceDesc => records.sort_by(|a, b| by_number(a, b, ACCEPTANCE, false)),
        SortKey::GpaDesc => records.sort_by(|a, b| by_number(a, b, GPA, false)),
        SortKey::IeltsDesc => records.sort_by(|a, b| by_number(a, b, IELTS, false)),
    }
}
