use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Формат, в котором бэкенд принимает `LocalDateTime` в query-параметрах
pub const QUERY_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Период в календарных днях (включительно с обеих сторон)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Создать период; если границы перепутаны, они меняются местами
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Последние `days` дней, заканчивая `today`
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self::new(today - Duration::days(days), today)
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// Границы периода для query-параметров: начало первого дня и конец последнего
    pub fn bounds(&self) -> (String, String) {
        let start = self
            .start
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.format(QUERY_DATETIME_FORMAT).to_string())
            .unwrap_or_default();
        let end = self
            .end
            .and_hms_opt(23, 59, 59)
            .map(|dt| dt.format(QUERY_DATETIME_FORMAT).to_string())
            .unwrap_or_default();
        (start, end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Query-параметры `fechaInicio`/`fechaFin`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeQuery {
    #[serde(rename = "fechaInicio")]
    pub fecha_inicio: String,
    #[serde(rename = "fechaFin")]
    pub fecha_fin: String,
}

impl From<DateRange> for DateRangeQuery {
    fn from(range: DateRange) -> Self {
        let (fecha_inicio, fecha_fin) = range.bounds();
        Self {
            fecha_inicio,
            fecha_fin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_last_seven_days() {
        let range = DateRange::last_days(d(2024, 3, 15), 7);
        assert_eq!(range.start, d(2024, 3, 8));
        assert_eq!(range.end, d(2024, 3, 15));
    }

    #[test]
    fn test_bounds_cover_whole_days() {
        let range = DateRange::single_day(d(2024, 1, 6));
        assert_eq!(
            range.bounds(),
            (
                "2024-01-06T00:00:00".to_string(),
                "2024-01-06T23:59:59".to_string()
            )
        );
    }

    #[test]
    fn test_new_swaps_reversed_bounds() {
        let range = DateRange::new(d(2024, 5, 2), d(2024, 5, 1));
        assert_eq!(range.start, d(2024, 5, 1));
        assert!(range.contains(d(2024, 5, 2)));
    }
}
