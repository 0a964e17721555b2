use crate::models::{ClickSummary, DisplayClick};

pub fn summarize(rows: &[DisplayClick]) -> ClickSummary {
    ClickSummary {
        total: rows.len(),
        with_city: rows.iter().filter(|row| !row.city.is_empty()).count(),
        with_path: rows.iter().filter(|row| !row.path.is_empty()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::map_clicks;
    use crate::models::Timezone;
    use crate::sample::sample_clicks;

    #[test]
    fn summary_counts_sample_rows() {
        let rows = map_clicks(&sample_clicks(), Timezone::Utc).unwrap();
        let summary = summarize(&rows);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.with_city, 3);
        assert_eq!(summary.with_path, 5);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(
            summarize(&[]),
            ClickSummary {
                total: 0,
                with_city: 0,
                with_path: 0
            }
        );
    }
}
