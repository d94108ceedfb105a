use serde::Serialize;

use crate::stratum::StratumId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePoint {
    /// 1-based month.
    pub month: u32,
    pub value: f64,
    pub trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBar {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSlice {
    pub name: String,
    pub value: f64,
}

/// Display series for a panel's chart view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub time_series: Vec<TimePoint>,
    pub categories: Vec<CategoryBar>,
    pub groups: Vec<GroupSlice>,
}

/// Derives the chart series for a stratum from its id alone.
///
/// A pure function of the id so there is no second source of truth: same
/// id, same series, always. Callers may memoize per id.
pub fn chart_series(id: StratumId) -> ChartSeries {
    let seed = u64::from(id.0);
    let seed_f = seed as f64;

    let time_series = (0..12u64)
        .map(|i| {
            let jitter = ((seed * 31 + i * 7) % 10) as f64;
            TimePoint {
                month: i as u32 + 1,
                value: 30.0 + (i as f64 / 2.0 + seed_f / 10.0).sin() * 20.0 + jitter,
                trend: 20.0 + i as f64 * 3.0 + (seed % 5) as f64,
            }
        })
        .collect();

    let categories = [
        ("Category A", 40.0, 30u64),
        ("Category B", 30.0, 20),
        ("Category C", 50.0, 40),
        ("Category D", 35.0, 25),
        ("Category E", 45.0, 35),
    ]
    .into_iter()
    .map(|(name, base, modulus)| CategoryBar {
        name: name.to_string(),
        value: base + (seed % modulus) as f64,
    })
    .collect();

    let groups = [
        ("Group 1", 30.0, 20u64),
        ("Group 2", 25.0, 15),
        ("Group 3", 45.0, 30),
    ]
    .into_iter()
    .map(|(name, base, modulus)| GroupSlice {
        name: name.to_string(),
        value: base + (seed % modulus) as f64,
    })
    .collect();

    ChartSeries {
        time_series,
        categories,
        groups,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::chart_series;
    use crate::stratum::StratumId;

    #[test]
    fn series_is_deterministic_per_id() {
        assert_eq!(chart_series(StratumId(3)), chart_series(StratumId(3)));
    }

    #[test]
    fn different_ids_yield_different_series() {
        assert_ne!(chart_series(StratumId(1)), chart_series(StratumId(2)));
    }

    #[test]
    fn shapes_match_the_chart_views() {
        let series = chart_series(StratumId(7));
        assert_eq!(series.time_series.len(), 12);
        assert_eq!(series.time_series[0].month, 1);
        assert_eq!(series.categories.len(), 5);
        assert_eq!(series.groups.len(), 3);
    }
}
