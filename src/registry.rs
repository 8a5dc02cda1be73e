//! Chart registry.
//!
//! Each named chart has exactly one live instance for the life of the
//! dashboard. A refresh pushes new labels/values into the existing entry
//! instead of rebuilding it, so canvas redraws are driven by a generation
//! counter rather than by churning instances.

use std::collections::BTreeMap;

/// Rendering style of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    Bar,
    Line,
    Radar,
}

/// Drawable state of one chart: what to plot, plus identity bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Stable per-name instance id, assigned at creation.
    pub instance: u64,
    /// Bumped on every in-place update; redraw trigger.
    pub generation: u64,
}

/// Name → chart instance map. Create once, update in place.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: BTreeMap<&'static str, ChartData>,
    next_instance: u64,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the named chart if absent, then replace its data in place.
    /// The instance id survives updates; only the generation moves.
    pub fn update(
        &mut self,
        name: &'static str,
        kind: ChartKind,
        labels: Vec<String>,
        values: Vec<f64>,
    ) {
        match self.charts.get_mut(name) {
            Some(chart) => {
                chart.kind = kind;
                chart.labels = labels;
                chart.values = values;
                chart.generation += 1;
            }
            None => {
                self.next_instance += 1;
                self.charts.insert(
                    name,
                    ChartData {
                        kind,
                        labels,
                        values,
                        instance: self.next_instance,
                        generation: 0,
                    },
                );
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ChartData> {
        self.charts.get(name)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> (Vec<String>, Vec<f64>) {
        ((0..n).map(|i| format!("l{i}")).collect(), (0..n).map(|i| i as f64).collect())
    }

    #[test]
    fn repeated_updates_keep_one_instance_per_name() {
        let mut reg = ChartRegistry::new();
        for round in 0..5u64 {
            let (labels, values) = series(3 + round as usize);
            reg.update("risk", ChartKind::Doughnut, labels.clone(), values.clone());
            reg.update("hourly", ChartKind::Line, labels, values);
        }
        assert_eq!(reg.len(), 2);

        let risk = reg.get("risk").unwrap();
        assert_eq!(risk.instance, 1);
        assert_eq!(risk.generation, 4);
        assert_eq!(risk.labels.len(), 7);

        let hourly = reg.get("hourly").unwrap();
        assert_eq!(hourly.instance, 2);
    }

    #[test]
    fn update_replaces_data_wholesale() {
        let mut reg = ChartRegistry::new();
        reg.update("age", ChartKind::Bar, vec!["<30".into()], vec![25.0]);
        reg.update("age", ChartKind::Bar, vec!["30-50".into()], vec![45.0]);

        let age = reg.get("age").unwrap();
        assert_eq!(age.labels, ["30-50"]);
        assert_eq!(age.values, [45.0]);
    }

    #[test]
    fn missing_chart_is_none() {
        let reg = ChartRegistry::new();
        assert!(reg.get("performance").is_none());
        assert!(reg.is_empty());
    }
}
