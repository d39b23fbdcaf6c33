use serde::{Deserialize, Serialize};

/// Parallel label/value sequences ready for a charting layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries<V> {
    pub labels: Vec<String>,
    pub values: Vec<V>,
}

impl<V> ChartSeries<V> {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.labels.iter().map(String::as_str).zip(self.values.iter())
    }
}

impl<L: Into<String>, V> FromIterator<(L, V)> for ChartSeries<V> {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let (labels, values): (Vec<String>, Vec<V>) = iter
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .unzip();
        Self { labels, values }
    }
}
