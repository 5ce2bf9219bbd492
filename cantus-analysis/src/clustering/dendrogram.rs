//! The dendrogram produced by clustering one feature table.

use serde::{Deserialize, Serialize};
use serde_json::json;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::stats::FeatureTable;

use super::linkage::{average_linkage, Merge};

/// One node of the dendrogram: a leaf (a single item) or a merged
/// cluster. Carries the aggregated frequency profile of its leaves and
/// the homogeneity p-value of the merge that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DendrogramNode {
    pub id: usize,
    pub descr: String,
    pub leaf_labels: Vec<String>,
    /// Merge height; zero for leaves.
    pub height: f64,
    /// Chi-squared homogeneity p-value between the two children of the
    /// merge; 1.0 for leaves.
    pub p_value: f64,
    pub columns: Vec<String>,
    pub abs_freqs: Vec<f64>,
}

impl DendrogramNode {
    pub fn num_leaves(&self) -> usize {
        self.leaf_labels.len()
    }

    /// The relative-frequency distribution of the node in percent.
    pub fn distribution(&self) -> Vec<f64> {
        let total: f64 = self.abs_freqs.iter().sum();
        if total <= 0.0 {
            return vec![0.0; self.abs_freqs.len()];
        }
        self.abs_freqs.iter().map(|v| v / total * 100.0).collect()
    }

    /// JSON projection used for durable export.
    pub fn to_json(&self) -> serde_json::Value {
        let distribution: serde_json::Map<String, serde_json::Value> = self
            .columns
            .iter()
            .zip(self.distribution())
            .map(|(col, val)| (col.clone(), json!(val)))
            .collect();
        json!({
            "descr": self.descr,
            "num_leaves": self.num_leaves(),
            "leaf_labels": self.leaf_labels,
            "height": self.height,
            "p_value": self.p_value,
            "distribution": distribution,
        })
    }
}

/// The result of hierarchically clustering one feature table.
///
/// Holds the full merge tree plus per-node aggregate profiles. The
/// significance threshold chosen at construction controls which nodes
/// count as clusters (see [`nodes_below_cutoff`](Self::nodes_below_cutoff)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dendrogram {
    columns: Vec<String>,
    p_threshold: f64,
    merges: Vec<Merge>,
    nodes: Vec<DendrogramNode>,
    /// Children (left, right) per node id; `None` for leaves.
    children: Vec<Option<(usize, usize)>>,
}

impl Dendrogram {
    /// Cluster the rows of `table` with average linkage and compute
    /// per-merge homogeneity p-values.
    pub fn new(table: &FeatureTable, p_threshold: f64) -> Self {
        let rows: Vec<Vec<f64>> = table.rows().iter().map(|r| r.values.clone()).collect();
        let columns = table.columns().to_vec();
        let merges = average_linkage(&rows);

        let num_leaves = rows.len();
        let mut nodes: Vec<DendrogramNode> = Vec::with_capacity(2 * num_leaves);
        let mut children: Vec<Option<(usize, usize)>> = Vec::with_capacity(2 * num_leaves);

        for (i, row) in table.rows().iter().enumerate() {
            nodes.push(DendrogramNode {
                id: i,
                descr: row.label.clone(),
                leaf_labels: vec![row.label.clone()],
                height: 0.0,
                p_value: 1.0,
                columns: columns.clone(),
                abs_freqs: row.values.clone(),
            });
            children.push(None);
        }

        for (k, merge) in merges.iter().enumerate() {
            let left = &nodes[merge.left];
            let right = &nodes[merge.right];

            let abs_freqs: Vec<f64> = left
                .abs_freqs
                .iter()
                .zip(&right.abs_freqs)
                .map(|(a, b)| a + b)
                .collect();
            let p_value = homogeneity_p_value(&left.abs_freqs, &right.abs_freqs);

            let mut leaf_labels = left.leaf_labels.clone();
            leaf_labels.extend(right.leaf_labels.iter().cloned());

            nodes.push(DendrogramNode {
                id: num_leaves + k,
                descr: format!("Cluster #{}", k + 1),
                leaf_labels,
                height: merge.height,
                p_value,
                columns: columns.clone(),
                abs_freqs,
            });
            children.push(Some((merge.left, merge.right)));
        }

        Self {
            columns,
            p_threshold,
            merges,
            nodes,
            children,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn p_threshold(&self) -> f64 {
        self.p_threshold
    }

    pub fn num_leaves(&self) -> usize {
        self.nodes.len() - self.merges.len()
    }

    pub fn nodes(&self) -> &[DendrogramNode] {
        &self.nodes
    }

    pub(crate) fn merges(&self) -> &[Merge] {
        &self.merges
    }

    pub(crate) fn children(&self, id: usize) -> Option<(usize, usize)> {
        self.children.get(id).copied().flatten()
    }

    /// The root node; `None` only for an empty table.
    pub fn root(&self) -> Option<&DendrogramNode> {
        self.nodes.last()
    }

    /// Iterate over the maximal homogeneous subtrees: internal nodes
    /// whose merge p-value is at or above the threshold and whose
    /// ancestors are all below it. Lazy and restartable; each call
    /// returns a fresh iterator over a deterministic top-down
    /// traversal.
    pub fn nodes_below_cutoff(&self) -> NodesBelowCutoff<'_> {
        let stack = if self.merges.is_empty() {
            Vec::new()
        } else {
            vec![self.nodes.len() - 1]
        };
        NodesBelowCutoff {
            dendrogram: self,
            stack,
        }
    }

    /// JSON projection used for durable export.
    pub fn to_json(&self) -> serde_json::Value {
        let merges: Vec<serde_json::Value> = self
            .merges
            .iter()
            .enumerate()
            .map(|(k, m)| {
                json!({
                    "left": m.left,
                    "right": m.right,
                    "height": m.height,
                    "p_value": self.nodes[self.num_leaves() + k].p_value,
                })
            })
            .collect();
        json!({
            "num_leaves": self.num_leaves(),
            "p_threshold": self.p_threshold,
            "columns": self.columns,
            "leaf_labels": self.nodes[..self.num_leaves()]
                .iter()
                .map(|n| n.descr.clone())
                .collect::<Vec<_>>(),
            "merges": merges,
        })
    }
}

/// Lazy top-down traversal yielding the maximal subtrees that pass the
/// homogeneity threshold.
pub struct NodesBelowCutoff<'a> {
    dendrogram: &'a Dendrogram,
    stack: Vec<usize>,
}

impl<'a> Iterator for NodesBelowCutoff<'a> {
    type Item = &'a DendrogramNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let Some((left, right)) = self.dendrogram.children(id) else {
                // Leaves are not clusters.
                continue;
            };
            let node = &self.dendrogram.nodes[id];
            if node.p_value >= self.dendrogram.p_threshold {
                return Some(node);
            }
            // Heterogeneous merge: descend. Right pushed first so the
            // left subtree is visited first.
            self.stack.push(right);
            self.stack.push(left);
        }
        None
    }
}

/// Chi-squared homogeneity p-value between two frequency profiles.
/// Degenerate inputs (empty profiles, no shared support) give 1.0
/// rather than NaN so downstream threshold comparisons stay total.
fn homogeneity_p_value(a: &[f64], b: &[f64]) -> f64 {
    let total_a: f64 = a.iter().sum();
    let total_b: f64 = b.iter().sum();
    if total_a <= 0.0 || total_b <= 0.0 {
        return 1.0;
    }

    let grand_total = total_a + total_b;
    let mut stat = 0.0;
    let mut occupied = 0usize;
    for (&x, &y) in a.iter().zip(b) {
        let col_total = x + y;
        if col_total <= 0.0 {
            continue;
        }
        occupied += 1;
        let expected_a = col_total * total_a / grand_total;
        let expected_b = col_total * total_b / grand_total;
        stat += (x - expected_a) * (x - expected_a) / expected_a
            + (y - expected_b) * (y - expected_b) / expected_b;
    }

    if occupied < 2 || !stat.is_finite() {
        return 1.0;
    }
    let dof = (occupied - 1) as f64;
    match ChiSquared::new(dof) {
        Ok(dist) => 1.0 - dist.cdf(stat),
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::FeatureTable;

    fn make_table(rows: &[(&str, Vec<f64>)]) -> FeatureTable {
        let mut table = FeatureTable::new(vec!["x".into(), "y".into(), "z".into()]);
        for (label, values) in rows {
            table.push_row(*label, values.clone());
        }
        table
    }

    #[test]
    fn test_identical_profiles_are_homogeneous() {
        let p = homogeneity_p_value(&[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0]);
        assert!((p - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_profiles_are_heterogeneous() {
        let p = homogeneity_p_value(&[100.0, 0.0, 0.0], &[0.0, 100.0, 0.0]);
        assert!(p < 0.01);
    }

    #[test]
    fn test_node_count() {
        let table = make_table(&[
            ("a", vec![50.0, 30.0, 20.0]),
            ("b", vec![48.0, 32.0, 20.0]),
            ("c", vec![10.0, 10.0, 80.0]),
        ]);
        let dendrogram = Dendrogram::new(&table, 0.7);
        assert_eq!(dendrogram.num_leaves(), 3);
        assert_eq!(dendrogram.nodes().len(), 5);
    }

    #[test]
    fn test_similar_rows_form_a_cluster_below_cutoff() {
        let table = make_table(&[
            ("a", vec![50.0, 30.0, 20.0]),
            ("b", vec![48.0, 32.0, 20.0]),
            ("c", vec![1.0, 1.0, 98.0]),
        ]);
        let dendrogram = Dendrogram::new(&table, 0.7);
        let clusters: Vec<_> = dendrogram.nodes_below_cutoff().collect();
        assert!(!clusters.is_empty());
        // The homogeneous pair {a, b} is reported, not the root that
        // also drags in the outlier c.
        assert!(clusters.iter().any(|n| {
            let mut labels = n.leaf_labels.clone();
            labels.sort();
            labels == ["a", "b"]
        }));
    }

    #[test]
    fn test_iterator_is_restartable() {
        let table = make_table(&[
            ("a", vec![50.0, 30.0, 20.0]),
            ("b", vec![48.0, 32.0, 20.0]),
        ]);
        let dendrogram = Dendrogram::new(&table, 0.7);
        let first: Vec<String> = dendrogram
            .nodes_below_cutoff()
            .map(|n| n.descr.clone())
            .collect();
        let second: Vec<String> = dendrogram
            .nodes_below_cutoff()
            .map(|n| n.descr.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_row_table_has_no_clusters() {
        let table = make_table(&[("a", vec![1.0, 2.0, 3.0])]);
        let dendrogram = Dendrogram::new(&table, 0.7);
        assert_eq!(dendrogram.nodes_below_cutoff().count(), 0);
    }

    #[test]
    fn test_distribution_sums_to_hundred() {
        let table = make_table(&[
            ("a", vec![50.0, 30.0, 20.0]),
            ("b", vec![48.0, 32.0, 20.0]),
        ]);
        let dendrogram = Dendrogram::new(&table, 0.7);
        let root = dendrogram.root().unwrap();
        let sum: f64 = root.distribution().iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }
}
