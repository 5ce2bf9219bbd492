//! Agglomerative average-linkage clustering.

use serde::{Deserialize, Serialize};

/// One merge step: the two cluster ids joined and the height (average
/// pairwise distance) at which they were joined. Leaves have ids
/// `0..n`; the merge at index `k` creates cluster id `n + k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Merge {
    pub left: usize,
    pub right: usize,
    pub height: f64,
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Compute the merge sequence for the given row vectors using average
/// linkage (UPGMA) over Euclidean distances.
///
/// Ties are broken towards the smallest pair of cluster ids, so the
/// merge sequence is deterministic for a given table.
pub fn average_linkage(rows: &[Vec<f64>]) -> Vec<Merge> {
    let n = rows.len();
    if n < 2 {
        return Vec::new();
    }

    // Pairwise distances between leaves; cluster distances average these.
    let leaf_dist: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| euclidean(&rows[i], &rows[j])).collect())
        .collect();

    // members[id] = leaf indices of the cluster, None once merged away.
    let mut members: Vec<Option<Vec<usize>>> = (0..n).map(|i| Some(vec![i])).collect();
    let mut active: Vec<usize> = (0..n).collect();
    let mut merges = Vec::with_capacity(n - 1);

    while active.len() > 1 {
        let mut best: Option<(usize, usize, f64)> = None;
        for (ai, &i) in active.iter().enumerate() {
            for &j in &active[ai + 1..] {
                let d = cluster_distance(
                    members[i].as_deref().unwrap_or(&[]),
                    members[j].as_deref().unwrap_or(&[]),
                    &leaf_dist,
                );
                let better = match best {
                    None => true,
                    Some((_, _, best_d)) => d < best_d,
                };
                if better {
                    best = Some((i, j, d));
                }
            }
        }

        let (i, j, height) = best.unwrap_or((active[0], active[1], 0.0));
        let mut merged = members[i].take().unwrap_or_default();
        merged.extend(members[j].take().unwrap_or_default());
        members.push(Some(merged));

        let new_id = members.len() - 1;
        active.retain(|&id| id != i && id != j);
        active.push(new_id);
        merges.push(Merge {
            left: i,
            right: j,
            height,
        });
    }

    merges
}

fn cluster_distance(a: &[usize], b: &[usize], leaf_dist: &[Vec<f64>]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let sum: f64 = a
        .iter()
        .flat_map(|&i| b.iter().map(move |&j| leaf_dist[i][j]))
        .sum();
    sum / (a.len() * b.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_merges_for_single_row() {
        assert!(average_linkage(&[vec![1.0, 2.0]]).is_empty());
    }

    #[test]
    fn test_merge_count() {
        let rows = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![10.0, 0.0],
            vec![10.1, 0.0],
        ];
        let merges = average_linkage(&rows);
        assert_eq!(merges.len(), 3);
    }

    #[test]
    fn test_nearest_pairs_merge_first() {
        let rows = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![10.0, 0.0],
            vec![10.1, 0.0],
        ];
        let merges = average_linkage(&rows);
        // The two tight pairs merge before the two pairs join each other.
        let first_pair = [merges[0].left, merges[0].right];
        let second_pair = [merges[1].left, merges[1].right];
        assert!(first_pair == [0, 1] || first_pair == [2, 3]);
        assert!(second_pair == [0, 1] || second_pair == [2, 3]);
        assert!(merges[2].height > merges[1].height);
    }

    #[test]
    fn test_heights_are_monotonic_for_clean_clusters() {
        let rows = vec![
            vec![0.0],
            vec![1.0],
            vec![2.0],
            vec![50.0],
            vec![51.0],
        ];
        let merges = average_linkage(&rows);
        for pair in merges.windows(2) {
            assert!(pair[0].height <= pair[1].height);
        }
    }
}
