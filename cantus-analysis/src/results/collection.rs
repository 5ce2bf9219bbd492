//! The multi-axis result collection.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::ops::Index;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use cantus_core::{AnalysisType, ModalKey, PathStubs, PersistError, RepertoireAndGenre, Unit};

use crate::clustering::{Dendrogram, DendrogramNode};

/// One analysis result stored in a collection: a full dendrogram, or
/// the list of its significant clusters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultEntry {
    Dendrogram(Dendrogram),
    Clusters(Vec<DendrogramNode>),
}

impl ResultEntry {
    /// JSON projection of the entry; cluster lists project element-wise.
    pub fn to_json(&self) -> Value {
        match self {
            ResultEntry::Dendrogram(d) => d.to_json(),
            ResultEntry::Clusters(nodes) => {
                Value::Array(nodes.iter().map(|n| n.to_json()).collect())
            }
        }
    }

    pub fn as_dendrogram(&self) -> Option<&Dendrogram> {
        match self {
            ResultEntry::Dendrogram(d) => Some(d),
            ResultEntry::Clusters(_) => None,
        }
    }
}

/// The results stored under one fully-specified 6-tuple of path stubs,
/// keyed by a short result name such as `"dendrogram"` or `"clusters"`.
pub type ResultsBucket = BTreeMap<String, ResultEntry>;

/// All analysis results of a run (or of several accumulated runs),
/// keyed by the 6-tuple of path stubs.
///
/// There is a single canonical store; the nested and JSON views are
/// built on demand, so no parallel representations can drift apart.
/// Buckets are created deliberately on first insertion and never
/// materialized by a read. The key order of the store is the
/// deterministic export order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ResultCollection {
    results: BTreeMap<PathStubs, ResultsBucket>,
}

impl ResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result under the bucket addressed by the four axis
    /// values. Re-inserting with the same axes and key overwrites; a
    /// bucket accumulates entries across distinct keys.
    pub fn insert_results(
        &mut self,
        rep_and_genre: RepertoireAndGenre,
        analysis: AnalysisType,
        unit: Unit,
        modal_category: &ModalKey,
        results_key: &str,
        value: ResultEntry,
    ) {
        let path_stubs = PathStubs::new(rep_and_genre, analysis, unit, modal_category);
        self.results
            .entry(path_stubs)
            .or_default()
            .insert(results_key.to_owned(), value);
    }

    /// Direct flat lookup. Never creates a bucket.
    pub fn get(&self, path_stubs: &PathStubs) -> Option<&ResultsBucket> {
        self.results.get(path_stubs)
    }

    /// The stored bucket addresses, in deterministic order.
    pub fn path_stubs(&self) -> impl Iterator<Item = &PathStubs> {
        self.results.keys()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&PathStubs, &ResultsBucket)> {
        self.results.iter()
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Flat snapshot of the JSON projections, keyed by the
    /// slash-joined path stubs.
    pub fn to_dict(&self) -> BTreeMap<String, BTreeMap<String, Value>> {
        self.results
            .iter()
            .map(|(stubs, bucket)| {
                let bucket_json = bucket
                    .iter()
                    .map(|(key, entry)| (key.clone(), entry.to_json()))
                    .collect();
                (stubs.to_string(), bucket_json)
            })
            .collect()
    }

    /// Nested snapshot of the JSON projections: a trie of objects, one
    /// level per path stub, with the bucket's entries at the leaves.
    pub fn to_nested_dict(&self) -> Value {
        let mut root = Map::new();
        for (stubs, bucket) in &self.results {
            let mut cursor = &mut root;
            for stub in stubs.iter() {
                let entry = cursor
                    .entry(stub.to_owned())
                    .or_insert_with(|| Value::Object(Map::new()));
                // All stub tuples have the same depth, so intermediate
                // levels are always objects.
                cursor = match entry {
                    Value::Object(map) => map,
                    _ => return Value::Null,
                };
            }
            for (key, entry) in bucket {
                cursor.insert(key.clone(), entry.to_json());
            }
        }
        Value::Object(root)
    }

    /// Serialize the whole collection (live values included) to a file.
    ///
    /// Refuses to overwrite an existing file unless `overwrite` is set;
    /// the refusal is logged as a warning and the call is a no-op, not
    /// an error.
    pub fn save(&self, filename: &Path, overwrite: bool) -> Result<(), PersistError> {
        if filename.exists() {
            if !overwrite {
                tracing::warn!(
                    file = %filename.display(),
                    "not overwriting existing file (use overwrite=true to overwrite)"
                );
                return Ok(());
            }
            tracing::warn!(file = %filename.display(), "overwriting existing file");
        }

        let file = File::create(filename)?;
        bincode::serialize_into(BufWriter::new(file), self).map_err(|e| PersistError::Encode {
            message: e.to_string(),
        })
    }

    /// Load a collection previously written by [`save`](Self::save).
    /// Only blobs written by the same version deserialize.
    pub fn load(filename: &Path) -> Result<Self, PersistError> {
        let file = File::open(filename)?;
        bincode::deserialize_from(BufReader::new(file)).map_err(|e| PersistError::Decode {
            message: e.to_string(),
        })
    }
}

impl Index<&PathStubs> for ResultCollection {
    type Output = ResultsBucket;

    fn index(&self, path_stubs: &PathStubs) -> &Self::Output {
        self.results
            .get(path_stubs)
            .unwrap_or_else(|| panic!("no results bucket for path stubs '{path_stubs}'"))
    }
}
