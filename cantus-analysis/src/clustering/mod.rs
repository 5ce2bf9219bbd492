//! Hierarchical clustering of feature profiles with significance
//! filtering.

mod dendrogram;
mod linkage;
mod plot;

pub use dendrogram::{Dendrogram, DendrogramNode, NodesBelowCutoff};
pub use linkage::Merge;
