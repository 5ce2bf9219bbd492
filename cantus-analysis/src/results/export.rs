//! The bulk plot-export driver.

use std::path::Path;

use cantus_core::ExportError;

use super::collection::ResultCollection;
use super::palette::color_palette_for_unit;

impl ResultCollection {
    /// Export dendrogram and stacked-bar-chart images for every bucket
    /// into `output_root_dir`, one directory per 6-tuple of path stubs.
    ///
    /// If the output root already exists the export is refused (logged
    /// as a warning, no-op) unless `overwrite` is set, in which case
    /// the existing tree is removed first. Buckets are visited in the
    /// deterministic store order. A bucket without a `"dendrogram"`
    /// entry indicates an insertion bug and aborts the export.
    pub fn export_plots(&self, output_root_dir: &Path, overwrite: bool) -> Result<(), ExportError> {
        if output_root_dir.exists() {
            if !overwrite {
                tracing::warn!(
                    dir = %output_root_dir.display(),
                    "aborting because output root dir already exists (and overwrite=false)"
                );
                return Ok(());
            }
            tracing::warn!(
                dir = %output_root_dir.display(),
                "removing existing output root dir"
            );
            std::fs::remove_dir_all(output_root_dir)?;
        }

        for (path_stubs, bucket) in self.iter() {
            let mut output_dir = output_root_dir.to_path_buf();
            for stub in path_stubs.iter() {
                output_dir.push(stub);
            }
            tracing::debug!(dir = %output_dir.display(), "exporting results to folder");

            let dendrogram = bucket
                .get("dendrogram")
                .and_then(|entry| entry.as_dendrogram())
                .ok_or_else(|| ExportError::MissingKey {
                    bucket: path_stubs.to_string(),
                    key: "dendrogram".to_owned(),
                })?;

            std::fs::create_dir_all(&output_dir)?;
            dendrogram.plot_dendrogram(&output_dir.join("dendrogram.png"))?;

            let color_palette = color_palette_for_unit(&path_stubs.unit);
            dendrogram.plot_stacked_bar_charts(
                &output_dir.join("stacked_bar_chart.png"),
                color_palette,
            )?;
        }
        Ok(())
    }
}
