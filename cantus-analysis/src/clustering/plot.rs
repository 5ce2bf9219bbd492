//! Rendering of dendrograms and stacked bar charts via plotters.

use std::path::Path;

use plotters::prelude::*;

use cantus_core::ExportError;

use super::dendrogram::Dendrogram;

const DENDROGRAM_SIZE: (u32, u32) = (1200, 800);
const BAR_CHART_SIZE: (u32, u32) = (1200, 700);

fn render_err(path: &Path, e: impl ToString) -> ExportError {
    ExportError::Render {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

impl Dendrogram {
    /// Render the dendrogram as a PNG at the given path.
    pub fn plot_dendrogram(&self, path: &Path) -> Result<(), ExportError> {
        let result: Result<(), Box<dyn std::error::Error>> = (|| {
            let root = BitMapBackend::new(path, DENDROGRAM_SIZE).into_drawing_area();
            root.fill(&WHITE)?;

            let num_leaves = self.num_leaves();
            let max_height = self
                .merges()
                .iter()
                .map(|m| m.height)
                .fold(0.0f64, f64::max)
                .max(1e-9);

            let mut chart = ChartBuilder::on(&root)
                .caption("Dendrogram", ("sans-serif", 24))
                .margin(10)
                .x_label_area_size(120)
                .y_label_area_size(60)
                .build_cartesian_2d(0f64..num_leaves.max(1) as f64, 0f64..max_height * 1.1)?;

            let leaf_labels = self.leaf_order_labels();
            chart
                .configure_mesh()
                .disable_x_mesh()
                .y_desc("distance")
                .x_labels(num_leaves.min(30))
                .x_label_formatter(&|x| {
                    // Leaves sit at half-integer positions.
                    let slot = (x - 0.5).round();
                    let idx = slot as usize;
                    if slot < 0.0 || (x - 0.5 - slot).abs() > 0.25 || idx >= leaf_labels.len() {
                        String::new()
                    } else {
                        leaf_labels[idx].clone()
                    }
                })
                .draw()?;

            // Each merge draws a U: two verticals joined by a horizontal.
            for (x_left, y_left, x_right, y_right, height) in self.link_coordinates() {
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![
                        (x_left, y_left),
                        (x_left, height),
                        (x_right, height),
                        (x_right, y_right),
                    ],
                    BLUE,
                )))?;
            }

            root.present()?;
            Ok(())
        })();
        result.map_err(|e| render_err(path, e))
    }

    /// Render one stacked bar per cluster below the cutoff, segments
    /// colored per feature column from the given palette.
    pub fn plot_stacked_bar_charts(
        &self,
        path: &Path,
        palette: &[RGBColor],
    ) -> Result<(), ExportError> {
        let result: Result<(), Box<dyn std::error::Error>> = (|| {
            let root = BitMapBackend::new(path, BAR_CHART_SIZE).into_drawing_area();
            root.fill(&WHITE)?;

            let clusters: Vec<_> = self.nodes_below_cutoff().collect();
            let num_bars = clusters.len().max(1);

            let mut chart = ChartBuilder::on(&root)
                .caption("Clusters below cutoff", ("sans-serif", 24))
                .margin(10)
                .x_label_area_size(60)
                .y_label_area_size(60)
                .build_cartesian_2d(0f64..num_bars as f64, 0f64..100f64)?;

            let descrs: Vec<String> = clusters.iter().map(|n| n.descr.clone()).collect();
            chart
                .configure_mesh()
                .disable_x_mesh()
                .y_desc("relative frequency (%)")
                .x_labels(num_bars.min(20))
                .x_label_formatter(&|x| {
                    let idx = x.floor() as usize;
                    descrs.get(idx).cloned().unwrap_or_default()
                })
                .draw()?;

            for (bar, node) in clusters.iter().enumerate() {
                let x0 = bar as f64 + 0.15;
                let x1 = bar as f64 + 0.85;
                let mut y0 = 0.0;
                for (col, value) in node.distribution().into_iter().enumerate() {
                    if value <= 0.0 {
                        continue;
                    }
                    let color = palette[col % palette.len()];
                    chart.draw_series(std::iter::once(Rectangle::new(
                        [(x0, y0), (x1, y0 + value)],
                        color.filled(),
                    )))?;
                    y0 += value;
                }
            }

            // A legend only stays readable for the frequency columns;
            // tendency profiles have one column per transition.
            if self.columns().len() <= 16 {
                for (col, label) in self.columns().iter().enumerate() {
                    let color = palette[col % palette.len()];
                    chart
                        .draw_series(std::iter::once(Rectangle::new(
                            [(0.0, 0.0), (0.0, 0.0)],
                            color.filled(),
                        )))?
                        .label(label.clone())
                        .legend(move |(x, y)| {
                            Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                        });
                }
                chart
                    .configure_series_labels()
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .draw()?;
            }

            root.present()?;
            Ok(())
        })();
        result.map_err(|e| render_err(path, e))
    }

    /// Leaf labels in drawing order (left to right).
    fn leaf_order_labels(&self) -> Vec<String> {
        self.leaf_order()
            .into_iter()
            .map(|id| self.nodes()[id].descr.clone())
            .collect()
    }

    /// Leaf ids ordered by an in-order traversal of the merge tree, so
    /// link lines never cross.
    fn leaf_order(&self) -> Vec<usize> {
        let num_leaves = self.num_leaves();
        if self.merges().is_empty() {
            return (0..num_leaves).collect();
        }
        let mut order = Vec::with_capacity(num_leaves);
        let mut stack = vec![self.nodes().len() - 1];
        while let Some(id) = stack.pop() {
            match self.children(id) {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => order.push(id),
            }
        }
        order
    }

    /// For each merge: the x/y positions of its two children and the
    /// merge height, in leaf-position coordinates.
    fn link_coordinates(&self) -> Vec<(f64, f64, f64, f64, f64)> {
        let order = self.leaf_order();
        let num_nodes = self.nodes().len();

        // x position of each node: leaves at their slot centre, merges
        // at the midpoint of their children.
        let mut x = vec![0.0f64; num_nodes];
        let mut y = vec![0.0f64; num_nodes];
        for (slot, &leaf) in order.iter().enumerate() {
            x[leaf] = slot as f64 + 0.5;
        }

        let num_leaves = self.num_leaves();
        let mut links = Vec::with_capacity(self.merges().len());
        for (k, merge) in self.merges().iter().enumerate() {
            let id = num_leaves + k;
            x[id] = (x[merge.left] + x[merge.right]) / 2.0;
            y[id] = merge.height;
            links.push((
                x[merge.left],
                y[merge.left],
                x[merge.right],
                y[merge.right],
                merge.height,
            ));
        }
        links
    }
}
