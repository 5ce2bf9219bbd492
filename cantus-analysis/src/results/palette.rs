//! Color palettes for stacked bar charts, selected per analysis unit.

use plotters::style::RGBColor;

/// Eight distinguishable colors for the pitch-class columns.
const PC_PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

/// Eight colors for the mode-degree columns, on a distinct scale so the
/// two chart families are recognizable at a glance.
const MODE_DEGREE_PALETTE: [RGBColor; 8] = [
    RGBColor(0, 63, 92),
    RGBColor(47, 75, 124),
    RGBColor(102, 81, 145),
    RGBColor(160, 81, 149),
    RGBColor(212, 80, 135),
    RGBColor(249, 93, 106),
    RGBColor(255, 124, 67),
    RGBColor(255, 166, 0),
];

/// The palette for a unit path stub. Unknown stubs fall back to the
/// pitch-class palette.
pub fn color_palette_for_unit(unit_stub: &str) -> &'static [RGBColor] {
    match unit_stub {
        "mode_degrees" => &MODE_DEGREE_PALETTE,
        _ => &PC_PALETTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_get_distinct_palettes() {
        assert_ne!(color_palette_for_unit("pcs"), color_palette_for_unit("mode_degrees"));
    }
}
