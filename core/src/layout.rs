//! Grid geometry
//!
//! Pure layout computation: a [`LifeSpan`] plus a [`RenderStyle`] determine
//! every pixel region of the poster. Regions stack top to bottom (title,
//! week-axis band, grid with a year-label gutter on the left, footer band)
//! and never overlap. Recomputed per render, never cached.

use thiserror::Error;

use crate::font;
use crate::lifespan::LifeSpan;
use crate::style::RenderStyle;

/// Vertical padding under the title band.
const TITLE_PAD: u32 = 10;
/// Vertical padding between week labels and the grid.
const AXIS_PAD: u32 = 6;
/// Vertical padding between the grid and the footer text.
const FOOTER_PAD: u32 = 10;
/// Horizontal padding between year labels and the grid.
const GUTTER_PAD: u32 = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("content {needed_w}x{needed_h} does not fit the {width}x{height} canvas")]
    CanvasOverflow {
        needed_w: u32,
        needed_h: u32,
        width: u32,
        height: u32,
    },
}

/// Derived pixel geometry for one poster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub canvas_w: u32,
    pub canvas_h: u32,
    /// Top of the title text, when a title is drawn.
    pub title_y: Option<u32>,
    /// Top of the week-label band, when axis labels are drawn.
    pub axis_y: Option<u32>,
    /// Left edge of the year-label gutter.
    pub gutter_x: u32,
    /// Gutter width, zero without axis labels.
    pub gutter_w: u32,
    /// Top-left pixel of cell (row 0, column 0).
    pub grid_x: u32,
    pub grid_y: u32,
    pub grid_w: u32,
    pub grid_h: u32,
    /// Top of the footer text, when a footer or stats line is drawn.
    pub footer_y: Option<u32>,
    pub cols: u32,
    pub rows: u32,
    pub cell: u32,
    pub gap: u32,
}

impl GridLayout {
    pub fn compute(span: LifeSpan, style: &RenderStyle) -> Result<Self, LayoutError> {
        let cols = span.weeks_per_year;
        let rows = span.years;
        let grid_w = cols * style.cell + (cols - 1) * style.gap;
        let grid_h = rows * style.cell + (rows - 1) * style.gap;

        let title_h = if style.title.is_some() {
            font::GLYPH_H * style.title_scale + TITLE_PAD
        } else {
            0
        };
        let axis_h = match style.axis {
            Some(_) => font::GLYPH_H * style.text_scale + AXIS_PAD,
            None => 0,
        };
        let gutter_w = match style.axis {
            Some(axis) => {
                let widest = ((rows - 1) / axis.year_step) * axis.year_step;
                font::text_width(&widest.to_string(), style.text_scale) + GUTTER_PAD
            }
            None => 0,
        };
        let footer_h = if style.footer.is_some() || style.show_stats {
            font::GLYPH_H * style.text_scale + FOOTER_PAD
        } else {
            0
        };

        let content_w = gutter_w + grid_w;
        let content_h = title_h + axis_h + grid_h + footer_h;

        let (canvas_w, canvas_h, origin_x, origin_y) = match style.canvas.fixed_size() {
            None => (
                2 * style.margin + content_w,
                2 * style.margin + content_h,
                style.margin,
                style.margin,
            ),
            Some((w, h)) => {
                if content_w + 2 * style.margin > w || content_h + 2 * style.margin > h {
                    return Err(LayoutError::CanvasOverflow {
                        needed_w: content_w + 2 * style.margin,
                        needed_h: content_h + 2 * style.margin,
                        width: w,
                        height: h,
                    });
                }
                // Center the content block on the fixed canvas.
                (w, h, (w - content_w) / 2, (h - content_h) / 2)
            }
        };

        Ok(Self {
            canvas_w,
            canvas_h,
            title_y: style.title.as_ref().map(|_| origin_y),
            axis_y: style.axis.map(|_| origin_y + title_h),
            gutter_x: origin_x,
            gutter_w,
            grid_x: origin_x + gutter_w,
            grid_y: origin_y + title_h + axis_h,
            grid_w,
            grid_h,
            footer_y: (style.footer.is_some() || style.show_stats)
                .then(|| origin_y + title_h + axis_h + grid_h + FOOTER_PAD),
            cols,
            rows,
            cell: style.cell,
            gap: style.gap,
        })
    }

    /// Top-left pixel of the cell for week `index`.
    pub fn cell_origin(&self, index: u32) -> (u32, u32) {
        let row = index / self.cols;
        let col = index % self.cols;
        (
            self.grid_x + col * (self.cell + self.gap),
            self.grid_y + row * (self.cell + self.gap),
        )
    }

    /// Horizontal center of a cell column.
    pub fn column_center(&self, col: u32) -> u32 {
        self.grid_x + col * (self.cell + self.gap) + self.cell / 2
    }

    /// Vertical top of a cell row.
    pub fn row_top(&self, row: u32) -> u32 {
        self.grid_y + row * (self.cell + self.gap)
    }

    /// Left x for a right-aligned year label of the given pixel width.
    pub fn year_label_x(&self, label_w: u32) -> u32 {
        self.grid_x.saturating_sub(GUTTER_PAD + label_w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(style: &RenderStyle) -> GridLayout {
        GridLayout::compute(LifeSpan::default(), style).unwrap()
    }

    #[test]
    fn grid_extent_formula() {
        let style = RenderStyle::compact();
        let l = layout(&style);
        assert_eq!(l.grid_w, 52 * style.cell + 51 * style.gap);
        assert_eq!(l.grid_h, 90 * style.cell + 89 * style.gap);
    }

    #[test]
    fn compact_canvas_is_sized_to_content() {
        let style = RenderStyle::compact();
        let l = layout(&style);
        assert_eq!(l.canvas_w, 2 * style.margin + l.gutter_w + l.grid_w);
        assert!(l.grid_y + l.grid_h < l.canvas_h);
    }

    #[test]
    fn story_canvas_is_fixed_portrait() {
        let l = layout(&RenderStyle::story());
        assert_eq!((l.canvas_w, l.canvas_h), (1080, 1920));
        // Centered: grid block fits with room on both sides
        assert!(l.gutter_x > 0);
        assert!(l.grid_x + l.grid_w < l.canvas_w);
        assert!(l.grid_y + l.grid_h < l.canvas_h);
    }

    #[test]
    fn regions_stack_without_overlap() {
        let l = layout(&RenderStyle::story());
        let title_y = l.title_y.unwrap();
        let axis_y = l.axis_y.unwrap();
        let footer_y = l.footer_y.unwrap();
        assert!(title_y < axis_y);
        assert!(axis_y < l.grid_y);
        assert!(l.grid_y + l.grid_h <= footer_y);
        assert!(footer_y < l.canvas_h);
    }

    #[test]
    fn cell_origins_walk_rows_and_columns() {
        let l = layout(&RenderStyle::compact());
        let step = l.cell + l.gap;
        assert_eq!(l.cell_origin(0), (l.grid_x, l.grid_y));
        assert_eq!(l.cell_origin(51), (l.grid_x + 51 * step, l.grid_y));
        // Week 52 wraps to the second year row
        assert_eq!(l.cell_origin(52), (l.grid_x, l.grid_y + step));
        assert_eq!(l.cell_origin(4679), (l.grid_x + 51 * step, l.grid_y + 89 * step));
    }

    #[test]
    fn oversized_cells_overflow_the_story_canvas() {
        let mut style = RenderStyle::story();
        style.cell = 40;
        let err = GridLayout::compute(LifeSpan::default(), &style).unwrap_err();
        assert!(matches!(err, LayoutError::CanvasOverflow { .. }));
    }

    #[test]
    fn optional_regions_collapse_to_nothing() {
        let mut style = RenderStyle::compact();
        style.title = None;
        style.footer = None;
        style.axis = None;
        style.show_stats = false;
        let l = layout(&style);
        assert_eq!(l.title_y, None);
        assert_eq!(l.axis_y, None);
        assert_eq!(l.footer_y, None);
        assert_eq!(l.gutter_w, 0);
        assert_eq!(l.grid_x, style.margin);
        assert_eq!(l.grid_y, style.margin);
        assert_eq!(l.canvas_h, 2 * style.margin + l.grid_h);
    }
}
