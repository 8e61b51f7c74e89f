//! Poster composition
//!
//! Turns a [`WeeksLived`] value and a [`RenderStyle`] into a PNG poster:
//! title band, numeric axis labels with indicator arrows, one bordered
//! square per week, and a stats/footer band. Rendering is deterministic —
//! identical inputs produce byte-identical output.

use chrono::NaiveDate;
use image::ImageError;
use thiserror::Error;

use crate::canvas::Canvas;
use crate::caption::caption;
use crate::font;
use crate::layout::{GridLayout, LayoutError};
use crate::lifespan::{AgeError, LifeSpan, ValidationPolicy, WeeksLived};
use crate::style::RenderStyle;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] ImageError),

    #[error(transparent)]
    Age(#[from] AgeError),
}

/// A rendered poster: encoded PNG plus the chat caption
#[derive(Debug, Clone)]
pub struct Poster {
    pub png: Vec<u8>,
    pub caption: String,
}

/// Validate the date pair and render in one step.
pub fn render_life_poster(
    birth: NaiveDate,
    today: NaiveDate,
    style: &RenderStyle,
    policy: ValidationPolicy,
) -> Result<Poster, RenderError> {
    let weeks = WeeksLived::between(birth, today, LifeSpan::default(), policy)?;
    render_poster(weeks, style)
}

/// Render an already-computed week count.
pub fn render_poster(weeks: WeeksLived, style: &RenderStyle) -> Result<Poster, RenderError> {
    let canvas = draw_poster(weeks, style)?;
    Ok(Poster {
        png: canvas.encode_png()?,
        caption: caption(&weeks),
    })
}

/// Draw the poster onto a canvas without encoding it.
pub fn draw_poster(weeks: WeeksLived, style: &RenderStyle) -> Result<Canvas, RenderError> {
    let layout = GridLayout::compute(weeks.span(), style)?;
    let palette = &style.palette;
    let mut canvas = Canvas::new(layout.canvas_w, layout.canvas_h, palette.background);

    if let (Some(y), Some(title)) = (layout.title_y, style.title.as_deref()) {
        canvas.draw_text(layout.grid_x, y, title, style.title_scale, palette.text);
    }

    if let (Some(axis_y), Some(axis)) = (layout.axis_y, style.axis) {
        draw_axis(&mut canvas, &layout, style, axis_y, axis);
    }

    for index in 0..layout.cols * layout.rows {
        let (x, y) = layout.cell_origin(index);
        let fill = if weeks.is_filled(index) {
            palette.cell_filled
        } else {
            palette.cell_empty
        };
        canvas.fill_rect(x, y, layout.cell, layout.cell, fill);
        canvas.stroke_rect(x, y, layout.cell, layout.cell, palette.cell_border);
    }

    if let Some(footer_y) = layout.footer_y {
        if style.show_stats {
            let stats = format!(
                "{} OF {} WEEKS = {:.1}%",
                weeks.lived(),
                weeks.span().total_weeks(),
                weeks.percent_lived()
            );
            canvas.draw_text(layout.grid_x, footer_y, &stats, style.text_scale, palette.text);
        }
        if let Some(footer) = style.footer.as_deref() {
            let w = font::text_width(footer, style.text_scale);
            let x = (layout.grid_x + layout.grid_w).saturating_sub(w);
            canvas.draw_text(x, footer_y, footer, style.text_scale, palette.accent);
        }
    }

    Ok(canvas)
}

fn draw_axis(
    canvas: &mut Canvas,
    layout: &GridLayout,
    style: &RenderStyle,
    axis_y: u32,
    axis: crate::style::AxisLabels,
) {
    let palette = &style.palette;
    let scale = style.text_scale;

    // Week numbers above their columns
    for col in 0..layout.cols {
        let week = col + 1;
        if week % axis.week_step == 0 {
            canvas.draw_text_centered(
                layout.column_center(col),
                axis_y,
                &week.to_string(),
                scale,
                palette.accent,
            );
        }
    }

    // Year numbers in the left gutter, right-aligned, centered on their row
    for row in (0..layout.rows).step_by(axis.year_step as usize) {
        let label = row.to_string();
        let x = layout.year_label_x(font::text_width(&label, scale));
        let y = layout.row_top(row) + (layout.cell.saturating_sub(font::GLYPH_H * scale)) / 2;
        canvas.draw_text(x, y, &label, scale, palette.accent);
    }

    if axis.arrows {
        let head = 3 * scale;
        // "WEEKS" with a rightward arrow, in the axis band
        let word = "WEEKS";
        let word_w = font::text_width(word, scale);
        let mid_y = axis_y + font::GLYPH_H * scale / 2;
        canvas.draw_text(layout.grid_x, axis_y, word, scale, palette.accent);
        canvas.draw_arrow_right(
            layout.grid_x + word_w + 6 * scale,
            mid_y,
            30 * scale,
            head,
            palette.accent,
        );
        // Downward arrow along the year gutter
        canvas.draw_arrow_down(
            layout.gutter_x + 2,
            layout.grid_y,
            24 * scale,
            head,
            palette.accent,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CanvasMode;

    fn weeks(lived: u32) -> WeeksLived {
        WeeksLived::from_count(lived, LifeSpan::default())
    }

    fn cell_center(layout: &GridLayout, index: u32) -> (u32, u32) {
        let (x, y) = layout.cell_origin(index);
        (x + layout.cell / 2, y + layout.cell / 2)
    }

    #[test]
    fn rendering_is_deterministic() {
        let style = RenderStyle::compact();
        let a = render_poster(weeks(1252), &style).unwrap();
        let b = render_poster(weeks(1252), &style).unwrap();
        assert_eq!(a.png, b.png);
        assert_eq!(a.caption, b.caption);
    }

    #[test]
    fn newborn_grid_is_all_empty() {
        let style = RenderStyle::compact();
        let layout = GridLayout::compute(LifeSpan::default(), &style).unwrap();
        let canvas = draw_poster(weeks(0), &style).unwrap();
        for index in [0, 51, 52, 2340, 4679] {
            let (cx, cy) = cell_center(&layout, index);
            assert_eq!(canvas.pixel(cx, cy), Some(style.palette.cell_empty));
        }
    }

    #[test]
    fn clamped_grid_is_all_filled() {
        let style = RenderStyle::compact();
        let layout = GridLayout::compute(LifeSpan::default(), &style).unwrap();
        let canvas = draw_poster(weeks(9999), &style).unwrap();
        for index in [0, 51, 52, 2340, 4679] {
            let (cx, cy) = cell_center(&layout, index);
            assert_eq!(canvas.pixel(cx, cy), Some(style.palette.cell_filled));
        }
    }

    #[test]
    fn fill_boundary_matches_weeks_lived() {
        let style = RenderStyle::compact();
        let layout = GridLayout::compute(LifeSpan::default(), &style).unwrap();
        let canvas = draw_poster(weeks(10), &style).unwrap();
        let (cx, cy) = cell_center(&layout, 9);
        assert_eq!(canvas.pixel(cx, cy), Some(style.palette.cell_filled));
        let (cx, cy) = cell_center(&layout, 10);
        assert_eq!(canvas.pixel(cx, cy), Some(style.palette.cell_empty));
    }

    #[test]
    fn story_poster_is_portrait_png() {
        let style = RenderStyle::story();
        assert_eq!(style.canvas, CanvasMode::Story);
        let canvas = draw_poster(weeks(1252), &style).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1080, 1920));
        let poster = render_poster(weeks(1252), &style).unwrap();
        assert_eq!(&poster.png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn life_poster_applies_the_validation_policy() {
        let birth = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let style = RenderStyle::compact();

        let err = render_life_poster(birth, today, &style, ValidationPolicy::Strict).unwrap_err();
        assert!(matches!(err, RenderError::Age(AgeError::ImplausibleAge { .. })));

        let poster = render_life_poster(birth, today, &style, ValidationPolicy::Clamp).unwrap();
        assert!(poster.caption.contains("Weeks remaining: 0"));
    }

    #[test]
    fn poster_caption_matches_the_week_count() {
        let poster = render_poster(weeks(1252), &RenderStyle::compact()).unwrap();
        assert!(poster.caption.contains("Weeks lived: 1252"));
        assert!(poster.caption.contains("26.8%"));
    }
}
