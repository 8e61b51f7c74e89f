//! Render style configuration
//!
//! Everything the renderer needs beyond the dates travels in a
//! [`RenderStyle`] value. Styles are plain data — two renders with different
//! styles never interfere.

use serde::{Deserialize, Serialize};

/// RGBA color, straight alpha
pub type Rgba = [u8; 4];

/// Target canvas shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasMode {
    /// Canvas sized to fit the content exactly.
    Compact,
    /// Fixed 1080x1920 portrait, sized for vertical sharing.
    Story,
}

impl CanvasMode {
    /// Fixed canvas size, if this mode has one.
    pub fn fixed_size(&self) -> Option<(u32, u32)> {
        match self {
            CanvasMode::Compact => None,
            CanvasMode::Story => Some((1080, 1920)),
        }
    }
}

/// Color palette for the poster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgba,
    pub cell_filled: Rgba,
    pub cell_empty: Rgba,
    pub cell_border: Rgba,
    pub text: Rgba,
    pub accent: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [250, 250, 247, 255],
            cell_filled: [34, 34, 38, 255],
            cell_empty: [250, 250, 247, 255],
            cell_border: [120, 120, 128, 255],
            text: [34, 34, 38, 255],
            accent: [110, 110, 120, 255],
        }
    }
}

/// Numeric axis labels and directional arrows around the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    /// Label every Nth week column.
    pub week_step: u32,
    /// Label every Mth year row.
    pub year_step: u32,
    /// Draw "WEEKS →" and "YEARS ↓" indicator arrows.
    pub arrows: bool,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            week_step: 10,
            year_step: 10,
            arrows: true,
        }
    }
}

/// Full style configuration for one poster render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub canvas: CanvasMode,
    /// Cell edge length in pixels.
    pub cell: u32,
    /// Gap between adjacent cells, both axes.
    pub gap: u32,
    /// Outer margin around all content.
    pub margin: u32,
    pub palette: Palette,
    /// Header text, drawn at `title_scale`.
    pub title: Option<String>,
    /// Static footer caption, drawn at `text_scale`.
    pub footer: Option<String>,
    /// Draw the lived/percent summary line inside the image.
    pub show_stats: bool,
    pub axis: Option<AxisLabels>,
    /// Integer font scale for labels and footer text.
    pub text_scale: u32,
    /// Integer font scale for the title.
    pub title_scale: u32,
}

impl RenderStyle {
    /// Compact poster: sized to content, stats left for the chat caption.
    pub fn compact() -> Self {
        Self {
            canvas: CanvasMode::Compact,
            cell: 10,
            gap: 2,
            margin: 24,
            palette: Palette::default(),
            title: Some("LIFE IN WEEKS".to_string()),
            footer: Some("1 CELL = 1 WEEK".to_string()),
            show_stats: false,
            axis: Some(AxisLabels::default()),
            text_scale: 1,
            title_scale: 2,
        }
    }

    /// Story poster: fixed 1080x1920 portrait with stats drawn in-image.
    pub fn story() -> Self {
        Self {
            canvas: CanvasMode::Story,
            cell: 14,
            gap: 4,
            margin: 40,
            palette: Palette::default(),
            title: Some("LIFE IN WEEKS".to_string()),
            footer: None,
            show_stats: true,
            axis: Some(AxisLabels::default()),
            text_scale: 2,
            title_scale: 4,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::compact()
    }
}
