//! Life-in-weeks rendering core
//!
//! Pure library behind the lifeweeks bot: parses birth-date text, computes
//! weeks lived out of a fixed lifespan, and renders the result as a PNG grid
//! poster (one cell per week, rows are years). No I/O, no global state —
//! every render is a function of its inputs and a [`RenderStyle`] value.

pub mod canvas;
pub mod caption;
pub mod date;
pub mod font;
pub mod layout;
pub mod lifespan;
pub mod render;
pub mod style;

pub use caption::caption;
pub use date::{parse_birth_date, DateParseError};
pub use layout::GridLayout;
pub use lifespan::{AgeError, LifeSpan, ValidationPolicy, WeeksLived};
pub use render::{render_life_poster, render_poster, Poster, RenderError};
pub use style::{AxisLabels, CanvasMode, Palette, RenderStyle, Rgba};
