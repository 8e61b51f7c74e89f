//! Chat caption for a rendered poster

use crate::lifespan::WeeksLived;

/// Emoji-prefixed summary: weeks lived, weeks remaining, percent lived.
pub fn caption(weeks: &WeeksLived) -> String {
    format!(
        "📆 Weeks lived: {}\n⏳ Weeks remaining: {}\n📊 Life lived: {:.1}%",
        weeks.lived(),
        weeks.remaining(),
        weeks.percent_lived(),
    )
}
