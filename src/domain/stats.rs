use std::fmt;

use super::icon::IconId;

/// Value shown on a stat card: either preformatted text or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum StatValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Text(text) => f.write_str(text),
            StatValue::Number(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{value:.0}")
            }
            StatValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        StatValue::Text(value)
    }
}

impl From<u32> for StatValue {
    fn from(value: u32) -> Self {
        StatValue::Number(f64::from(value))
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Number(value)
    }
}

/// Accent applied to a stat card's icon. `None` on the item means the theme's primary accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatColor {
    Green,
    Blue,
    Purple,
    Orange,
    Red,
    Yellow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatDisplayItem {
    pub label: String,
    pub value: StatValue,
    pub icon: IconId,
    pub color: Option<StatColor>,
    /// Percentage in `[0, 100]`; see [`clamp_progress`].
    pub progress: Option<f64>,
    /// Small print under the value.
    pub caption: Option<String>,
}

impl StatDisplayItem {
    pub fn new(label: impl Into<String>, value: impl Into<StatValue>, icon: IconId) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon,
            color: None,
            progress: None,
            caption: None,
        }
    }

    pub fn with_color(mut self, color: StatColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Progress bar fill, bounded for drawing. `None` means no bar.
    pub fn bounded_progress(&self) -> Option<f64> {
        self.progress.map(clamp_progress)
    }
}

/// Bounds a progress percentage to `[0, 100]`. NaN draws as an empty bar.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    }
}

/// `done / total` as a percentage; an empty total counts as no progress.
pub fn ratio_percent(done: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(done) / f64::from(total) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_bar_bounds() {
        assert_eq!(clamp_progress(150.0), 100.0);
        assert_eq!(clamp_progress(100.0), 100.0);
        assert_eq!(clamp_progress(42.5), 42.5);
        assert_eq!(clamp_progress(-5.0), 0.0);
        assert_eq!(clamp_progress(f64::NAN), 0.0);
        assert_eq!(clamp_progress(f64::INFINITY), 100.0);
    }

    #[test]
    fn item_without_progress_draws_no_bar() {
        let item = StatDisplayItem::new("Games Played", 12u32, IconId::Gamepad);
        assert_eq!(item.bounded_progress(), None);

        let over = item.with_progress(150.0);
        assert_eq!(over.progress, Some(150.0));
        assert_eq!(over.bounded_progress(), Some(100.0));
    }

    #[test]
    fn values_render_like_their_source() {
        assert_eq!(StatValue::from(1250u32).to_string(), "1250");
        assert_eq!(StatValue::from(2.5).to_string(), "2.5");
        assert_eq!(StatValue::from("5 days").to_string(), "5 days");
    }

    #[test]
    fn ratio_handles_empty_total() {
        assert_eq!(ratio_percent(1, 1), 100.0);
        assert_eq!(ratio_percent(1, 4), 25.0);
        assert_eq!(ratio_percent(3, 0), 0.0);
    }
}
