//! Style and layout tables for the renderer.
//!
//! Both [`Styles`] and [`Layout`] are plain values handed to the
//! [`Renderer`](crate::render::Renderer) when it is built. Nothing reads them
//! from global state, so a caller can render the same timer with different
//! palettes side by side.
//!
//! ```rust
//! use pomoruler::style::{Styles, Weight};
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = Styles::default();
//! styles.accent = Style::new().foreground(Color::from("#00FF00"));
//! let _ = styles.for_weight(Weight::Near);
//! ```

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// How prominent a ruler column is, by distance from the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// The center column.
    Focal,
    /// Up to 10 columns from the center.
    Near,
    /// Up to 20 columns from the center.
    Mid,
    /// Everything further out.
    Far,
}

impl Weight {
    /// Bucket for a column `distance` columns away from the center.
    pub fn for_distance(distance: usize) -> Self {
        match distance {
            0 => Weight::Focal,
            1..=10 => Weight::Near,
            11..=20 => Weight::Mid,
            _ => Weight::Far,
        }
    }
}

/// Colors used by the timer view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Selected minute, pointer and remaining time.
    pub focal: Style,
    /// Ruler marks and labels close to the selection.
    pub near: Style,
    /// Ruler marks and labels at medium distance.
    pub mid: Style,
    /// Ruler marks and labels far from the selection.
    pub far: Style,
    /// The decrease/increase arrows.
    pub accent: Style,
    /// Border and padding around the whole view.
    pub frame: Style,
}

impl Styles {
    /// The style for a ruler [`Weight`].
    pub fn for_weight(&self, weight: Weight) -> &Style {
        match weight {
            Weight::Focal => &self.focal,
            Weight::Near => &self.near,
            Weight::Mid => &self.mid,
            Weight::Far => &self.far,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            focal: Style::new().foreground(Color::from("#FFFFFF")),
            near: Style::new().foreground(Color::from("#999999")),
            mid: Style::new().foreground(Color::from("#777777")),
            far: Style::new().foreground(Color::from("#555555")),
            accent: Style::new().foreground(Color::from("#FF0000")),
            frame: Style::new()
                .border_style(lipgloss::rounded_border())
                .border_top(true)
                .border_right(true)
                .border_bottom(true)
                .border_left(true)
                .padding(1, 1, 1, 1),
        }
    }
}

/// Glyphs and column counts of the timer view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Number of ruler columns.
    pub width: usize,
    /// Columns reserved for each minute label.
    pub label_width: usize,
    /// Spaces between the arrows and the remaining time.
    pub control_gap: usize,
    /// Mark for minutes on the five minute grid.
    pub strong_mark: char,
    /// Mark for every other minute.
    pub weak_mark: char,
    /// Glyph under the selected minute.
    pub pointer: char,
    /// Glyph for the decrease control.
    pub decrease: char,
    /// Glyph for the increase control.
    pub increase: char,
}

impl Layout {
    /// Index of the center column.
    pub fn center(&self) -> usize {
        self.width / 2
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 50,
            label_width: 5,
            control_gap: 5,
            strong_mark: '|',
            weak_mark: '\'',
            pointer: '▲',
            decrease: '←',
            increase: '→',
        }
    }
}
