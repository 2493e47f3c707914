//! Timer view rendering.
//!
//! The [`Renderer`] turns a [`TimerState`] into the framed text shown on
//! screen. Rendering is a pure function of the state and the renderer's
//! [`Styles`] and [`Layout`]; it never mutates either.
//!
//! ```text
//! ╭────────────────────────────────────────────────────╮
//! │                                                    │
//! │                                                    │
//! │ |''''|''''|''''|''''|''''|''''|''''|''''|''''|'''' │
//! │ 0    5    10   15   20   25   30   35   40   45    │
//! │                          ▲                         │
//! │                                                    │
//! │                 ←     25:00     →                  │
//! │                                                    │
//! ╰────────────────────────────────────────────────────╯
//! ```

use crate::state::{format_time, TimerState};
use crate::style::{Layout, Styles, Weight};
use lipgloss_extras::lipgloss::{self, Style};
use unicode_width::UnicodeWidthStr;

/// Renders [`TimerState`] snapshots.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    /// Colors and frame.
    pub styles: Styles,
    /// Glyphs and column counts.
    pub layout: Layout,
}

impl Renderer {
    /// Creates a renderer with the given styles and layout.
    pub fn new(styles: Styles, layout: Layout) -> Self {
        Self { styles, layout }
    }

    /// Renders the complete framed view.
    pub fn view(&self, state: &TimerState) -> String {
        let mut s = String::new();

        s.push('\n');
        s.push_str(&self.ruler(state));
        s.push('\n');
        s.push_str(&self.labels(state));
        s.push('\n');
        s.push_str(&self.pointer());
        s.push_str("\n\n");
        s.push_str(&self.controls(state));
        s.push('\n');

        self.styles.frame.render(&s)
    }

    /// The row of minute marks around the selected duration.
    pub fn ruler(&self, state: &TimerState) -> String {
        let minutes = whole_minutes(state);
        let mut s = String::new();

        for col in 0..self.layout.width {
            let mark = if self.minute_at(minutes, col).rem_euclid(5) == 0 {
                self.layout.strong_mark
            } else {
                self.layout.weak_mark
            };
            s.push_str(&self.style_at(col).render(&mark.to_string()));
        }
        s
    }

    /// Minute labels under every non-negative multiple of five on the ruler.
    pub fn labels(&self, state: &TimerState) -> String {
        let minutes = whole_minutes(state);
        let mut s = String::new();

        let mut col = 0;
        while col < self.layout.width {
            let minute = self.minute_at(minutes, col);
            if minute >= 0 && minute % 5 == 0 {
                let label = format!("{:<width$}", minute, width = self.layout.label_width);
                s.push_str(&self.style_at(col).render(&label));
                col += label.width().max(1);
            } else {
                s.push(' ');
                col += 1;
            }
        }
        s
    }

    /// The pointer under the center column.
    pub fn pointer(&self) -> String {
        let mut s = " ".repeat(self.layout.center());
        s.push_str(&self.styles.focal.render(&self.layout.pointer.to_string()));
        s
    }

    /// Decrease glyph, remaining time and increase glyph, centered.
    pub fn controls(&self, state: &TimerState) -> String {
        let decrease = self
            .styles
            .accent
            .render(&self.layout.decrease.to_string());
        let increase = self
            .styles
            .accent
            .render(&self.layout.increase.to_string());
        let time = self.styles.focal.render(&format_time(state.remaining()));
        let gap = " ".repeat(self.layout.control_gap);

        let row = lipgloss::join_horizontal(
            lipgloss::TOP,
            &[
                decrease.as_str(),
                gap.as_str(),
                time.as_str(),
                gap.as_str(),
                increase.as_str(),
            ],
        );

        lipgloss::place_horizontal(self.layout.width as i32, lipgloss::CENTER, &row, &[])
    }

    fn minute_at(&self, minutes: i64, col: usize) -> i64 {
        minutes - self.layout.center() as i64 + col as i64
    }

    fn style_at(&self, col: usize) -> &Style {
        let distance = col.abs_diff(self.layout.center());
        self.styles.for_weight(Weight::for_distance(distance))
    }
}

fn whole_minutes(state: &TimerState) -> i64 {
    i64::try_from(state.duration().as_secs() / 60).unwrap_or(i64::MAX)
}
