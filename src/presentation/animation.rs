use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};

/// Duration of the label move between its inline and floating styles.
pub const LABEL_ANIMATION: Duration = Duration::from_millis(200);

/// Tracks when the label last switched between collapsed and expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelTransition {
    expanded: Option<bool>,
    started: Option<Instant>,
    /// Progress already covered when the transition started. Non-zero when
    /// the label reverses mid-way.
    offset: f32,
}

impl LabelTransition {
    /// Records the current expansion. The first observation only sets the
    /// baseline so a freshly mounted field does not animate.
    pub(crate) fn observe(&mut self, expanded: bool, now: Instant) {
        match self.expanded {
            Some(previous) if previous != expanded => {
                self.offset = 1.0 - self.progress(now);
                self.expanded = Some(expanded);
                self.started = Some(now);
            }
            Some(_) => {}
            None => self.expanded = Some(expanded),
        }
    }

    /// Eased progress towards the current style, `1.0` once settled.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(started);
        let fraction = elapsed.as_secs_f32() / LABEL_ANIMATION.as_secs_f32();
        if fraction >= 1.0 {
            return 1.0;
        }
        self.offset + (1.0 - self.offset) * ease_in_out(fraction)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}

/// Cubic bezier ease-in-out `(0.42, 0, 0.58, 1)`.
pub fn ease_in_out(fraction: f32) -> f32 {
    cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;

    // Bisection on x(t); the curve is monotonic for control points in [0, 1].
    let mut low = 0.0_f32;
    let mut high = 1.0_f32;
    let mut t = fraction;
    for _ in 0..24 {
        let x = sample(ax, bx, cx, t);
        if (x - fraction).abs() < 1e-5 {
            break;
        }
        if x < fraction {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    sample(ay, by, cy, t).clamp(0.0, 1.0)
}

/// Style at `progress` between `from` and `to`. RGB foregrounds are
/// interpolated, everything else switches at the midpoint.
pub(crate) fn blend_style(from: Style, to: Style, progress: f32) -> Style {
    if progress >= 1.0 {
        return to;
    }
    let base = if progress < 0.5 { from } else { to };
    match (from.fg, to.fg) {
        (Some(a), Some(b)) => base.fg(blend_color(a, b, progress)),
        _ => base,
    }
}

fn blend_color(from: Color, to: Color, progress: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| {
                let value = f32::from(a) + (f32::from(b) - f32::from(a)) * progress;
                value.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if progress < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Modifier;

    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-3);
        assert!(ease_in_out(0.1) < 0.1, "ease-in starts slow");
        assert!(ease_in_out(0.9) > 0.9, "ease-out ends slow");
    }

    #[test]
    fn first_observation_does_not_animate() {
        let now = Instant::now();
        let mut transition = LabelTransition::default();
        transition.observe(true, now);
        assert!(!transition.is_animating(now));
    }

    #[test]
    fn change_animates_for_fixed_duration() {
        let now = Instant::now();
        let mut transition = LabelTransition::default();
        transition.observe(false, now);
        transition.observe(true, now);
        assert_eq!(transition.progress(now), 0.0);
        assert!(transition.is_animating(now + Duration::from_millis(100)));
        assert!(!transition.is_animating(now + LABEL_ANIMATION));
    }

    #[test]
    fn reversal_continues_from_current_progress() {
        let now = Instant::now();
        let mut transition = LabelTransition::default();
        transition.observe(false, now);
        transition.observe(true, now);
        let midway = now + LABEL_ANIMATION / 2;
        let covered = transition.progress(midway);
        assert!(covered > 0.0 && covered < 1.0);

        transition.observe(false, midway);
        assert!((transition.progress(midway) - (1.0 - covered)).abs() < 1e-6);
        assert!(transition.is_animating(midway));
        assert_eq!(transition.progress(midway + LABEL_ANIMATION), 1.0);
    }

    #[test]
    fn rgb_colors_are_interpolated() {
        let from = Style::default().fg(Color::Rgb(0, 0, 0));
        let to = Style::default().fg(Color::Rgb(200, 100, 0));
        let mid = blend_style(from, to, 0.5);
        assert_eq!(mid.fg, Some(Color::Rgb(100, 50, 0)));
    }

    #[test]
    fn indexed_colors_and_modifiers_switch_at_midpoint() {
        let from = Style::default().fg(Color::Gray);
        let to = Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM);
        let early = blend_style(from, to, 0.25);
        assert_eq!(early.fg, Some(Color::Gray));
        assert!(!early.add_modifier.contains(Modifier::DIM));
        let late = blend_style(from, to, 0.75);
        assert_eq!(late.fg, Some(Color::Cyan));
        assert!(late.add_modifier.contains(Modifier::DIM));
    }
}
