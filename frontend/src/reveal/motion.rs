//! Presentation parameters for revealed sections. The browser interpolates
//! between the two poses through a CSS transition; nothing here steps frames.

use super::store::RevealState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Pose {
    pub const SETTLED: Pose = Pose {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Fully transparent, otherwise settled.
    pub const fn faded() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::SETTLED
        }
    }

    pub const fn offset_x(self, px: f64) -> Self {
        Pose {
            translate_x: px,
            ..self
        }
    }

    pub const fn offset_y(self, px: f64) -> Self {
        Pose {
            translate_y: px,
            ..self
        }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.translate_x, self.translate_y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Material "standard" curve.
    pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

    pub fn to_css(&self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Timing of the hidden → revealed change, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Delay for the `index`-th child of a staggered list.
    pub const fn stagger(self, base_ms: u32, step_ms: u32, index: usize) -> Self {
        self.delay(base_ms + step_ms * index as u32)
    }

    pub const fn easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    pub fn to_css(&self) -> String {
        let easing = self.easing.to_css();
        format!(
            "transition: opacity {d}ms {e} {w}ms, transform {d}ms {e} {w}ms;",
            d = self.duration_ms,
            e = easing,
            w = self.delay_ms
        )
    }
}

/// How one section enters: where it starts and how it gets to [`Pose::SETTLED`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub transition: Transition,
}

impl Motion {
    pub const fn new(initial: Pose, transition: Transition) -> Self {
        Self {
            initial,
            transition,
        }
    }

    pub const fn fade(duration_ms: u32) -> Self {
        Self::new(Pose::faded(), Transition::new(duration_ms))
    }

    pub const fn rise(offset_px: f64, duration_ms: u32) -> Self {
        Self::new(Pose::faded().offset_y(offset_px), Transition::new(duration_ms))
    }

    pub const fn slide(offset_px: f64, duration_ms: u32) -> Self {
        Self::new(Pose::faded().offset_x(offset_px), Transition::new(duration_ms))
    }

    pub const fn grow(from_scale: f64, duration_ms: u32) -> Self {
        Self::new(Pose::faded().scaled(from_scale), Transition::new(duration_ms))
    }

    pub const fn delay(self, delay_ms: u32) -> Self {
        Self::new(self.initial, self.transition.delay(delay_ms))
    }

    pub const fn stagger(self, base_ms: u32, step_ms: u32, index: usize) -> Self {
        Self::new(self.initial, self.transition.stagger(base_ms, step_ms, index))
    }

    pub const fn easing(self, easing: Easing) -> Self {
        Self::new(self.initial, self.transition.easing(easing))
    }

    /// Inline style for the given state. The transition is only attached to
    /// the revealed style, so a hidden section snaps to its initial pose.
    pub fn style(&self, state: RevealState) -> String {
        match state {
            RevealState::Hidden => self.initial.to_css(),
            RevealState::Revealed => {
                format!("{} {}", Pose::SETTLED.to_css(), self.transition.to_css())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_uses_initial_pose() {
        let motion = Motion::rise(50.0, 800);
        assert_eq!(
            motion.style(RevealState::Hidden),
            "opacity: 0; transform: translate(0px, 50px) scale(1);"
        );
    }

    #[test]
    fn revealed_style_settles_with_transition() {
        let motion = Motion::slide(-50.0, 800).delay(300).easing(Easing::STANDARD);
        assert_eq!(
            motion.style(RevealState::Revealed),
            "opacity: 1; transform: translate(0px, 0px) scale(1); \
             transition: opacity 800ms cubic-bezier(0.4, 0, 0.2, 1) 300ms, \
             transform 800ms cubic-bezier(0.4, 0, 0.2, 1) 300ms;"
        );
    }

    #[test]
    fn grow_starts_scaled_down() {
        let style = Motion::grow(0.95, 600).style(RevealState::Hidden);
        assert!(style.contains("scale(0.95)"));
        assert!(style.starts_with("opacity: 0;"));
    }

    #[test]
    fn stagger_adds_step_per_index() {
        let motion = Motion::slide(30.0, 600).stagger(700, 100, 3);
        assert_eq!(motion.transition.delay_ms, 1000);
        assert!(motion
            .style(RevealState::Revealed)
            .contains("opacity 600ms ease-out 1000ms"));
    }

    #[test]
    fn easing_keywords() {
        assert_eq!(Easing::default().to_css(), "ease-out");
        assert_eq!(Easing::STANDARD.to_css(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }
}
