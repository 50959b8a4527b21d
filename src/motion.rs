//! Entrance animation presets.
//!
//! Every animated element starts hidden in one of a few [`Entrance`] poses and
//! transitions to its resting place once its section is revealed. The presets
//! are plain constants shared by all sections; staggering is done by handing
//! each child its position in the sequence.

/// Hidden pose an element animates from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    /// Starts `px` below its resting place.
    Rise(u16),
    /// Starts `px` to the left.
    FromLeft(u16),
    /// Starts `px` to the right.
    FromRight(u16),
    /// Starts scaled down to the given factor.
    Grow(f32),
}

impl Entrance {
    fn hidden_transform(self) -> String {
        match self {
            Entrance::Rise(px) => format!("translateY({px}px)"),
            Entrance::FromLeft(px) => format!("translateX(-{px}px)"),
            Entrance::FromRight(px) => format!("translateX({px}px)"),
            Entrance::Grow(scale) => format!("scale({scale})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub entrance: Entrance,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    pub const fn new(entrance: Entrance, duration_ms: u32) -> Self {
        Self {
            entrance,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Inline style for the element. `extra_delay_ms` is added to the preset
    /// delay and is where stagger offsets go.
    pub fn style(&self, visible: bool, extra_delay_ms: u32) -> String {
        let delay = self.delay_ms + extra_delay_ms;
        let duration = self.duration_ms;
        let (opacity, transform) = if visible {
            ("1", "none".to_string())
        } else {
            ("0", self.entrance.hidden_transform())
        };
        format!(
            "opacity:{opacity};transform:{transform};transition:opacity {duration}ms ease-out {delay}ms,transform {duration}ms ease-out {delay}ms;"
        )
    }
}

/// Fixed per-child delay increment inside a revealed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(step_ms: u32) -> Self {
        Self { step_ms }
    }

    pub const fn delay(&self, index: usize) -> u32 {
        self.step_ms * index as u32
    }
}

pub const FADE_IN_UP: Motion = Motion::new(Entrance::Rise(60), 600);
pub const CARD_RISE: Motion = Motion::new(Entrance::Rise(40), 500);
pub const POP_IN: Motion = Motion::new(Entrance::Grow(0.8), 400);
pub const SLIDE_FROM_LEFT: Motion = Motion::new(Entrance::FromLeft(20), 400);
pub const SLIDE_FROM_RIGHT: Motion = Motion::new(Entrance::FromRight(20), 400);
pub const HERO_ITEM: Motion = Motion::new(Entrance::Rise(20), 600);
pub const HERO_TEXT: Motion = Motion::new(Entrance::FromLeft(50), 800).delayed(200);
pub const FOOTER_ITEM: Motion = Motion::new(Entrance::Rise(20), 600);
pub const BACK_TO_TOP: Motion = Motion::new(Entrance::Grow(0.0), 600).delayed(800);

pub const STAGGER_CHILDREN: Stagger = Stagger::new(100);
pub const PROJECT_STAGGER: Stagger = Stagger::new(200);
pub const SKILL_ITEM_STAGGER: Stagger = Stagger::new(50);
pub const FOOTER_STAGGER: Stagger = Stagger::new(200);
pub const HERO_STAGGER: Stagger = Stagger::new(200);

/// Latch for viewport-triggered animations. Reports the first time its
/// element is seen in view and ignores everything after that.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    /// Feeds one visibility observation. Returns `true` only for the
    /// observation that triggers the reveal.
    pub fn observe(&mut self, in_view: bool) -> bool {
        if self.revealed || !in_view {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_style() {
        assert_eq!(
            FADE_IN_UP.style(false, 0),
            "opacity:0;transform:translateY(60px);transition:opacity 600ms ease-out 0ms,transform 600ms ease-out 0ms;"
        );
    }

    #[test]
    fn test_visible_style_clears_transform() {
        let style = SLIDE_FROM_LEFT.style(true, 0);
        assert!(style.starts_with("opacity:1;transform:none;"));
    }

    #[test]
    fn test_entrance_poses() {
        assert!(SLIDE_FROM_LEFT.style(false, 0).contains("translateX(-20px)"));
        assert!(SLIDE_FROM_RIGHT.style(false, 0).contains("translateX(20px)"));
        assert!(POP_IN.style(false, 0).contains("scale(0.8)"));
    }

    #[test]
    fn test_stagger_adds_fixed_step() {
        let delays = (0..4)
            .map(|i| STAGGER_CHILDREN.delay(i))
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert_eq!(Stagger::new(0).delay(7), 0);
    }

    #[test]
    fn test_preset_and_stagger_delays_combine() {
        let style = HERO_TEXT.style(false, HERO_STAGGER.delay(2));
        assert!(style.contains("800ms ease-out 600ms"));
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut latch = RevealOnce::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));

        // Scrolling away and back again never replays
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
    }
}
