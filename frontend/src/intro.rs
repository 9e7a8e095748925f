/// Scroll offset, in pixels, that dismisses the opening overlay.
pub const INTRO_SCROLL_THRESHOLD: f64 = 50.0;
/// Time between the trigger and revealing the main content.
pub const INTRO_REVEAL_DELAY_MS: u32 = 1_500;
/// How long the header splash stays on screen.
pub const HERO_SPLASH_MS: u32 = 800;
/// Bat silhouettes flying through the overlay once triggered.
pub const BAT_COUNT: usize = 5;
pub const BAT_STAGGER_MS: u32 = 150;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntroPhase {
    #[default]
    Waiting,
    Triggered,
    Passed,
}

impl IntroPhase {
    /// Feeds a scroll offset. Returns `true` exactly once, on the transition to
    /// `Triggered`, which is when the reveal timer must be started.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if *self == IntroPhase::Waiting && scroll_y > INTRO_SCROLL_THRESHOLD {
            *self = IntroPhase::Triggered;
            return true;
        }
        false
    }

    /// Called when the reveal timer fires.
    pub fn reveal(&mut self) {
        if *self == IntroPhase::Triggered {
            *self = IntroPhase::Passed;
        }
    }

    pub fn overlay_visible(self) -> bool {
        self != IntroPhase::Passed
    }

    pub fn content_visible(self) -> bool {
        self == IntroPhase::Passed
    }
}

/// Horizontal start position (percent of viewport width) of bat `i`.
pub fn bat_left_percent(i: usize) -> usize {
    20 + i * 15
}

/// Opacity of the brand page hero as the page scrolls away: 1 at the top,
/// 0 from 300px on.
pub fn hero_opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / 300.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_until_threshold_is_exceeded() {
        let mut phase = IntroPhase::default();
        assert!(!phase.on_scroll(0.0));
        assert!(!phase.on_scroll(INTRO_SCROLL_THRESHOLD));
        assert_eq!(phase, IntroPhase::Waiting);
        assert!(phase.on_scroll(INTRO_SCROLL_THRESHOLD + 1.0));
        assert_eq!(phase, IntroPhase::Triggered);
    }

    #[test]
    fn triggers_only_once() {
        let mut phase = IntroPhase::default();
        assert!(phase.on_scroll(400.0));
        assert!(!phase.on_scroll(800.0));
        phase.reveal();
        assert!(!phase.on_scroll(900.0));
        assert_eq!(phase, IntroPhase::Passed);
    }

    #[test]
    fn reveal_needs_a_trigger_first() {
        let mut phase = IntroPhase::default();
        phase.reveal();
        assert_eq!(phase, IntroPhase::Waiting);
        assert!(phase.overlay_visible());
        assert!(!phase.content_visible());

        phase.on_scroll(60.0);
        assert!(phase.overlay_visible());
        phase.reveal();
        assert!(!phase.overlay_visible());
        assert!(phase.content_visible());
    }

    #[test]
    fn bats_are_spread_across_the_screen() {
        let positions: Vec<_> = (0..BAT_COUNT).map(bat_left_percent).collect();
        assert_eq!(positions, vec![20, 35, 50, 65, 80]);
    }

    #[test]
    fn hero_fades_over_300px() {
        assert_eq!(hero_opacity(0.0), 1.0);
        assert!((hero_opacity(150.0) - 0.5).abs() < f64::EPSILON);
        assert_eq!(hero_opacity(300.0), 0.0);
        assert_eq!(hero_opacity(1_000.0), 0.0);
        assert_eq!(hero_opacity(-20.0), 1.0);
    }
}
