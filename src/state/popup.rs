//! Popup lifecycle. Closing is two-phase so the fade-out can play: the
//! backdrop drops to opacity 0 in `Closing` and is unmounted only once the
//! transition reports completion.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupPhase {
    #[default]
    Hidden,
    /// Mounted at opacity 0; flips to `Shown` on the next tick so the
    /// fade-in transition has a start state to animate from.
    Opening,
    Shown,
    /// Fading out; still mounted until the transition ends.
    Closing,
}

impl PopupPhase {
    /// Whether the popup occupies the canvas at all.
    pub fn is_mounted(self) -> bool {
        self != PopupPhase::Hidden
    }

    /// Whether the backdrop is at full opacity.
    pub fn is_shown(self) -> bool {
        self == PopupPhase::Shown
    }

    pub fn open(self) -> Self {
        match self {
            PopupPhase::Hidden | PopupPhase::Closing => PopupPhase::Opening,
            other => other,
        }
    }

    pub fn close(self) -> Self {
        match self {
            // No fade-in has started yet, so there is no transition whose
            // completion could ever unmount a `Closing` backdrop. Hide now.
            PopupPhase::Opening => PopupPhase::Hidden,
            PopupPhase::Shown => PopupPhase::Closing,
            other => other,
        }
    }

    /// Advance after the mount tick: `Opening` becomes `Shown`.
    pub fn settle_open(self) -> Self {
        match self {
            PopupPhase::Opening => PopupPhase::Shown,
            other => other,
        }
    }

    /// Advance on transition completion: `Closing` becomes `Hidden`.
    pub fn settle_close(self) -> Self {
        match self {
            PopupPhase::Closing => PopupPhase::Hidden,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_open_close_cycle() {
        let p = PopupPhase::Hidden.open();
        assert_eq!(p, PopupPhase::Opening);
        assert!(p.is_mounted());
        let p = p.settle_open();
        assert_eq!(p, PopupPhase::Shown);
        let p = p.close();
        assert_eq!(p, PopupPhase::Closing);
        assert!(p.is_mounted());
        assert_eq!(p.settle_close(), PopupPhase::Hidden);
    }

    #[test]
    fn close_before_fade_in_hides_immediately() {
        // Still at opacity 0; waiting on a transition here would leave the
        // backdrop mounted forever.
        let p = PopupPhase::Hidden.open().close();
        assert_eq!(p, PopupPhase::Hidden);
        assert!(!p.is_mounted());
    }

    #[test]
    fn rapid_toggle_reopens_cleanly() {
        let p = PopupPhase::Hidden.open().close();
        assert_eq!(p.open(), PopupPhase::Opening);
    }

    #[test]
    fn reopen_during_fade_out() {
        let p = PopupPhase::Shown.close().open();
        assert_eq!(p, PopupPhase::Opening);
    }

    #[test]
    fn settle_is_a_no_op_elsewhere() {
        assert_eq!(PopupPhase::Hidden.settle_close(), PopupPhase::Hidden);
        assert_eq!(PopupPhase::Shown.settle_open(), PopupPhase::Shown);
        assert_eq!(PopupPhase::Hidden.close(), PopupPhase::Hidden);
    }
}
