//! # Visibility Sequencer
//!
//! Choreographs the hide -> change -> show sequence of the 3D model for three
//! triggers: the initial page load, a section change and a color change.
//!
//! The sequencer is a plain state machine. It never sleeps; each operation
//! returns an optional [`Timer`] that the host schedules, and when the delay
//! elapses the host calls [`VisibilitySequencer::fire`] with the timer's token.
//! Only one timer is active at a time. Issuing a new one makes the previous
//! token stale, and firing a stale token does nothing.
//!
//! ```text
//! Idle --activate--> HidingForLoad --1000ms--> Visible
//!
//! any --change_section(s)--> HidingForSection{s, Commit}
//!     --500ms--> (section = s) HidingForSection{s, Reveal}
//!     --800ms--> Visible
//!
//! any --change_color(c)--> HidingForColor{c, Commit}
//!     --350ms--> (color = c) HidingForColor{c, Reveal}
//!     --400ms--> Visible
//! ```
//!
//! ## Overlapping triggers
//!
//! A new trigger cancels whatever is in flight and restarts from the hide
//! step. A superseded commit of the *other* kind is applied right away (the
//! model is hidden at that point, so nothing visibly jumps); a superseded
//! commit of the *same* kind is dropped in favor of the newer target.
//!
//! ```rust
//! use shared::model::Section;
//! use shared::sequencer::VisibilitySequencer;
//!
//! let mut seq = VisibilitySequencer::default();
//! let load = seq.activate().unwrap();
//! assert_eq!(load.delay_ms, 1000);
//! assert!(seq.fire(load.token).is_none());
//! assert!(seq.model_visible());
//!
//! let hide = seq.change_section(Section::NewArrivals).unwrap();
//! assert!(!seq.model_visible());
//! let reveal = seq.fire(hide.token).unwrap();
//! assert_eq!(seq.section(), Section::NewArrivals);
//! seq.fire(reveal.token);
//! assert!(seq.model_visible());
//! ```

use crate::config::{LandingConfig, Timings};
use crate::error::Result;
use crate::model::{HexColor, PageState, Section};
use crate::viewport::DeviceClass;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trigger {
    Section,
    Color,
}

/// Identifies the single active timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A delayed step the host must schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub delay_ms: u32,
    pub token: TimerToken,
}

/// Which half of a change sequence is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Model hidden, waiting to apply the new value.
    Commit,
    /// Value applied, waiting to show the model again.
    Reveal,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Not activated yet.
    #[default]
    Idle,
    HidingForLoad,
    HidingForSection { target: Section, stage: Stage },
    HidingForColor { target: HexColor, stage: Stage },
    Visible,
}

#[derive(Clone, Debug)]
pub struct VisibilitySequencer {
    section: Section,
    color: HexColor,
    model_visible: bool,
    phase: Phase,
    timings: Timings,
    generation: u64,
    active: Option<TimerToken>,
}

impl Default for VisibilitySequencer {
    fn default() -> Self {
        Self::new(Section::default(), HexColor::default(), Timings::default())
    }
}

impl VisibilitySequencer {
    pub fn new(section: Section, color: HexColor, timings: Timings) -> Self {
        Self {
            section,
            color,
            model_visible: false,
            phase: Phase::Idle,
            timings,
            generation: 0,
            active: None,
        }
    }

    pub fn from_config(config: &LandingConfig) -> Result<Self> {
        Ok(Self::new(
            config.default_section,
            config.initial_color()?,
            config.timings.clone(),
        ))
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn color(&self) -> &HexColor {
        &self.color
    }

    pub fn model_visible(&self) -> bool {
        self.model_visible
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True once the model is shown and no timer is pending.
    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Visible && self.active.is_none()
    }

    /// Full page state for the given device class.
    pub fn snapshot(&self, device: DeviceClass) -> PageState {
        PageState {
            section: self.section,
            color: self.color.clone(),
            device,
            model_visible: self.model_visible,
        }
    }

    /// Start the initial reveal. Only the first call does anything.
    pub fn activate(&mut self) -> Option<Timer> {
        if self.phase != Phase::Idle {
            log::trace!("activate ignored in phase {:?}", self.phase);
            return None;
        }
        self.phase = Phase::HidingForLoad;
        log::debug!("sequencer activated, revealing in {}ms", self.timings.initial_reveal);
        Some(self.schedule(self.timings.initial_reveal))
    }

    /// True if `section` is already committed or already on its way in.
    pub fn is_redundant_section(&self, section: Section) -> bool {
        let effective = match &self.phase {
            Phase::HidingForSection {
                target,
                stage: Stage::Commit,
            } => *target,
            _ => self.section,
        };
        section == effective
    }

    /// True if `color` is already committed or already on its way in.
    pub fn is_redundant_color(&self, color: &HexColor) -> bool {
        let effective = match &self.phase {
            Phase::HidingForColor {
                target,
                stage: Stage::Commit,
            } => target,
            _ => &self.color,
        };
        color == effective
    }

    pub fn change_section(&mut self, section: Section) -> Option<Timer> {
        if self.is_redundant_section(section) {
            log::trace!("section {} already active", section);
            return None;
        }

        self.interrupt(Trigger::Section);
        self.model_visible = false;
        self.phase = Phase::HidingForSection {
            target: section,
            stage: Stage::Commit,
        };
        log::debug!("hiding model for section {}", section);
        Some(self.schedule(self.timings.section_hide))
    }

    pub fn change_color(&mut self, color: HexColor) -> Option<Timer> {
        if self.is_redundant_color(&color) {
            log::trace!("color {} already active", color);
            return None;
        }

        self.interrupt(Trigger::Color);
        self.model_visible = false;
        log::debug!("hiding model for color {}", color);
        self.phase = Phase::HidingForColor {
            target: color,
            stage: Stage::Commit,
        };
        Some(self.schedule(self.timings.color_hide))
    }

    /// Advance the pending step. Stale tokens are ignored.
    pub fn fire(&mut self, token: TimerToken) -> Option<Timer> {
        if self.active != Some(token) {
            log::trace!("ignoring stale timer {:?}", token);
            return None;
        }
        self.active = None;

        match std::mem::take(&mut self.phase) {
            Phase::HidingForSection {
                target,
                stage: Stage::Commit,
            } => {
                self.section = target;
                self.phase = Phase::HidingForSection {
                    target,
                    stage: Stage::Reveal,
                };
                log::debug!("section committed: {}", target);
                Some(self.schedule(self.timings.section_reveal))
            }
            Phase::HidingForColor {
                target,
                stage: Stage::Commit,
            } => {
                log::debug!("color committed: {}", target);
                self.color = target.clone();
                self.phase = Phase::HidingForColor {
                    target,
                    stage: Stage::Reveal,
                };
                Some(self.schedule(self.timings.color_reveal))
            }
            Phase::HidingForLoad
            | Phase::HidingForSection {
                stage: Stage::Reveal,
                ..
            }
            | Phase::HidingForColor {
                stage: Stage::Reveal,
                ..
            } => {
                self.model_visible = true;
                self.phase = Phase::Visible;
                log::debug!("model revealed");
                None
            }
            phase @ (Phase::Idle | Phase::Visible) => {
                self.phase = phase;
                None
            }
        }
    }

    /// Invalidate the active timer, leaving state as it is.
    pub fn cancel(&mut self) {
        if let Some(token) = self.active.take() {
            log::debug!("cancelled timer {:?} in phase {:?}", token, self.phase);
        }
    }

    /// Drop the in-flight sequence before a new one starts.
    ///
    /// A pending commit of the other kind is applied now; one of the same kind
    /// is discarded since the incoming trigger replaces it.
    fn interrupt(&mut self, incoming: Trigger) {
        self.active = None;
        match (std::mem::take(&mut self.phase), incoming) {
            (
                Phase::HidingForColor {
                    target,
                    stage: Stage::Commit,
                },
                Trigger::Section,
            ) => {
                log::debug!("flushing pending color {}", target);
                self.color = target;
            }
            (
                Phase::HidingForSection {
                    target,
                    stage: Stage::Commit,
                },
                Trigger::Color,
            ) => {
                log::debug!("flushing pending section {}", target);
                self.section = target;
            }
            (phase, _) => log::trace!("superseding {:?}", phase),
        }
    }

    fn schedule(&mut self, delay_ms: u32) -> Timer {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.active = Some(token);
        Timer { delay_ms, token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Virtual clock that plays the host's role: it schedules every returned
    /// timer, stale ones included, and fires them in due order.
    struct Harness {
        seq: VisibilitySequencer,
        now: u64,
        queue: Vec<(u64, TimerToken)>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                seq: VisibilitySequencer::default(),
                now: 0,
                queue: Vec::new(),
            }
        }

        fn mounted() -> Self {
            let mut h = Self::new();
            let timer = h.seq.activate();
            h.schedule(timer);
            h.advance_to(1000);
            h
        }

        fn schedule(&mut self, timer: Option<Timer>) {
            if let Some(timer) = timer {
                self.queue.push((self.now + u64::from(timer.delay_ms), timer.token));
            }
        }

        fn section(&mut self, section: Section) -> bool {
            let timer = self.seq.change_section(section);
            let scheduled = timer.is_some();
            self.schedule(timer);
            scheduled
        }

        fn color(&mut self, hex: &str) -> bool {
            let timer = self.seq.change_color(HexColor::parse(hex).unwrap());
            let scheduled = timer.is_some();
            self.schedule(timer);
            scheduled
        }

        fn advance_to(&mut self, t: u64) {
            loop {
                self.queue.sort_by_key(|(due, _)| *due);
                match self.queue.first() {
                    Some(&(due, token)) if due <= t => {
                        self.queue.remove(0);
                        self.now = due;
                        let next = self.seq.fire(token);
                        self.schedule(next);
                    }
                    _ => break,
                }
            }
            self.now = t;
        }

        fn advance_by(&mut self, ms: u64) {
            self.advance_to(self.now + ms);
        }
    }

    #[test]
    fn test_initial_reveal_after_1000ms() {
        let mut h = Harness::new();
        let timer = h.seq.activate().unwrap();
        assert_eq!(timer.delay_ms, 1000);
        assert_eq!(h.seq.phase(), &Phase::HidingForLoad);
        h.schedule(Some(timer));

        h.advance_to(999);
        assert!(!h.seq.model_visible());

        h.advance_to(1000);
        assert!(h.seq.model_visible());
        assert!(h.seq.is_settled());
        assert_eq!(h.seq.section(), Section::Releases);
        assert_eq!(h.seq.color(), &HexColor::white());
    }

    #[test]
    fn test_activate_is_one_shot() {
        let mut h = Harness::mounted();
        assert!(h.seq.activate().is_none());
    }

    #[test]
    fn test_section_change_timeline() {
        let mut h = Harness::mounted();
        let start = h.now;

        assert!(h.section(Section::NewArrivals));
        assert!(!h.seq.model_visible());
        assert_eq!(h.seq.section(), Section::Releases);

        h.advance_to(start + 499);
        assert_eq!(h.seq.section(), Section::Releases);

        h.advance_to(start + 500);
        assert_eq!(h.seq.section(), Section::NewArrivals);
        assert!(!h.seq.model_visible());

        h.advance_to(start + 1299);
        assert!(!h.seq.model_visible());

        h.advance_to(start + 1300);
        assert!(h.seq.model_visible());
        assert!(h.seq.is_settled());
    }

    #[test]
    fn test_color_change_timeline() {
        let mut h = Harness::mounted();
        let start = h.now;

        assert!(h.color("#000000"));
        assert!(!h.seq.model_visible());

        h.advance_to(start + 349);
        assert_eq!(h.seq.color(), &HexColor::white());

        h.advance_to(start + 350);
        assert_eq!(h.seq.color(), &HexColor::black());
        assert!(!h.seq.model_visible());

        h.advance_to(start + 750);
        assert!(h.seq.model_visible());
    }

    #[test]
    fn test_same_section_is_noop() {
        let mut h = Harness::mounted();
        let before = h.seq.clone();

        assert!(h.seq.change_section(Section::Releases).is_none());
        assert_eq!(h.seq.phase(), before.phase());
        assert_eq!(h.seq.model_visible(), before.model_visible());
        assert!(h.seq.is_settled());
    }

    #[test]
    fn test_same_color_is_noop() {
        let mut h = Harness::mounted();
        assert!(!h.color("#ffffff"));
        assert!(!h.color("#FFF"));
        assert!(h.seq.model_visible());
        assert!(h.seq.is_settled());
    }

    #[test]
    fn test_same_color_twice_changes_once() {
        let mut h = Harness::mounted();
        assert!(h.color("#000000"));
        assert!(!h.color("#000000"));
        h.advance_by(100);
        assert!(!h.color("#000000"));

        h.advance_by(2000);
        assert_eq!(h.seq.color(), &HexColor::black());
        assert!(h.seq.model_visible());
        // After settling, repeating it is still a no-op.
        assert!(!h.color("#000000"));
    }

    #[test]
    fn test_redundancy_checks_follow_pending_target() {
        let mut seq = VisibilitySequencer::default();
        assert!(seq.is_redundant_section(Section::Releases));
        assert!(seq.is_redundant_color(&HexColor::white()));
        assert!(!seq.is_redundant_color(&HexColor::black()));

        let hide = seq.change_section(Section::Classics).unwrap();
        assert!(seq.is_redundant_section(Section::Classics));
        assert!(!seq.is_redundant_section(Section::Releases));

        // Once committed, the reveal stage no longer counts as pending.
        seq.fire(hide.token).unwrap();
        assert!(seq.is_redundant_section(Section::Classics));

        seq.change_color(HexColor::black()).unwrap();
        assert!(seq.is_redundant_color(&HexColor::parse("#000").unwrap()));
        assert!(!seq.is_redundant_color(&HexColor::white()));
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let mut h = Harness::mounted();
        let start = h.now;

        h.section(Section::NewArrivals);
        h.advance_to(start + 200);
        h.section(Section::Classics);

        // The first commit would have landed at +500; it was dropped.
        h.advance_to(start + 500);
        assert_eq!(h.seq.section(), Section::Releases);

        h.advance_to(start + 700);
        assert_eq!(h.seq.section(), Section::Classics);
        assert!(!h.seq.model_visible());

        h.advance_to(start + 1500);
        assert!(h.seq.model_visible());
        assert!(h.seq.is_settled());
    }

    #[test]
    fn test_new_trigger_during_reveal_keeps_model_hidden() {
        let mut h = Harness::mounted();
        let start = h.now;

        h.section(Section::NewArrivals);
        h.advance_to(start + 600);
        assert_eq!(h.seq.section(), Section::NewArrivals);

        h.section(Section::Classics);
        // The old reveal at +1300 must not show the model mid-sequence.
        h.advance_to(start + 1300);
        assert!(!h.seq.model_visible());
        assert_eq!(h.seq.section(), Section::Classics);

        h.advance_to(start + 1900);
        assert!(h.seq.model_visible());
    }

    #[test]
    fn test_color_during_pending_section_flushes_section() {
        let mut h = Harness::mounted();
        let start = h.now;

        h.section(Section::NewArrivals);
        h.advance_to(start + 100);
        h.color("#c8102e");
        assert_eq!(h.seq.section(), Section::NewArrivals);
        assert!(!h.seq.model_visible());

        h.advance_to(start + 450);
        assert_eq!(h.seq.color().as_str(), "#c8102e");

        h.advance_to(start + 849);
        assert!(!h.seq.model_visible());
        h.advance_to(start + 850);
        assert!(h.seq.model_visible());
        assert_eq!(h.seq.section(), Section::NewArrivals);
    }

    #[test]
    fn test_section_during_pending_color_flushes_color() {
        let mut h = Harness::mounted();
        h.color("#000000");
        h.advance_by(100);
        h.section(Section::Classics);
        assert_eq!(h.seq.color(), &HexColor::black());

        h.advance_by(1300);
        assert_eq!(h.seq.section(), Section::Classics);
        assert!(h.seq.model_visible());
    }

    #[test]
    fn test_reverting_pending_section() {
        let mut h = Harness::mounted();
        h.section(Section::NewArrivals);
        h.advance_by(100);
        // Pending target is NewArrivals, so going back is a real change.
        assert!(h.section(Section::Releases));
        // And asking for the pending target again is redundant.
        assert!(!h.section(Section::Releases));

        h.advance_by(1300);
        assert_eq!(h.seq.section(), Section::Releases);
        assert!(h.seq.model_visible());
    }

    #[test]
    fn test_trigger_during_initial_load() {
        let mut h = Harness::new();
        let timer = h.seq.activate();
        h.schedule(timer);
        h.advance_to(300);
        h.color("#000000");

        // The load timer at 1000 is superseded; the color reveal lands at 1050.
        h.advance_to(1000);
        assert!(!h.seq.model_visible());
        h.advance_to(1050);
        assert!(h.seq.model_visible());
        assert_eq!(h.seq.color(), &HexColor::black());
    }

    #[test]
    fn test_stale_token_ignored() {
        let mut seq = VisibilitySequencer::default();
        let load = seq.activate().unwrap();
        let hide = seq.change_section(Section::Classics).unwrap();

        assert!(seq.fire(load.token).is_none());
        assert!(!seq.model_visible());

        let reveal = seq.fire(hide.token).unwrap();
        assert!(seq.fire(hide.token).is_none());
        assert!(seq.fire(reveal.token).is_none());
        assert!(seq.model_visible());
    }

    #[test]
    fn test_cancel_stops_sequence() {
        let mut h = Harness::new();
        let timer = h.seq.activate();
        h.schedule(timer);
        h.seq.cancel();
        h.advance_to(5000);
        assert!(!h.seq.model_visible());
        assert!(!h.seq.is_settled());
    }

    #[test]
    fn test_custom_timings() {
        let config = LandingConfig::from_json(
            r#"{ "timings": { "section_hide": 10, "section_reveal": 20 }, "default_section": "Classics" }"#,
        )
        .unwrap();
        let mut seq = VisibilitySequencer::from_config(&config).unwrap();
        assert_eq!(seq.section(), Section::Classics);

        let hide = seq.change_section(Section::Releases).unwrap();
        assert_eq!(hide.delay_ms, 10);
        let reveal = seq.fire(hide.token).unwrap();
        assert_eq!(reveal.delay_ms, 20);
    }

    #[test]
    fn test_snapshot_carries_device() {
        let seq = VisibilitySequencer::default();
        let state = seq.snapshot(DeviceClass::Tablet);
        assert_eq!(state.device, DeviceClass::Tablet);
        assert_eq!(state.section, Section::Releases);
        assert!(!state.model_visible);
    }
}
