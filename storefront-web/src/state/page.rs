//! Page controller state: the sequencer and the device class behind signals.

use leptos::prelude::*;
use shared::config::LandingConfig;
use shared::layout::{compose, PageLayout};
use shared::model::{HexColor, PageState, Section};
use shared::sequencer::{Phase, Stage, Timer, TimerToken, VisibilitySequencer};
use shared::viewport::DeviceClass;

use crate::services::timers;

/// Page context shared by the controller and its children.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub sequencer: RwSignal<VisibilitySequencer>,
    pub device: RwSignal<DeviceClass>,
}

impl PageContext {
    pub fn new(config: &LandingConfig) -> Self {
        let sequencer = VisibilitySequencer::from_config(config).unwrap_or_else(|e| {
            log::warn!("invalid initial page state, using defaults: {}", e);
            VisibilitySequencer::default()
        });
        Self {
            sequencer: RwSignal::new(sequencer),
            device: RwSignal::new(DeviceClass::default()),
        }
    }

    pub fn state(&self) -> PageState {
        let device = self.device.get();
        self.sequencer.with(|seq| seq.snapshot(device))
    }

    pub fn layout(&self) -> PageLayout {
        compose(&self.state())
    }

    pub fn color(&self) -> HexColor {
        self.sequencer.with(|seq| seq.color().clone())
    }

    /// True while the text panel is on its way out ahead of a section commit.
    pub fn section_leaving(&self) -> bool {
        self.sequencer.with(|seq| {
            matches!(
                seq.phase(),
                Phase::HidingForSection {
                    stage: Stage::Commit,
                    ..
                }
            )
        })
    }

    /// Kick off the initial reveal.
    pub fn activate(&self) {
        let timer = self.sequencer.try_update(|seq| seq.activate()).flatten();
        self.run(timer);
    }

    pub fn change_section(&self, section: Section) {
        // Redundant triggers must not write to the signal at all
        if self
            .sequencer
            .with_untracked(|seq| seq.is_redundant_section(section))
        {
            return;
        }
        let timer = self
            .sequencer
            .try_update(|seq| seq.change_section(section))
            .flatten();
        self.run(timer);
    }

    pub fn change_color(&self, color: HexColor) {
        if self
            .sequencer
            .with_untracked(|seq| seq.is_redundant_color(&color))
        {
            return;
        }
        let timer = self
            .sequencer
            .try_update(|seq| seq.change_color(color))
            .flatten();
        self.run(timer);
    }

    /// Invalidate pending timers; called when the page unmounts.
    pub fn cancel(&self) {
        self.sequencer.try_update(|seq| seq.cancel());
    }

    fn fire(&self, token: TimerToken) {
        // The page may be gone by the time a timer elapses
        let timer = self.sequencer.try_update(|seq| seq.fire(token)).flatten();
        self.run(timer);
    }

    fn run(&self, timer: Option<Timer>) {
        if let Some(timer) = timer {
            let ctx = *self;
            timers::schedule(timer, move |token| ctx.fire(token));
        }
    }
}

pub fn provide_page_context(config: &LandingConfig) -> PageContext {
    let context = PageContext::new(config);
    provide_context(context);
    context
}

pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
