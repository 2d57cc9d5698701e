//! Viewport observation: keeps a [`DeviceClass`] signal in sync with the window.

use leptos::ev;
use leptos::prelude::*;
use shared::config::Breakpoints;
use shared::viewport::DeviceClass;

/// Current `window.innerWidth`, if there is a window to ask.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Classify now and on every resize until the owning component is torn down.
pub fn track_viewport(device: RwSignal<DeviceClass>, breakpoints: Breakpoints) {
    let update = move || match viewport_width() {
        Some(width) => {
            let class = DeviceClass::classify(width, &breakpoints);
            if device.get_untracked() != class {
                log::debug!("viewport {}px -> {:?}", width, class);
                device.set(class);
            }
        }
        None => log::warn!("cannot read viewport width, keeping {:?}", device.get_untracked()),
    };

    update();
    let handle = window_event_listener(ev::resize, move |_| update());
    on_cleanup(move || {
        log::debug!("removing resize listener");
        handle.remove();
    });
}
