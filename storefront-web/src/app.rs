//! Dunk Low Landing Page - Leptos Frontend

use leptos::prelude::*;
use shared::config::{init_config, landing_config, LandingConfig};

use crate::pages::HomePage;
use crate::utils::constants::EMBEDDED_CONFIG;

#[component]
pub fn App() -> impl IntoView {
    load_config();

    view! {
        <HomePage/>
    }
}

/// Install the embedded page config, keeping the defaults if it is unusable.
fn load_config() {
    let config = match LandingConfig::from_json(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("embedded config rejected, using defaults: {}", e);
            return;
        }
    };
    match init_config(config) {
        Ok(()) => log::debug!("config loaded: {:?}", landing_config().timings),
        // Remounting the app keeps the first config
        Err(e) => log::debug!("{}", e),
    }
}
