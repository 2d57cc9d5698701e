//! 3D viewer stage
//!
//! Hosts the product model. `visible` drives the enter/exit animation and
//! `color` tints the model; the stage itself is pure markup and CSS.

use leptos::prelude::*;
use shared::layout::ViewerProps;

/// Seconds the model takes to fade/slide in or out.
const MODEL_TRANSITION_S: f64 = 0.6;

#[component]
pub fn Scene3D(#[prop(into)] props: Signal<ViewerProps>) -> impl IntoView {
    let model_style = move || {
        props.with(|p| {
            let (opacity, transform) = if p.visible {
                (1.0, "translateY(0) rotate(-12deg) scale(1)")
            } else {
                (0.0, "translateY(24px) rotate(-4deg) scale(0.92)")
            };
            format!(
                "--product-color: {}; opacity: {}; transform: {}; \
                 transition: opacity {s}s ease, transform {s}s cubic-bezier(0.22, 1, 0.36, 1);",
                p.color,
                opacity,
                transform,
                s = MODEL_TRANSITION_S,
            )
        })
    };
    let stage_class = move || {
        props.with(|p| {
            if p.is_mobile {
                "scene3d-stage scene3d-stage--mobile"
            } else if p.is_tablet {
                "scene3d-stage scene3d-stage--tablet"
            } else {
                "scene3d-stage"
            }
        })
    };

    view! {
        <div
            class=stage_class
            data-visible=move || props.with(|p| p.visible.to_string())
            aria-hidden=move || props.with(|p| (!p.visible).to_string())
        >
            <div class="scene3d-model" style=model_style>
                <div class="scene3d-sole"></div>
                <div class="scene3d-upper"></div>
                <div class="scene3d-swoosh"></div>
            </div>
            <div
                class="scene3d-shadow"
                style=move || format!("opacity: {};", if props.with(|p| p.visible) { 0.35 } else { 0.0 })
            ></div>
        </div>
    }
}
