//! Color picker: one swatch per palette entry

use leptos::prelude::*;
use shared::model::HexColor;
use shared::utils::{join_classes, pick};
use shared::viewport::DeviceClass;

#[component]
pub fn ColorButtons(
    on_color: Callback<HexColor>,
    #[prop(into)] device: Signal<DeviceClass>,
    swatches: Vec<(String, HexColor)>,
    #[prop(into)] selected: Signal<HexColor>,
) -> impl IntoView {
    // Vertical rail on desktop, a row under the header otherwise
    let container_class = move || {
        let device = device.get();
        join_classes(&[
            "fixed z-30 flex gap-3",
            pick(
                device.is_desktop(),
                "flex-col left-8 top-1/2 -translate-y-1/2",
                "flex-row left-1/2 -translate-x-1/2",
            ),
            match device {
                DeviceClass::Mobile => "top-16",
                DeviceClass::Tablet => "top-20",
                DeviceClass::Desktop => "",
            },
        ])
    };
    let size = move || match device.get() {
        DeviceClass::Mobile => "w-6 h-6",
        _ => "w-8 h-8",
    };

    view! {
        <div class=container_class role="radiogroup" aria-label="Color">
            {swatches
                .into_iter()
                .map(|(name, color)| {
                    let hex = color.as_str().to_string();
                    let ring = pick(color.is_light(), "border-slate-300", "border-transparent");
                    let is_selected = {
                        let color = color.clone();
                        move || selected.with(|current| *current == color)
                    };
                    let button_class = {
                        let is_selected = is_selected.clone();
                        move || join_classes(&[
                            "rounded-full border-2 transition-transform duration-300 hover:scale-110",
                            size(),
                            ring,
                            pick(is_selected(), "ring-2 ring-slate-700 ring-offset-2", ""),
                        ])
                    };
                    view! {
                        <button
                            class=button_class
                            role="radio"
                            aria-checked=move || is_selected().to_string()
                            aria-label=name.clone()
                            title=name
                            style=format!("background-color: {};", hex)
                            on:click=move |_| on_color.run(color.clone())
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}
