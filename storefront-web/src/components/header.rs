//! Header with brand mark and section navigation

use leptos::prelude::*;
use shared::model::Section;
use shared::utils::{join_classes, pick};
use shared::viewport::DeviceClass;

#[component]
pub fn Header(
    #[prop(into)] section: Signal<Section>,
    on_section: Callback<Section>,
    #[prop(into)] device: Signal<DeviceClass>,
) -> impl IntoView {
    let nav_class = move || {
        let device = device.get();
        join_classes(&[
            "relative z-20 flex items-center w-full",
            pick(device.is_compact(), "justify-between px-4 py-4", "justify-start gap-16 px-16 py-6"),
        ])
    };
    let links_class = move || {
        join_classes(&[
            "flex items-center",
            match device.get() {
                DeviceClass::Mobile => "gap-3 text-xs",
                DeviceClass::Tablet => "gap-6 text-sm",
                DeviceClass::Desktop => "gap-10 text-sm",
            },
        ])
    };

    view! {
        <nav class=nav_class>
            <span class="text-2xl font-black tracking-tighter text-slate-800">"DUNK"</span>
            <ul class=links_class>
                {Section::ALL
                    .into_iter()
                    .map(|item| {
                        let active = move || section.get() == item;
                        view! {
                            <li>
                                <button
                                    class=move || join_classes(&[
                                        "uppercase tracking-wider font-semibold transition-colors duration-300",
                                        pick(active(), "text-slate-900", "text-slate-400"),
                                    ])
                                    aria-current=move || active().then_some("page")
                                    on:click=move |_| on_section.run(item)
                                >
                                    {item.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
