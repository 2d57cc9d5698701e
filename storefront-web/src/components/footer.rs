//! Page footer

use leptos::prelude::*;
use shared::utils::{join_classes, pick};
use shared::viewport::DeviceClass;

#[component]
pub fn Footer(#[prop(into)] device: Signal<DeviceClass>) -> impl IntoView {
    let footer_class = move || {
        let device = device.get();
        join_classes(&[
            "relative z-10 flex items-center text-xs uppercase tracking-widest text-slate-500",
            pick(
                device.is_compact(),
                "flex-col gap-2 py-6 text-center",
                "flex-row justify-between px-16 py-8",
            ),
        ])
    };

    view! {
        <footer class=footer_class>
            <span>"Free shipping on orders over $100"</span>
            <div class="flex gap-6">
                <a href="#" class="hover:text-slate-800">"Instagram"</a>
                <a href="#" class="hover:text-slate-800">"X"</a>
                <a href="#" class="hover:text-slate-800">"TikTok"</a>
            </div>
        </footer>
    }
}
