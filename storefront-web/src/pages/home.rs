//! Landing page controller
//!
//! Owns the page state, wires the children's callbacks into the visibility
//! sequencer and renders the composed layout.

use leptos::prelude::*;
use shared::config::landing_config;
use shared::layout::{
    PageLayout, CTA_ROW_CLASS, EYEBROW_CLASS, PRIMARY_CTA_CLASS, SECONDARY_CTA_CLASS,
    SUBTITLE_CLASS,
};
use shared::model::{HexColor, Section};

use crate::components::{Background, ColorButtons, Footer, Header, Scene3D};
use crate::services::viewport::track_viewport;
use crate::state::page::{provide_page_context, use_page_context};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = landing_config();
    let ctx = provide_page_context(config);

    track_viewport(ctx.device, config.breakpoints.clone());
    ctx.activate();
    on_cleanup(move || ctx.cancel());

    let layout = Memo::new(move |_| ctx.layout());
    let section = Memo::new(move |_| layout.with(|l| l.section));
    let color = Memo::new(move |_| ctx.color());
    let device = ctx.device.read_only();

    let on_section = Callback::new(move |next: Section| ctx.change_section(next));
    let on_color = Callback::new(move |next: HexColor| ctx.change_color(next));

    view! {
        <div class=move || layout.with(|l| l.root_class)>
            <Background/>
            <ColorButtons
                on_color=on_color
                device=device
                swatches=config.swatches()
                selected=color
            />
            <Header
                section=section
                on_section=on_section
                device=device
            />

            <div class=move || layout.with(|l| l.row_class.clone())>
                <div class=move || layout.with(|l| l.text_column_class.clone())>
                    // Rebuilt whenever the section changes so the enter animation replays
                    {move || {
                        section.track();
                        view! { <SectionPanel layout=layout/> }
                    }}
                </div>

                <div
                    class=move || layout.with(|l| l.viewer_class.clone())
                    style=layout.with_untracked(|l| l.viewer_container_style())
                >
                    <Scene3D props=Signal::derive(move || layout.with(|l| l.viewer.clone()))/>
                </div>
            </div>

            <Footer device=device/>
        </div>
    }
}

/// Copy block for the section current when the panel is built.
#[component]
fn SectionPanel(layout: Memo<PageLayout>) -> impl IntoView {
    let ctx = use_page_context();
    let (section, content) = layout.with_untracked(|l| (l.section, l.content));

    let panel_style = move || layout.with(|l| l.panel_style(ctx.section_leaving()));

    view! {
        <div class="space-y-4" data-section=section.id() style=panel_style>
            <span class=EYEBROW_CLASS>{content.eyebrow}</span>

            <h1 class=move || layout.with(|l| l.heading_class.clone())>
                {content.title}
            </h1>

            <h2 class=SUBTITLE_CLASS>{content.subtitle}</h2>

            <p class=move || layout.with(|l| l.body_class.clone())>
                {content.body}
            </p>

            <div class=CTA_ROW_CLASS>
                <button class=PRIMARY_CTA_CLASS>{content.primary_cta}</button>
                <button class=SECONDARY_CTA_CLASS>{content.secondary_cta}</button>
            </div>
        </div>
    }
}
