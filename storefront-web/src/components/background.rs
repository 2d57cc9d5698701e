//! Background Component
//! Soft gradient with slowly drifting color orbs behind the page

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::utils::constants::BACKGROUND_ORB_COUNT;

#[component]
pub fn Background() -> impl IntoView {
    let container: NodeRef<html::Div> = NodeRef::new();

    // Populate once the element is in the DOM
    Effect::new(move || {
        if let Some(element) = container.get() {
            if let Err(e) = create_orbs(&element) {
                log::warn!("failed to create background orbs: {:?}", e);
            }
        }
    });

    view! {
        <div class="page-background" aria-hidden="true" node_ref=container></div>
    }
}

fn create_orbs(container: &HtmlElement) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    for _ in 0..BACKGROUND_ORB_COUNT {
        let orb = document.create_element("div")?;
        orb.set_class_name("orb");

        let left = js_sys::Math::random() * 100.0;
        let top = js_sys::Math::random() * 100.0;
        let size = js_sys::Math::random() * 220.0 + 80.0;
        let delay = js_sys::Math::random() * 8.0;
        let duration = js_sys::Math::random() * 10.0 + 14.0;

        orb.set_attribute(
            "style",
            &format!(
                "left: {:.2}%; top: {:.2}%; width: {:.0}px; height: {:.0}px; \
                 animation-delay: -{:.2}s; animation-duration: {:.2}s;",
                left, top, size, size, delay, duration
            ),
        )?;

        container.append_child(&orb)?;
    }

    Ok(())
}
