#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use baseline_core::FeatureStatusPayload;
use baseline_web::BaselineStatusView;
use baseline_web::components::BaselineStatusViewProps;
use wasm_bindgen_test::*;
use yew::{AttrValue, Renderer};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root() -> web_sys::Element {
    let doc = baseline_web::dom::window()
        .and_then(|w| w.document())
        .expect("document");
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

#[wasm_bindgen_test]
async fn fallback_view_mounts_in_browser() {
    let root = fresh_root();
    Renderer::<BaselineStatusView>::with_root_and_props(
        root.clone(),
        BaselineStatusViewProps {
            feature_id: AttrValue::from("grid"),
            payload: Rc::new(FeatureStatusPayload::no_data("grid")),
            open_in_new_tab: false,
        },
    )
    .render();
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("Unknown availability"));
}
