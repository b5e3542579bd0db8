#![forbid(unsafe_code)]
//! Yew rendering of Baseline feature status badges.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod components;
pub mod dom;
pub mod fetch;
pub mod paths;

pub use components::{BaselineStatus, BaselineStatusProps, BaselineStatusView};
pub use fetch::WebStatusSource;

/// Mount a status widget into `root`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn mount(root: web_sys::Element, feature_id: String, open_in_new_tab: bool) {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    yew::Renderer::<BaselineStatus>::with_root_and_props(
        root,
        BaselineStatusProps {
            feature_id: feature_id.into(),
            open_in_new_tab,
            api_base: None,
        },
    )
    .render();
}
