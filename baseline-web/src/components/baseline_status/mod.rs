//! Baseline status widget: fetches a feature's status once per feature id
//! and renders it with [`BaselineStatusView`].

mod icons;
mod styles;
mod view;


use std::cell::Cell;
use std::rc::Rc;

use baseline_core::FeatureStatusPayload;
use yew::prelude::*;

pub use styles::STYLES;
pub use view::{BaselineStatusView, BaselineStatusViewProps};

const PENDING_LABEL: &str = "Loading Baseline status";

#[derive(Properties, PartialEq, Clone)]
pub struct BaselineStatusProps {
    pub feature_id: AttrValue,
    #[prop_or_default]
    pub open_in_new_tab: bool,
    /// Override for the status API base; the feature id is appended to it.
    #[prop_or_default]
    pub api_base: Option<AttrValue>,
}

/// Shared between one fetch task and the effect that started it. Once the
/// feature id changes or the widget unmounts, the task's result is dropped.
#[derive(Clone, Default)]
struct FetchGuard(Rc<Cell<bool>>);

impl FetchGuard {
    fn supersede(&self) {
        self.0.set(true);
    }

    /// Hands `value` to `apply` unless the fetch was superseded.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.0.get() {
            return false;
        }
        apply(value);
        true
    }
}

fn pending_shell(feature_id: &AttrValue) -> Html {
    html! {
        <div
            class="baseline-status baseline-status-pending"
            data-feature-id={feature_id.clone()}
            role="status"
            aria-busy="true"
            aria-label={PENDING_LABEL}
        >
            <style>{ STYLES }</style>
        </div>
    }
}

#[function_component(BaselineStatus)]
pub fn baseline_status(props: &BaselineStatusProps) -> Html {
    let payload = use_state(|| None::<Rc<FeatureStatusPayload>>);

    {
        let payload = payload.clone();
        let api_base = props.api_base.clone();
        use_effect_with(props.feature_id.clone(), move |feature_id| {
            payload.set(None);
            let guard = FetchGuard::default();
            #[cfg(target_arch = "wasm32")]
            {
                use crate::fetch::WebStatusSource;
                use baseline_core::resolve_feature_status;

                let feature_id = feature_id.clone();
                let task_guard = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let source = api_base
                        .map(|base| WebStatusSource::new(base.to_string()))
                        .unwrap_or_default();
                    let fetched = resolve_feature_status(&source, &feature_id).await;
                    let tier = fetched.tier();
                    let delivered = task_guard
                        .deliver(fetched, |fetched| payload.set(Some(Rc::new(fetched))));
                    if delivered {
                        log::debug!("{feature_id} resolved to tier {tier}");
                    } else {
                        log::debug!("dropping superseded status for {feature_id}");
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (feature_id, api_base);
            }
            move || guard.supersede()
        });
    }

    match (*payload).clone() {
        Some(fetched) => html! {
            <BaselineStatusView
                feature_id={props.feature_id.clone()}
                payload={fetched}
                open_in_new_tab={props.open_in_new_tab}
            />
        },
        None => pending_shell(&props.feature_id),
    }
}
