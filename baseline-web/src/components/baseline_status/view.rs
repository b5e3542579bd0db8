use std::rc::Rc;

use baseline_core::{FeatureStatusPayload, LinkTarget, ResolvedView, learn_more_url, resolve};
use yew::prelude::*;

use super::icons::{baseline_mark, browser_entry};
use super::styles::STYLES;
use crate::components::daisy_ui::{Collapse, Link};

#[derive(Properties, PartialEq, Clone)]
pub struct BaselineStatusViewProps {
    pub feature_id: AttrValue,
    pub payload: Rc<FeatureStatusPayload>,
    #[prop_or_default]
    pub open_in_new_tab: bool,
}

fn summary(view: &ResolvedView) -> Html {
    html! {
        <>
            { baseline_mark(view.tier) }
            <div class="baseline-status-title" aria-hidden="true">
                <div>
                    <span class="baseline-status-headline">{ view.headline.clone() }</span>
                    if view.badge {
                        <span class="baseline-badge">{ "newly available" }</span>
                    }
                </div>
                <div class="baseline-status-browsers">
                    { for view.browsers.iter().map(browser_entry) }
                </div>
            </div>
            <span class="open-icon" aria-hidden="true">{ "▾" }</span>
        </>
    }
}

fn details(view: &ResolvedView, target: LinkTarget) -> Html {
    let upvotes = view.upvotes.as_ref().map(|upvotes| {
        html! {
            <p class="baseline-status-signals">
                <Link
                    href={AttrValue::from(upvotes.link.clone())}
                    target={target}
                    title={Some(AttrValue::from(upvotes.tooltip.clone()))}
                    label={AttrValue::from(upvotes.label.clone())}
                />
            </p>
        }
    });
    html! {
        <>
            <p class="baseline-status-description">{ view.description.clone() }</p>
            { upvotes.unwrap_or_default() }
            <p>
                <Link
                    href={AttrValue::from(learn_more_url(&view.feature_id))}
                    target={target}
                    label={AttrValue::from("Learn more")}
                />
            </p>
        </>
    }
}

/// Renders a payload as an expandable Baseline badge.
///
/// The view is resolved on every render; nothing is cached between renders.
#[function_component(BaselineStatusView)]
pub fn baseline_status_view(props: &BaselineStatusViewProps) -> Html {
    let view = resolve(&props.feature_id, &props.payload);
    let target = LinkTarget::from_new_tab(props.open_in_new_tab);
    html! {
        <div class="baseline-status" data-tier={view.tier.key()}>
            <style>{ STYLES }</style>
            <p class="name">{ view.name.clone() }</p>
            <Collapse
                summary={summary(&view)}
                summary_label={Some(AttrValue::from(view.aria_label.clone()))}
            >
                { details(&view, target) }
            </Collapse>
        </div>
    }
}
