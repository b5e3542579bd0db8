//! Output renderers for a resolved feature status.

use std::rc::Rc;

use anyhow::Result;
use baseline_core::{
    FeatureStatusPayload, LinkTarget, ResolvedView, SupportIcon, learn_more_url, resolve,
};
use baseline_web::components::BaselineStatusViewProps;
use baseline_web::BaselineStatusView;
use colored::{ColoredString, Colorize};
use futures::executor::block_on;
use serde::Serialize;
use yew::{AttrValue, LocalServerRenderer};

#[derive(Serialize)]
struct JsonReport {
    learn_more: String,
    #[serde(flatten)]
    view: ResolvedView,
}

fn paint(icon: SupportIcon, text: &str) -> ColoredString {
    match icon {
        SupportIcon::Available | SupportIcon::Widely => text.green(),
        SupportIcon::Unavailable => text.red(),
        SupportIcon::Newly => text.blue(),
        SupportIcon::NoData => text.dimmed(),
    }
}

/// Human-readable summary for a terminal.
#[must_use]
pub fn console(feature_id: &str, payload: &FeatureStatusPayload) -> String {
    let view = resolve(feature_id, payload);
    let mut lines = vec![view.name.bold().to_string()];
    if view.badge {
        lines.push(format!(
            "{} {}",
            view.headline.bold(),
            "[newly available]".blue()
        ));
    } else {
        lines.push(view.headline.bold().to_string());
    }
    lines.push(format!("  {}", view.description));
    for browser in &view.browsers {
        let style = browser.icon.style();
        lines.push(format!(
            "  {:<8} {} {}",
            browser.browser.name(),
            paint(browser.icon, style.glyph),
            style.label.dimmed()
        ));
    }
    if let Some(upvotes) = &view.upvotes {
        lines.push(format!("  {}: {}", upvotes.label, upvotes.link.underline()));
    }
    lines.push(format!(
        "  Learn more: {}",
        learn_more_url(&view.feature_id).underline()
    ));
    lines.push(String::new());
    lines.join("\n")
}

/// Pretty JSON of the resolved view.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn json(feature_id: &str, payload: &FeatureStatusPayload) -> Result<String> {
    let view = resolve(feature_id, payload);
    let report = JsonReport {
        learn_more: learn_more_url(&view.feature_id),
        view,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Server-side rendering of the widget markup.
#[must_use]
pub fn html(feature_id: &str, payload: FeatureStatusPayload, target: LinkTarget) -> String {
    let props = BaselineStatusViewProps {
        feature_id: AttrValue::from(feature_id.to_string()),
        payload: Rc::new(payload),
        open_in_new_tab: target == LinkTarget::NewTab,
    };
    block_on(LocalServerRenderer::<BaselineStatusView>::with_props(props).render())
}
