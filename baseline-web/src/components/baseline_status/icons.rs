//! Icon rendering. Asset choice is keyed purely by name; every support
//! state resolves through the closed [`SupportIcon::style`] table.

use baseline_core::{BaselineTier, BrowserView, SupportIcon};
use yew::prelude::*;

use crate::paths;

#[must_use]
pub fn baseline_mark(tier: BaselineTier) -> Html {
    html! {
        <img
            class={classes!("baseline-mark", format!("baseline-mark-{}", tier.key()))}
            src={paths::baseline_mark(tier.key())}
            alt=""
            aria-hidden="true"
            width="36"
            height="20"
        />
    }
}

#[must_use]
pub fn support_icon(icon: SupportIcon) -> Html {
    let style = icon.style();
    html! {
        <span
            class={classes!("support-icon", style.class)}
            style={format!("color:{}", style.color)}
            title={style.label}
        >
            { style.glyph }
        </span>
    }
}

#[must_use]
pub fn browser_entry(view: &BrowserView) -> Html {
    let browser = view.browser;
    html! {
        <span class={classes!("browser", browser.key())} data-icon={view.icon.key()}>
            <img
                src={paths::browser_logo(browser.key())}
                alt={browser.name()}
                width="20"
                height="20"
            />
            { support_icon(view.icon) }
        </span>
    }
}
