//! Icon URLs for the status widget: browser logos under
//! `static/icons/browsers/` and Baseline marks under `static/icons/baseline/`.

/// Root-anchored asset URL, prefixed with the compile-time `PUBLIC_URL` when
/// the widget bundle is hosted below the site root.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Logo for a browser family key such as `firefox`.
#[must_use]
pub fn browser_logo(browser_key: &str) -> String {
    asset_path(&format!("static/icons/browsers/{browser_key}.svg"))
}

/// Baseline mark for a tier key such as `widely`.
#[must_use]
pub fn baseline_mark(tier_key: &str) -> String {
    asset_path(&format!("static/icons/baseline/{tier_key}.svg"))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
