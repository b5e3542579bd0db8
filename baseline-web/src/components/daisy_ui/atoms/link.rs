use baseline_core::LinkTarget;

use crate::components::daisy_ui::foundation as f;

/// Outbound link whose `target`/`rel` pair follows a [`LinkTarget`].
#[derive(f::Properties, PartialEq, Clone)]
pub struct LinkProps {
    pub href: f::AttrValue,
    pub label: f::AttrValue,
    #[prop_or_default]
    pub target: LinkTarget,
    #[prop_or_default]
    pub title: Option<f::AttrValue>,
}

#[f::function_component(Link)]
pub fn link(props: &LinkProps) -> f::Html {
    let target = f::AttrValue::from(props.target.target());
    let rel: Option<f::AttrValue> = props.target.rel().map(f::AttrValue::from);
    f::html! {
        <a
            class="link"
            href={props.href.clone()}
            target={target}
            rel={rel}
            title={f::attr_value(&props.title)}
        >
            { props.label.clone() }
        </a>
    }
}
