use crate::components::daisy_ui::foundation as f;

/// `<details>` disclosure whose summary is arbitrary markup. The summary's
/// spoken text comes from `summary_label`, so visual content can stay hidden.
#[derive(f::Properties, PartialEq, Clone)]
pub struct CollapseProps {
    pub summary: f::Html,
    #[prop_or_default]
    pub summary_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Collapse)]
pub fn collapse(props: &CollapseProps) -> f::Html {
    let open_state = f::use_state(|| false);
    let toggle = {
        let open_state = open_state.clone();
        f::Callback::from(move |_| open_state.set(!*open_state))
    };
    f::html! {
        <details class="collapse" open={*open_state}>
            <summary
                class="collapse-title"
                onclick={toggle}
                aria-label={f::attr_value(&props.summary_label)}
                aria-expanded={(*open_state).to_string()}
            >
                { props.summary.clone() }
            </summary>
            <div class="collapse-content">
                { for props.children.iter() }
            </div>
        </details>
    }
}
