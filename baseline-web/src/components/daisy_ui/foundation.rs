pub use yew::function_component;
pub use yew::prelude::{AttrValue, Callback, Children, Html, Properties, html};
pub use yew::use_state;

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}
