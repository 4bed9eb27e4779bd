use yew::prelude::*;

use crate::reveal::motion::Motion;
use crate::reveal::store::RevealState;

#[derive(Properties, PartialEq)]
pub struct AnimatedProps {
    pub state: RevealState,
    pub motion: Motion,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub class: Classes,
    /// Extra inline style, e.g. a background image.
    #[prop_or_default]
    pub style: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

/// A `div` that sits in its motion's initial pose until `state` becomes
/// `Revealed`, then transitions to the settled pose.
#[function_component(Animated)]
pub fn animated(props: &AnimatedProps) -> Html {
    let mut style = props.motion.style(props.state);
    if let Some(extra) = &props.style {
        style.push(' ');
        style.push_str(extra);
    }
    html! {
        <div ref={props.node_ref.clone()} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

pub fn background(url: &str) -> Option<String> {
    Some(format!("background-image: url(\"{}\");", url))
}
