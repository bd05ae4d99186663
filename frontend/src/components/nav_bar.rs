use authgate_shared::NavLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub links: Vec<NavLink>,
    pub separator: String,
}

/// Links rendered inside the injected `<nav>`; the element itself is created
/// by the document adapter so it can be prepended before Yew mounts.
#[function_component(NavBarLinks)]
pub fn nav_bar_links(props: &NavBarProps) -> Html {
    html! {
        <>
            { for props.links.iter().enumerate().map(|(index, link)| html! {
                <>
                    { if index > 0 { html! { <>{ props.separator.clone() }</> } } else { html! {} } }
                    <a href={link.href.clone()}>{ link.label.clone() }</a>
                </>
            }) }
        </>
    }
}
