use leptos::prelude::*;

/// Line icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    name: &'static str,
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=format!("/icons/{}.svg", name)
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

pub mod icons {
    pub const MENU: &str = "menu";
    pub const CLOSE: &str = "x";
    pub const SEARCH: &str = "search";
    pub const BAG: &str = "shopping-bag";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const STAR: &str = "star";
}
