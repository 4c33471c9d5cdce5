use leptos::prelude::*;

use crate::components::icon::{icons, Icon};
use crate::motion::css_seconds;
use crate::motion::dom::use_scroll_y;
use crate::motion::nav::{item_delay, MenuState, NavAppearance};

#[component]
pub fn Nav() -> impl IntoView {
    let scroll_y = use_scroll_y();
    let appearance = Memo::new(move |_| NavAppearance::from_scroll(scroll_y.get()));
    let menu = RwSignal::new(MenuState::default());

    view! {
        <nav class=move || appearance.get().class()>
            <div class="container nav-inner">
                <button
                    class="icon-button"
                    aria-label="Open menu"
                    on:click=move |_| menu.update(MenuState::open)
                >
                    <Icon name=icons::MENU class="icon icon-lg"/>
                </button>

                <div class="nav-logo">
                    <span class="nav-logo-mark">"VP"</span>
                    <span class="nav-logo-caption">"Vogue Perfum"</span>
                </div>

                <div class="nav-actions">
                    <button class="icon-button icon-button--wide-only" aria-label="Search">
                        <Icon name=icons::SEARCH/>
                    </button>
                    <button class="icon-button icon-button--bag" aria-label="Shopping bag">
                        <Icon name=icons::BAG/>
                        <span class="bag-dot"></span>
                    </button>
                </div>
            </div>
        </nav>

        <MobileMenu menu/>
    }
}

/// Full-screen overlay listing the site sections
#[component]
fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    let close = move |_: leptos::ev::MouseEvent| menu.update(MenuState::close);

    view! {
        <div
            class=move || if menu.get().is_open() { "mobile-menu is-open" } else { "mobile-menu" }
            aria-hidden=move || (!menu.get().is_open()).to_string()
        >
            <div class="mobile-menu-header">
                <span class="mobile-menu-mark">"VP"</span>
                <button class="icon-button" aria-label="Close menu" on:click=close>
                    <Icon name=icons::CLOSE class="icon icon-xl"/>
                </button>
            </div>

            <div class="mobile-menu-items">
                // Labels mount on open so their entrance replays every time
                {move || {
                    menu.get()
                        .visible_items()
                        .iter()
                        .enumerate()
                        .map(|(i, label)| {
                            view! {
                                <a
                                    href="#"
                                    class="mobile-menu-item"
                                    style=format!("animation-delay: {}", css_seconds(item_delay(i)))
                                    on:click=close
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
