use leptos::html;
use leptos::prelude::*;

use crate::components::icon::{icons, Icon};
use crate::models::ABOUT_IMAGE;
use crate::motion::dom::{reveal_class, use_in_view};

#[component]
pub fn AboutSection() -> impl IntoView {
    let image = NodeRef::<html::Div>::new();
    let copy = NodeRef::<html::Div>::new();
    let image_visible = use_in_view(image, "0px");
    let copy_visible = use_in_view(copy, "0px");

    view! {
        <section class="about">
            <div class="container about-inner">
                <div
                    node_ref=image
                    class=move || reveal_class("about-media reveal reveal--wipe", image_visible.get())
                >
                    <div class="about-frame"></div>
                    <div class="about-image-wrap">
                        <img class="about-image" src=ABOUT_IMAGE alt="Perfume creation process"/>
                    </div>
                </div>

                <div
                    node_ref=copy
                    class=move || reveal_class("about-copy reveal reveal--copy", copy_visible.get())
                >
                    <div class="about-badge">
                        <Icon name=icons::STAR class="icon icon-sm"/>
                    </div>
                    <h2 class="about-title">
                        "The Art of " <br/>
                        <span class="about-title-muted">"Invisible"</span> " Wear"
                    </h2>
                    <p class="about-text">
                        "A perfume is like a piece of clothing, a message, a way of presenting oneself, "
                        "a costume that differs according to the woman who wears it."
                    </p>
                    <button class="journal-link">
                        "Read The Journal"
                        <Icon name=icons::ARROW_RIGHT class="icon icon-sm journal-link-arrow"/>
                    </button>
                </div>
            </div>
        </section>
    }
}
