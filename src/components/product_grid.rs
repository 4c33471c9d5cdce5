use leptos::html;
use leptos::prelude::*;

use crate::components::icon::{icons, Icon};
use crate::models::{format_price, Product};
use crate::motion::dom::{reveal_class, use_in_view};
use crate::motion::{card_delay, css_seconds};

/// How far inside the viewport a card must be before it enters
const CARD_ROOT_MARGIN: &str = "-100px";

#[component]
pub fn ProductGrid(products: &'static [Product]) -> impl IntoView {
    let header = NodeRef::<html::Div>::new();
    let header_visible = use_in_view(header, "0px");

    view! {
        <section class="products">
            <div class="container">
                <div
                    node_ref=header
                    class=move || reveal_class("products-header reveal reveal--rise", header_visible.get())
                >
                    <div>
                        <span class="eyebrow">"The Collection"</span>
                        <h2 class="products-title">"Signatures"</h2>
                    </div>
                    <button class="link-button link-button--wide-only">
                        "View All" <Icon name=icons::ARROW_RIGHT class="icon icon-sm"/>
                    </button>
                </div>

                <div class="products-grid">
                    {products
                        .iter()
                        .enumerate()
                        .map(|(index, product)| view! { <ProductCard product index/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One product; slides in once on first sight, reveals its button on hover
#[component]
pub fn ProductCard(product: &'static Product, index: usize) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let visible = use_in_view(card, CARD_ROOT_MARGIN);

    view! {
        <div
            node_ref=card
            class=move || reveal_class("product-card reveal reveal--card", visible.get())
            style=format!("transition-delay: {};", css_seconds(card_delay(index)))
        >
            <div class="product-media">
                <div class="product-image-wrap">
                    <img class="product-image" src=product.image alt=product.name/>
                </div>
                <div class="product-cta">
                    <button class="product-cta-button">"Add to Collection"</button>
                </div>
            </div>

            <div class="product-meta">
                <div>
                    <h3 class="product-name">{product.name}</h3>
                    <p class="product-notes">{product.notes}</p>
                </div>
                <span class="product-price">{format_price(product.price)}</span>
            </div>
        </div>
    }
}
