use leptos::prelude::*;

use crate::components::{AboutSection, Hero, ProductGrid, VelocityMarquee};
use crate::models::{Product, MARQUEE_IMAGES, PRODUCTS};

/// Marquee drift in percent per second; negative scrolls the strip leftwards at rest
const MARQUEE_BASE_VELOCITY: f64 = -1.0;

#[component]
pub fn HomePage() -> impl IntoView {
    let images: &'static [&'static str] = &MARQUEE_IMAGES;
    let products: &'static [Product] = &PRODUCTS;

    view! {
        <Hero/>
        <VelocityMarquee images base_velocity=MARQUEE_BASE_VELOCITY/>
        <ProductGrid products/>
        <AboutSection/>
    }
}
