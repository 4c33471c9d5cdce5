use leptos::prelude::*;

use crate::models::marquee_sequence;
use crate::motion::dom::{use_animation_frame, use_scroll_y};
use crate::motion::marquee::MarqueeState;

/// Endless strip of bottles whose speed and direction follow the scroll velocity
#[component]
pub fn VelocityMarquee(
    images: &'static [&'static str],
    /// Percent of the strip width per second; the sign picks the resting direction
    #[prop(default = 100.0)]
    base_velocity: f64,
) -> impl IntoView {
    let scroll_y = use_scroll_y();
    let mut state = MarqueeState::new(base_velocity);
    let (offset, set_offset) = signal(state.position());

    use_animation_frame(move |now, delta| {
        set_offset.set(state.tick(scroll_y.get_untracked(), now, delta));
    });

    let items = marquee_sequence(images)
        .into_iter()
        .enumerate()
        .map(|(i, src)| {
            view! {
                <div class="marquee-item">
                    <img src=src alt=format!("Collection item {}", i)/>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="marquee">
            <div
                class="marquee-track"
                style=move || format!("transform: translateX({:.4}%);", offset.get())
            >
                {items}
            </div>
        </div>
    }
}
