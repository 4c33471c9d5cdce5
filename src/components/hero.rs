use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;

use crate::components::particles::ParticleField;
use crate::models::HERO_IMAGE;
use crate::motion::css_seconds;
use crate::motion::dom::{use_animation_frame, use_scroll_y};
use crate::motion::hero::{title_letters, HeroFrame, HeroMotion, TITLE, TITLE_STAGGER};

#[cfg(feature = "hydrate")]
use crate::motion::hero::{normalize_pointer, Bounds};

/// Full-viewport intro with the staggered title and the tilting bottle
#[component]
pub fn Hero() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let scroll_y = use_scroll_y();
    let (pointer, set_pointer) = signal((0.0_f64, 0.0_f64));
    let (frame, set_frame) = signal(HeroFrame::default());

    let mut motion = HeroMotion::new();
    use_animation_frame(move |_, delta_ms| {
        let (x, y) = pointer.get_untracked();
        motion.pointer_moved(x, y);
        let next = motion.frame(scroll_y.get_untracked(), delta_ms / 1000.0);
        if frame.get_untracked() != next {
            set_frame.set(next);
        }
    });

    let on_pointer_move = move |ev: MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = section.get_untracked() {
                let rect = el.get_bounding_client_rect();
                let bounds = Bounds {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                };
                set_pointer.set(normalize_pointer(
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                    bounds,
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let letters = title_letters(TITLE, TITLE_STAGGER)
        .into_iter()
        .map(|letter| {
            let drift = letter.drift;
            view! {
                <span
                    class="hero-letter"
                    style=move || format!("transform: translateY({:.2}px);", frame.get().letter_y(drift))
                >
                    <span
                        class="hero-letter-inner"
                        style=format!("animation-delay: {};", css_seconds(letter.delay))
                    >
                        {letter.glyph.to_string()}
                    </span>
                </span>
            }
        })
        .collect_view();

    view! {
        <section
            node_ref=section
            class="hero"
            on:mousemove=on_pointer_move
            on:mouseleave=move |_| set_pointer.set((0.0, 0.0))
        >
            <div class="hero-backdrop"></div>
            <div class="hero-noise"></div>

            <ParticleField/>

            <div
                class="hero-glow"
                style=move || {
                    let f = frame.get();
                    format!("transform: translate(-50%, -50%) scale({:.4}); opacity: {:.4};", f.glow_scale, f.glow_opacity / 0.6)
                }
            >
                <div class="hero-glow-inner"></div>
            </div>

            <div
                class="hero-title"
                style=move || {
                    let f = frame.get();
                    format!("transform: scale({:.4}); opacity: {:.4};", f.title_scale, f.title_opacity)
                }
            >
                <h1 class="hero-title-text" aria-label=TITLE>{letters}</h1>
            </div>

            <div
                class="hero-bottle"
                style=move || {
                    let f = frame.get();
                    format!(
                        "transform: translateY({:.2}px) rotateX({:.3}deg) rotateY({:.3}deg);",
                        f.bottle_y, f.rotate_x, f.rotate_y,
                    )
                }
            >
                <div class="hero-bottle-float">
                    <img class="hero-bottle-image" src=HERO_IMAGE alt="Jean Paul Gaultier Le Male"/>
                    <div
                        class="hero-gloss"
                        style=move || {
                            let f = frame.get();
                            format!("transform: translateX({:.2}px); opacity: {:.4};", f.gloss_x, f.gloss_opacity)
                        }
                    ></div>
                </div>
            </div>

            <div class="hero-fade"></div>

            <div class="scroll-indicator">
                <span class="scroll-indicator-label">"Scroll"</span>
                <div class="scroll-indicator-line"></div>
            </div>
        </section>
    }
}
