use leptos::prelude::*;

use crate::motion::particles::{generate_particles, Particle, PARTICLE_COUNT};

/// Gold dust drifting over the hero. Positions are random per page view, so
/// they are only generated in the browser after hydration.
#[component]
pub fn ParticleField() -> impl IntoView {
    let particles = RwSignal::new(Vec::<Particle>::new());

    Effect::new(move |_| {
        particles.set(generate_particles(PARTICLE_COUNT, &mut rand::thread_rng()));
    });

    view! {
        <div class="particle-field" aria-hidden="true">
            <For
                each=move || particles.get()
                key=|particle| particle.id
                children=move |particle: Particle| {
                    view! { <span class="particle" style=particle.style()></span> }
                }
            />
        </div>
    }
}
