//! Browser hooks feeding the motion math
//!
//! Only the `hydrate` build touches the DOM. During server rendering every hook
//! returns its resting value so the HTML matches the first client frame.

use leptos::html;
use leptos::prelude::*;

/// Window scroll offset in px, refreshed on every scroll event
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(0.0);

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::scroll;

        let read = || window().scroll_y().unwrap_or_default();

        // Pick up the restored offset after a reload, once hydration is done
        Effect::new(move |_| set_scroll_y.set(read()));

        let handle = window_event_listener(scroll, move |_| set_scroll_y.set(read()));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_scroll_y;

    scroll_y
}

/// Run `callback(now_ms, delta_ms)` on every animation frame until the owning
/// component is cleaned up. `delta_ms` is zero on the first frame.
pub fn use_animation_frame<F>(callback: F)
where
    F: FnMut(f64, f64) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let frame = StoredValue::new_local(None::<Closure<dyn FnMut(f64)>>);
        let request = StoredValue::new(None::<i32>);
        let mut callback = callback;
        let mut last: Option<f64> = None;

        let schedule = move || {
            frame.try_with_value(|closure| {
                let closure = closure.as_ref()?;
                match window().request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => Some(id),
                    Err(err) => {
                        leptos::logging::warn!("requestAnimationFrame failed: {err:?}");
                        None
                    }
                }
            })
            .flatten()
        };

        let tick = move |now: f64| {
            let delta = last.map_or(0.0, |prev| now - prev);
            last = Some(now);
            callback(now, delta);
            request.try_set_value(schedule());
        };

        frame.set_value(Some(Closure::new(tick)));
        request.set_value(schedule());

        on_cleanup(move || {
            if let Some(Some(id)) = request.try_get_value() {
                let _ = window().cancel_animation_frame(id);
            }
            frame.try_update_value(|closure| closure.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = callback;
}

/// Flips to `true` the first time `target` intersects the viewport, then stays there.
///
/// `root_margin` uses CSS margin syntax; a negative margin such as `"-100px"`
/// waits until the element is that far inside the viewport.
pub fn use_in_view(target: NodeRef<html::Div>, root_margin: &'static str) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        type OnIntersect = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

        let observer = StoredValue::new_local(None::<IntersectionObserver>);
        let on_intersect = StoredValue::new_local(None::<OnIntersect>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if in_view.get_untracked() || observer.with_value(Option::is_some) {
                return;
            }

            let callback = OnIntersect::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let visible = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<IntersectionObserverEntry>()
                            .is_intersecting()
                    });
                    if visible {
                        set_in_view.set(true);
                        observer.disconnect();
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_root_margin(root_margin);

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(created) => {
                    created.observe(&element);
                    observer.set_value(Some(created));
                    on_intersect.set_value(Some(callback));
                }
                Err(err) => {
                    // No observer support: show the content rather than leave it hidden
                    leptos::logging::warn!("IntersectionObserver unavailable: {err:?}");
                    set_in_view.set(true);
                }
            }
        });

        on_cleanup(move || {
            if let Some(Some(created)) = observer.try_update_value(|slot| slot.take()) {
                created.disconnect();
            }
            on_intersect.try_update_value(|slot| slot.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (target, root_margin, set_in_view);

    in_view
}

/// Class list for an element that reveals once: `base` plus `is-visible` once shown
pub fn reveal_class(base: &'static str, visible: bool) -> String {
    if visible {
        format!("{base} is-visible")
    } else {
        base.to_string()
    }
}
