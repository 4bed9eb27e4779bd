use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// How far (0..=100) the viewport has travelled through a section whose top
/// edge sits `top` px below the viewport top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = height + viewport_height;
    if !(span > 0.0) {
        return 0.0;
    }
    let progress = (viewport_height - top) / span;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * 100.0
}

/// Scroll to top only on initial mount.
#[hook]
pub fn use_scroll_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

fn measure(section: &NodeRef) -> Option<f64> {
    let element = section.cast::<Element>()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(scroll_progress(rect.top(), rect.height(), viewport_height))
}

/// Tracks `scroll_progress` of the element behind `section` while mounted.
#[hook]
pub fn use_scroll_progress(section: NodeRef) -> f64 {
    let progress = use_state(|| 0.0);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let progress = progress.clone();
                        let section = section.clone();
                        move || {
                            if let Some(value) = measure(&section) {
                                progress.set(value);
                            }
                        }
                    });
                    let added = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    match added {
                        Ok(()) => {
                            // Initial call
                            if let Some(value) = measure(&section) {
                                progress.set(value);
                            }
                            Box::new(move || {
                                if let Err(err) = window
                                    .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                                {
                                    log::warn!("failed to remove scroll listener: {:?}", err);
                                }
                            })
                        }
                        Err(err) => {
                            log::warn!("scroll progress disabled: {:?}", err);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }
    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_below_viewport_has_no_progress() {
        assert_eq!(scroll_progress(900.0, 1200.0, 800.0), 0.0);
    }

    #[test]
    fn section_scrolled_past_is_complete() {
        assert_eq!(scroll_progress(-1300.0, 1200.0, 800.0), 100.0);
    }

    #[test]
    fn halfway() {
        // (800 - (-200)) / (1200 + 800)
        assert_eq!(scroll_progress(-200.0, 1200.0, 800.0), 50.0);
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 100.0, 100.0), 0.0);
    }
}
