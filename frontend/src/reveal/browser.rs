use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::detector::{Threshold, Visibility, VisibilityDetector};
use crate::error::RevealError;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// [`VisibilityDetector`] backed by one `IntersectionObserver` shared by every
/// section of a page.
pub struct BrowserDetector {
    observer: IntersectionObserver,
    // Kept alive for as long as the observer may call it.
    _callback: EntriesCallback,
}

impl BrowserDetector {
    /// `thresholds` are the ratios at which the browser should report; each
    /// batch of entries is handed to `on_entries`.
    pub fn new<F>(thresholds: &[Threshold], mut on_entries: F) -> Result<Self, RevealError>
    where
        F: FnMut(Vec<(Element, Visibility)>) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let reports = entries
                    .iter()
                    .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                    .map(|entry| {
                        let visibility = Visibility {
                            intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        };
                        (entry.target(), visibility)
                    })
                    .collect();
                on_entries(reports);
            },
        );

        let options = IntersectionObserverInit::new();
        let ratios: Array = thresholds
            .iter()
            .map(|threshold| JsValue::from_f64(threshold.get()))
            .collect();
        options.set_threshold(&ratios);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| RevealError::ObserverUnavailable(format!("{:?}", err)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl VisibilityDetector for BrowserDetector {
    type Region = Element;

    // The browser applies the thresholds given at construction.
    fn observe(&mut self, region: &Element, _threshold: Threshold) {
        self.observer.observe(region);
    }

    fn unobserve(&mut self, region: &Element) {
        self.observer.unobserve(region);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}
