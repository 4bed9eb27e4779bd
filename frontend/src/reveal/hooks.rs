use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use super::browser::BrowserDetector;
use super::detector::{Threshold, Visibility, VisibilityDetector};
use super::monitor::RevealMonitor;
use super::store::{RevealAction, RevealState, RevealStore, SectionId};
use crate::config;

/// Node refs and reveal flags for the watched sections of one page.
#[derive(Clone)]
pub struct RevealHandle {
    nodes: Rc<Vec<NodeRef>>,
    store: UseReducerHandle<RevealStore>,
}

impl RevealHandle {
    /// Ref to attach to section `index`'s element.
    pub fn node(&self, index: usize) -> NodeRef {
        self.nodes.get(index).cloned().unwrap_or_default()
    }

    pub fn state(&self, index: usize) -> RevealState {
        self.store.get(index)
    }
}

type MonitorSlot<D> = RefCell<Option<RevealMonitor<D>>>;

/// Feeds one observer batch to the page's monitor, then hands every section
/// that just revealed to `reveal`. The monitor borrow is released before
/// `reveal` runs. Batches arriving after teardown are dropped.
fn deliver<D, F>(slot: &Weak<MonitorSlot<D>>, batch: Vec<(D::Region, Visibility)>, mut reveal: F)
where
    D: VisibilityDetector,
    F: FnMut(SectionId),
{
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let revealed: Vec<SectionId> = match slot.borrow_mut().as_mut() {
        Some(monitor) => batch
            .iter()
            .filter_map(|(region, visibility)| monitor.report(region, *visibility))
            .collect(),
        None => return,
    };
    for section in revealed {
        reveal(section);
    }
}

fn page_threshold(fraction: f64) -> Threshold {
    Threshold::new(fraction).unwrap_or_else(|err| {
        log::warn!("{}; clamping", err);
        Threshold::saturating(fraction)
    })
}

/// Reveals `sections` page regions the first time each is at least
/// `threshold` visible. Everything is registered on mount and disposed on
/// unmount.
#[hook]
pub fn use_reveal(sections: usize, threshold: f64) -> RevealHandle {
    let store = use_reducer(|| RevealStore::new(sections));
    let nodes = use_memo(
        |sections| (0..*sections).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        sections,
    );

    {
        let nodes = nodes.clone();
        let dispatcher = store.dispatcher();
        use_effect_with_deps(
            move |_| {
                let threshold = page_threshold(threshold);
                let slot: Rc<MonitorSlot<BrowserDetector>> = Rc::default();

                let on_entries = {
                    let slot = Rc::downgrade(&slot);
                    let dispatcher = dispatcher.clone();
                    move |batch: Vec<(Element, Visibility)>| {
                        deliver(&slot, batch, |section| {
                            dispatcher.dispatch(RevealAction::Reveal(section))
                        });
                    }
                };

                match BrowserDetector::new(&[threshold], on_entries) {
                    Ok(detector) => {
                        let mut monitor = RevealMonitor::new(detector);
                        for (index, node) in nodes.iter().enumerate() {
                            monitor.register(SectionId(index), node.cast::<Element>(), threshold);
                        }
                        *slot.borrow_mut() = Some(monitor);
                    }
                    Err(err) => {
                        log::warn!("reveal-on-scroll disabled, showing all sections: {}", err);
                        for index in 0..nodes.len() {
                            dispatcher.dispatch(RevealAction::Reveal(SectionId(index)));
                        }
                    }
                }

                move || {
                    if let Some(mut monitor) = slot.borrow_mut().take() {
                        monitor.dispose_all();
                    }
                }
            },
            (),
        );
    }

    RevealHandle { nodes, store }
}

/// Flips to `Revealed` shortly after mount, for elements that animate in
/// as soon as they appear rather than on scroll.
#[hook]
pub fn use_mount_reveal() -> RevealState {
    let state = use_state(|| RevealState::Hidden);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::MOUNT_REVEAL_DELAY_MS, move || {
                    state.set(RevealState::Revealed);
                });
                // dropping the timeout cancels it
                move || drop(timeout)
            },
            (),
        );
    }
    *state
}
