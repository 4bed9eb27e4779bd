use std::rc::Rc;

use yew::Reducible;

/// Index of a watched section within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Reveal flags for one page. Flags only ever move from `Hidden` to `Revealed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStore {
    states: Vec<RevealState>,
}

impl RevealStore {
    pub fn new(sections: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; sections],
        }
    }

    /// Unknown sections read as `Hidden`.
    pub fn get(&self, index: usize) -> RevealState {
        self.states.get(index).copied().unwrap_or_default()
    }

    /// Returns whether the flag changed.
    pub fn mark_revealed(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Hidden) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

pub enum RevealAction {
    Reveal(SectionId),
}

impl Reducible for RevealStore {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Reveal(SectionId(index)) => {
                if index >= self.states.len() || self.get(index).is_revealed() {
                    // Same Rc, so the component is not re-rendered.
                    return self;
                }
                let mut next = (*self).clone();
                next.mark_revealed(index);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
impl RevealStore {
    pub fn states(&self) -> &[RevealState] {
        &self.states
    }

    pub fn all_revealed(&self) -> bool {
        self.states.iter().all(|state| state.is_revealed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let store = RevealStore::new(3);
        assert_eq!(store.states(), &[RevealState::Hidden; 3]);
        assert!(!store.all_revealed());
    }

    #[test]
    fn mark_is_one_way_and_idempotent() {
        let mut store = RevealStore::new(2);
        assert!(store.mark_revealed(1));
        assert!(!store.mark_revealed(1));
        assert_eq!(store.get(0), RevealState::Hidden);
        assert_eq!(store.get(1), RevealState::Revealed);

        for _ in 0..5 {
            store.mark_revealed(1);
            assert_eq!(store.get(1), RevealState::Revealed);
        }
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut store = RevealStore::new(1);
        assert!(!store.mark_revealed(4));
        assert_eq!(store.get(4), RevealState::Hidden);
        assert_eq!(store.states().len(), 1);
    }

    #[test]
    fn reduce_keeps_view_when_nothing_changes() {
        let store = Rc::new(RevealStore::new(2));
        let revealed = store.clone().reduce(RevealAction::Reveal(SectionId(0)));
        assert!(!Rc::ptr_eq(&store, &revealed));
        assert_eq!(revealed.get(0), RevealState::Revealed);
        // the previous view is untouched
        assert_eq!(store.get(0), RevealState::Hidden);

        let again = revealed.clone().reduce(RevealAction::Reveal(SectionId(0)));
        assert!(Rc::ptr_eq(&revealed, &again));

        let unknown = again.clone().reduce(RevealAction::Reveal(SectionId(9)));
        assert!(Rc::ptr_eq(&again, &unknown));
    }

    #[test]
    fn every_section_tracked_independently() {
        let mut store = RevealStore::new(4);
        for index in [2, 0, 3, 1] {
            store.mark_revealed(index);
        }
        assert!(store.all_revealed());
    }
}
