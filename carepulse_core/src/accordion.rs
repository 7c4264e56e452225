use std::collections::BTreeSet;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccordionError {
    #[error("{component} must be used within an Accordion")]
    OutsideContainer { component: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionMode {
    /// At most one item open. A collapsible accordion closes the open item
    /// when it is clicked again; otherwise that click does nothing.
    Single { collapsible: bool },
    /// Every item opens and closes on its own.
    Multiple,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionState {
    mode: AccordionMode,
    open: BTreeSet<String>,
}

impl AccordionState {
    pub fn new(mode: AccordionMode) -> Self {
        Self {
            mode,
            open: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn open_items(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }

    pub fn toggle(&mut self, id: &str) {
        let was_open = self.open.contains(id);
        match self.mode {
            AccordionMode::Single { collapsible } => {
                if was_open {
                    if collapsible {
                        self.open.clear();
                    }
                } else {
                    self.open.clear();
                    self.open.insert(id.to_string());
                }
            }
            AccordionMode::Multiple => {
                if was_open {
                    self.open.remove(id);
                } else {
                    self.open.insert(id.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn open(state: &AccordionState) -> Vec<&str> {
        state.open_items().collect()
    }

    #[test]
    fn test_single_replaces_open_item() {
        let mut state = AccordionState::new(AccordionMode::Single { collapsible: false });
        state.toggle("a");
        assert_eq!(open(&state), ["a"]);
        state.toggle("b");
        assert_eq!(open(&state), ["b"]);
        assert!(!state.is_open("a"));
        state.toggle("a");
        assert_eq!(open(&state), ["a"]);
    }

    #[test]
    fn test_single_non_collapsible_reclick_is_noop() {
        let mut state = AccordionState::new(AccordionMode::Single { collapsible: false });
        state.toggle("a");
        state.toggle("a");
        assert_eq!(open(&state), ["a"]);
    }

    #[test]
    fn test_single_collapsible_reclick_closes() {
        let mut state = AccordionState::new(AccordionMode::Single { collapsible: true });
        state.toggle("item-1");
        state.toggle("item-3");
        state.toggle("item-3");
        assert!(open(&state).is_empty());
    }

    #[test]
    fn test_multiple_independent() {
        let mut state = AccordionState::new(AccordionMode::Multiple);
        state.toggle("a");
        state.toggle("b");
        assert!(state.is_open("a") && state.is_open("b"));

        let before = state.clone();
        state.toggle("a");
        assert!(!state.is_open("a"));
        assert!(state.is_open("b"));
        state.toggle("a");
        assert_eq!(state, before);
    }

    #[test]
    fn test_random_toggles_keep_single_invariant() {
        let ids = ["item-1", "item-2", "item-3", "item-4", "item-5"];
        let mut rng = StdRng::from_seed([3u8; 32]);

        for collapsible in [false, true] {
            let mut state = AccordionState::new(AccordionMode::Single { collapsible });
            for _ in 0..1_000 {
                let id = ids[rng.random_range(0..ids.len())];
                let was_open = state.is_open(id);
                state.toggle(id);

                assert!(state.open_items().count() <= 1);
                if !was_open {
                    assert_eq!(open(&state), [id]);
                } else if collapsible {
                    assert!(open(&state).is_empty());
                } else {
                    assert_eq!(open(&state), [id]);
                }
            }
        }
    }

    #[test]
    fn test_outside_container_message() {
        let err = AccordionError::OutsideContainer {
            component: "AccordionTrigger",
        };
        assert_eq!(
            err.to_string(),
            "AccordionTrigger must be used within an Accordion"
        );
    }
}
