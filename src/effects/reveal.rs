//! One-shot scroll reveals.
//!
//! Targets start `Pending` and move to `Revealed` the first time they are seen
//! intersecting the viewport. The transition never reverses, and only the
//! call that performs it reports back, which is the caller's cue to stop
//! observing that element and start its counters.

pub const REVEAL_SELECTOR: &str = "section, .card";
pub const COUNTER_SELECTOR: &str = "[data-target]";
pub const INDEX_ATTRIBUTE: &str = "data-reveal-index";

/// Fraction of the target that must be visible.
pub const THRESHOLD: f64 = 0.1;
/// Shrinks the viewport by 50px at the bottom edge.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const OFFSET_PX: f64 = 30.0;
pub const TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Inline style declarations for this state.
    pub fn declarations(self) -> [(&'static str, String); 3] {
        match self {
            Self::Pending => [
                ("opacity", "0".to_string()),
                ("transform", format!("translateY({OFFSET_PX}px)")),
                ("transition", TRANSITION.to_string()),
            ],
            Self::Revealed => [
                ("opacity", "1".to_string()),
                ("transform", "translateY(0)".to_string()),
                ("transition", TRANSITION.to_string()),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(usize);

impl TargetId {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn from_attribute(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(Self)
    }
}

/// One observer entry: the observed element, the id read back from it, and
/// whether it currently intersects.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<T> {
    pub target: T,
    pub id: Option<TargetId>,
    pub is_intersecting: bool,
}

#[derive(Clone, Debug, Default)]
pub struct RevealEngine {
    states: Vec<RevealState>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> TargetId {
        self.states.push(RevealState::Pending);
        TargetId(self.states.len() - 1)
    }

    pub fn state(&self, id: TargetId) -> Option<RevealState> {
        self.states.get(id.0).copied()
    }

    /// Feeds one intersection observation. Returns `true` only for the
    /// observation that moves the target from pending to revealed.
    pub fn observe(&mut self, id: TargetId, is_intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(id.0) else {
            return false;
        };

        if !is_intersecting || *state == RevealState::Revealed {
            return false;
        }

        *state = RevealState::Revealed;
        true
    }

    /// Feeds a batch of observer entries. Each entry that reveals its target
    /// is passed to `unobserve` and then to `on_reveal`; entries without an id
    /// are ignored. Returns how many targets were revealed.
    pub fn dispatch<T, U, R>(
        &mut self,
        entries: impl IntoIterator<Item = Intersection<T>>,
        mut unobserve: U,
        mut on_reveal: R,
    ) -> usize
    where
        U: FnMut(&T),
        R: FnMut(&T),
    {
        let mut revealed = 0;

        for entry in entries {
            let Some(id) = entry.id else {
                continue;
            };

            if self.observe(id, entry.is_intersecting) {
                unobserve(&entry.target);
                on_reveal(&entry.target);
                revealed += 1;
            }
        }

        revealed
    }

    /// Reveals everything still pending, returning the targets that changed.
    pub fn reveal_all(&mut self) -> Vec<TargetId> {
        self.states
            .iter_mut()
            .enumerate()
            .filter(|(_, state)| **state == RevealState::Pending)
            .map(|(index, state)| {
                *state = RevealState::Revealed;
                TargetId(index)
            })
            .collect()
    }

    pub fn pending_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Pending)
            .count()
    }
}
