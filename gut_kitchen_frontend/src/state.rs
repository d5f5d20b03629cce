use std::cell::Cell;
use std::fmt::Display;
use std::rc::Rc;

/// What a page container is showing. Data and error never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ViewState::Loaded(data),
            Err(err) => ViewState::Failed(err.to_string()),
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Hands out one ticket per request; only the newest ticket may write state.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    generation: Rc<Cell<u64>>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl RequestGuard {
    pub fn begin(&self) -> RequestTicket {
        let issued = self.generation.get().wrapping_add(1);
        self.generation.set(issued);
        RequestTicket {
            generation: Rc::clone(&self.generation),
            issued,
        }
    }

    /// Invalidates every outstanding ticket, e.g. when the page unmounts.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsightState {
    #[default]
    Collapsed,
    Expanded,
}

impl InsightState {
    pub fn toggled(self) -> Self {
        match self {
            InsightState::Collapsed => InsightState::Expanded,
            InsightState::Expanded => InsightState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == InsightState::Expanded
    }
}
