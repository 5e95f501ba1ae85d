use crate::AppError;

/// Lifecycle of a one-shot fetch owned by a view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(AppError),
    /// The owning view went away while the fetch was in flight.
    Cancelled,
}

/// Identifies one started fetch. Completions carrying an older ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A [`LoadState`] plus the ticket of the fetch it is waiting on.
#[derive(Debug, Clone, PartialEq)]
pub struct Loadable<T> {
    state: LoadState<T>,
    generation: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
        }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Enter `Loading` and hand out the ticket the completion must present.
    /// Starting again invalidates any earlier ticket.
    pub fn start(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Apply a completion. Returns `false` (and changes nothing) when the
    /// ticket is stale or the load was cancelled.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<T, AppError>) -> bool {
        if ticket.0 != self.generation || !self.is_loading() {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    /// Drop an in-flight load. Other states are left alone.
    pub fn cancel(&mut self) {
        if self.is_loading() {
            self.state = LoadState::Cancelled;
        }
    }

    /// Replace the value directly, e.g. after a successful save.
    pub fn set_ready(&mut self, value: T) {
        self.generation += 1;
        self.state = LoadState::Ready(value);
    }
}
