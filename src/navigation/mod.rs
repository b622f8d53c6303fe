use serde::Serialize;

use crate::core::{FigureId, TOTAL_FIGURES};

/// Navigation request issued by the UI chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "transition", content = "target", rename_all = "snake_case")]
pub enum Transition {
    Next,
    Previous,
    /// Any integer is accepted and clamped into the valid id range.
    JumpTo(i64),
}

/// Selected figure. Only [`NavigationController`] mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub current_figure: FigureId,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_figure: FigureId::FIRST,
        }
    }
}

/// Result of applying one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionOutcome {
    pub transition: Transition,
    pub from: FigureId,
    pub to: FigureId,
}

impl TransitionOutcome {
    /// `false` for boundary no-ops such as `Next` on the last figure.
    #[must_use]
    pub fn changed(self) -> bool {
        self.from != self.to
    }
}

/// One pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageIndicator {
    pub id: FigureId,
    pub current: bool,
}

/// Clamped state machine over the selected figure id.
///
/// There is no terminal state; the controller lives for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starting_at(figure: FigureId) -> Self {
        Self {
            state: NavigationState {
                current_figure: figure,
            },
        }
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn current_figure(&self) -> FigureId {
        self.state.current_figure
    }

    #[must_use]
    pub const fn total_figures(&self) -> u8 {
        TOTAL_FIGURES
    }

    pub fn apply(&mut self, transition: Transition) -> TransitionOutcome {
        let from = self.state.current_figure;
        let to = match transition {
            Transition::Next => from.saturating_next(),
            Transition::Previous => from.saturating_previous(),
            Transition::JumpTo(target) => FigureId::clamped(target),
        };
        self.state.current_figure = to;
        TransitionOutcome {
            transition,
            from,
            to,
        }
    }

    pub fn next(&mut self) -> FigureId {
        self.apply(Transition::Next).to
    }

    pub fn previous(&mut self) -> FigureId {
        self.apply(Transition::Previous).to
    }

    pub fn jump_to(&mut self, target: i64) -> FigureId {
        self.apply(Transition::JumpTo(target)).to
    }

    /// `false` when the "Previous" button should render disabled.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.state.current_figure.is_first()
    }

    /// `false` when the "Next" button should render disabled.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.state.current_figure.is_last()
    }

    pub fn page_indicators(&self) -> impl Iterator<Item = PageIndicator> + '_ {
        let current = self.state.current_figure;
        FigureId::all().map(move |id| PageIndicator {
            id,
            current: id == current,
        })
    }
}
