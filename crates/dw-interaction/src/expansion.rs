use crate::SpringCurve;

use dw_core::ActionId;

use std::fmt;

/// Detail level of the panel under the balance carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    ExpandedLow,
    ExpandedMedium,
    ExpandedHigh,
    ExpandedXXL,
}

impl ExpansionState {
    pub const ALL: [ExpansionState; 5] = [
        ExpansionState::Collapsed,
        ExpansionState::ExpandedLow,
        ExpansionState::ExpandedMedium,
        ExpansionState::ExpandedHigh,
        ExpansionState::ExpandedXXL,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::ExpandedLow => "expanded_low",
            Self::ExpandedMedium => "expanded_medium",
            Self::ExpandedHigh => "expanded_high",
            Self::ExpandedXXL => "expanded_xxl",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Self::Collapsed => 0,
            Self::ExpandedLow => 1,
            Self::ExpandedMedium => 2,
            Self::ExpandedHigh => 3,
            Self::ExpandedXXL => 4,
        }
    }

    pub fn is_expanded(&self) -> bool {
        *self != Self::Collapsed
    }

    /// Level an action opens from the collapsed state.
    pub fn for_action(action: ActionId) -> Self {
        match action {
            ActionId::Agregar | ActionId::Pagar => Self::ExpandedMedium,
            ActionId::Enviar => Self::ExpandedHigh,
            ActionId::Exchange => Self::ExpandedLow,
        }
    }
}

impl fmt::Display for ExpansionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionTransition {
    pub from: ExpansionState,
    pub to: ExpansionState,
    pub action: Option<ActionId>,
    pub spring: SpringCurve,
}

impl ExpansionTransition {
    fn new(from: ExpansionState, to: ExpansionState, action: Option<ActionId>) -> Self {
        Self {
            from,
            to,
            action,
            spring: SpringCurve::for_transition(from, to),
        }
    }
}

/// Five-state expansion machine.
///
/// Collapsed opens to a level chosen by the tapped action. Only `enviar` can be
/// promoted further, to XXL, once the contact list engages. Collapsing is the only
/// way back and clears the selected action.
#[derive(Debug, Clone, Default)]
pub struct ExpansionMachine {
    state: ExpansionState,
    selected_action: Option<ActionId>,
}

impl ExpansionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExpansionState {
        self.state
    }

    pub fn selected_action(&self) -> Option<ActionId> {
        self.selected_action
    }

    /// Open the panel for `action`. Ignored unless collapsed.
    pub fn open(&mut self, action: ActionId) -> Option<ExpansionTransition> {
        if self.state.is_expanded() {
            return None;
        }
        let to = ExpansionState::for_action(action);
        Some(self.move_to(to, Some(action)))
    }

    /// High -> XXL when the `enviar` flow shows its contact list.
    pub fn promote(&mut self) -> Option<ExpansionTransition> {
        if self.state != ExpansionState::ExpandedHigh
            || self.selected_action != Some(ActionId::Enviar)
        {
            return None;
        }
        Some(self.move_to(ExpansionState::ExpandedXXL, self.selected_action))
    }

    pub fn collapse(&mut self) -> Option<ExpansionTransition> {
        if !self.state.is_expanded() {
            return None;
        }
        Some(self.move_to(ExpansionState::Collapsed, None))
    }

    fn move_to(&mut self, to: ExpansionState, action: Option<ActionId>) -> ExpansionTransition {
        let transition = ExpansionTransition::new(self.state, to, action);
        self.state = to;
        self.selected_action = action;
        transition
    }
}
