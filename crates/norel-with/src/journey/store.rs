use super::action::NorelAction;
use super::catalog::{self, StepInfo};
use super::domain::{AlertKind, NorelState, ProfilePatch, Step};
use super::reducer::reduce;
use serde::Serialize;
use tracing::{debug, info};

/// Owned handle over the journey state. The single writer of `NorelState`.
#[derive(Debug, Default)]
pub struct NorelStore {
    state: NorelState,
}

/// What happened when the customer pressed the mission card button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MissionOutcome {
    AlertCleared { alert: AlertKind },
    StepAdvanced { from: Step, to: Step, celebrate: bool },
    RecommendVehicle,
}

impl NorelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: NorelState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &NorelState {
        &self.state
    }

    pub fn current_step_info(&self) -> &'static StepInfo {
        catalog::step_info(self.state.current_step)
    }

    pub fn dispatch(&mut self, action: NorelAction) {
        debug!(action = action.name(), payload = ?action, "dispatching journey action");
        self.state = reduce(&self.state, &action);
    }

    pub fn login(&mut self) {
        self.dispatch(NorelAction::Login);
    }

    pub fn logout(&mut self) {
        self.dispatch(NorelAction::Logout);
    }

    pub fn next_step(&mut self) {
        self.dispatch(NorelAction::NextStep);
    }

    pub fn set_step(&mut self, step: i64) {
        self.dispatch(NorelAction::SetStep(step));
    }

    pub fn toggle_menu(&mut self) {
        self.dispatch(NorelAction::ToggleMenu);
    }

    pub fn close_menu(&mut self) {
        self.dispatch(NorelAction::CloseMenu);
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) {
        self.dispatch(NorelAction::UpdateProfile(patch));
    }

    pub fn set_alert(&mut self, alert: Option<AlertKind>) {
        self.dispatch(NorelAction::SetAlert(alert));
    }

    pub fn clear_alert(&mut self) {
        self.dispatch(NorelAction::ClearAlert);
    }

    /// Primary button of the mission card. A pending alert takes priority
    /// over the step; the last step opens the vehicle recommendation.
    pub fn perform_mission_action(&mut self) -> MissionOutcome {
        if let Some(alert) = self.state.alert {
            self.clear_alert();
            return MissionOutcome::AlertCleared { alert };
        }

        let from = self.state.current_step;
        if from.is_last() {
            return MissionOutcome::RecommendVehicle;
        }

        self.next_step();
        let to = self.state.current_step;
        info!(from = from.get(), to = to.get(), "mission completed");

        MissionOutcome::StepAdvanced {
            from,
            to,
            celebrate: matches!(from.get(), 3 | 7),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("journey store accessed before the provider was mounted")]
    NotMounted,
}

/// Mount point for the store. Consumers that read before `mount` or after
/// `unmount` get `ContextError::NotMounted`, never a default state.
#[derive(Debug, Default)]
pub struct NorelProvider {
    store: Option<NorelStore>,
}

impl NorelProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) -> &mut NorelStore {
        debug!("mounting journey store");
        self.store.insert(NorelStore::new())
    }

    pub fn unmount(&mut self) -> Option<NorelStore> {
        debug!("unmounting journey store");
        self.store.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Result<&NorelStore, ContextError> {
        self.store.as_ref().ok_or(ContextError::NotMounted)
    }

    pub fn store_mut(&mut self) -> Result<&mut NorelStore, ContextError> {
        self.store.as_mut().ok_or(ContextError::NotMounted)
    }
}
