use super::action::NorelAction;
use super::domain::{NorelState, Step};

/// Applies one action to `state` and returns the resulting state.
///
/// Total over every action: out-of-range steps saturate and no variant can
/// fail. The input is never modified.
pub fn reduce(state: &NorelState, action: &NorelAction) -> NorelState {
    let mut next = state.clone();

    match action {
        NorelAction::Login => next.is_authenticated = true,
        NorelAction::Logout => {
            next.is_authenticated = false;
            next.current_step = Step::FIRST;
        }
        NorelAction::NextStep => next.current_step = state.current_step.next(),
        NorelAction::SetStep(step) => next.current_step = Step::clamped(*step),
        NorelAction::ToggleMenu => next.is_menu_open = !state.is_menu_open,
        NorelAction::CloseMenu => next.is_menu_open = false,
        NorelAction::UpdateProfile(patch) => {
            next.user_profile = state.user_profile.merged(patch);
        }
        NorelAction::SetAlert(kind) => next.alert = *kind,
        NorelAction::ClearAlert => next.alert = None,
    }

    next
}
