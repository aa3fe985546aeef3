mod action;
pub mod catalog;
pub mod domain;
pub mod progress;
mod reducer;
mod store;

pub use action::{decode_script, DecodedAction, NorelAction};
pub use catalog::{AlertInfo, JourneyPhase, PhaseInfo, StepInfo};
pub use domain::{AlertKind, NorelState, PaymentInfo, ProfilePatch, Step, UserProfile, VehicleInfo};
pub use progress::{road_progress, score_fraction, station_index, ScoreTier};
pub use reducer::reduce;
pub use store::{ContextError, MissionOutcome, NorelProvider, NorelStore};
