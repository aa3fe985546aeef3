use super::domain::{AlertKind, ProfilePatch};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every transition the dashboard can request of the journey state.
///
/// Serialized as `{"type": "SET_STEP", "payload": 3}` so that recorded
/// sessions can be replayed from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NorelAction {
    Login,
    Logout,
    NextStep,
    SetStep(#[serde(deserialize_with = "saturating_step")] i64),
    ToggleMenu,
    CloseMenu,
    UpdateProfile(ProfilePatch),
    SetAlert(Option<AlertKind>),
    ClearAlert,
}

impl NorelAction {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Logout => "LOGOUT",
            Self::NextStep => "NEXT_STEP",
            Self::SetStep(_) => "SET_STEP",
            Self::ToggleMenu => "TOGGLE_MENU",
            Self::CloseMenu => "CLOSE_MENU",
            Self::UpdateProfile(_) => "UPDATE_PROFILE",
            Self::SetAlert(_) => "SET_ALERT",
            Self::ClearAlert => "CLEAR_ALERT",
        }
    }
}

/// Reads any JSON integer, saturating values outside `i64` so the reducer
/// still clamps them. Whole-valued floats (how `serde_json` carries integers
/// past `u64`) are accepted too; fractional ones are rejected.
fn saturating_step<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct StepPayload;

    impl Visitor<'_> for StepPayload {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer step")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            Ok(i64::try_from(value).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
            if value.is_finite() && value.fract() == 0.0 {
                // `as` saturates at the i64 bounds
                Ok(value as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(value), &self))
            }
        }
    }

    deserializer.deserialize_any(StepPayload)
}

/// Outcome of decoding one entry of a recorded action script.
#[derive(Debug)]
pub enum DecodedAction {
    Action(NorelAction),
    Skipped { index: usize, reason: String },
}

/// Decodes a JSON array of actions. Entries with an unknown `type` or a
/// malformed payload (such as a non-integer `SET_STEP`) are reported as
/// skipped rather than failing the whole script; they are no-ops for the
/// state. Out-of-range `SET_STEP` integers are kept and clamp as usual.
pub fn decode_script(raw: &str) -> Result<Vec<DecodedAction>, serde_json::Error> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, value)| match serde_json::from_value::<NorelAction>(value) {
            Ok(action) => DecodedAction::Action(action),
            Err(err) => DecodedAction::Skipped {
                index,
                reason: err.to_string(),
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_actions_use_tag_only() {
        let json = serde_json::to_string(&NorelAction::NextStep).expect("serializes");
        assert_eq!(json, r#"{"type":"NEXT_STEP"}"#);
    }

    #[test]
    fn set_alert_accepts_null_as_none() {
        let action: NorelAction =
            serde_json::from_str(r#"{"type":"SET_ALERT","payload":null}"#).expect("parses");
        assert_eq!(action, NorelAction::SetAlert(None));

        let action: NorelAction =
            serde_json::from_str(r#"{"type":"SET_ALERT","payload":"shaken"}"#).expect("parses");
        assert_eq!(action, NorelAction::SetAlert(Some(AlertKind::Shaken)));
    }

    #[test]
    fn script_skips_unknown_and_malformed_entries() {
        let decoded = decode_script(
            r#"[
                {"type":"LOGIN"},
                {"type":"FLY_TO_MOON"},
                {"type":"SET_STEP","payload":"three"},
                {"type":"SET_STEP","payload":12}
            ]"#,
        )
        .expect("script is a JSON array");

        assert_eq!(decoded.len(), 4);
        assert!(matches!(decoded[0], DecodedAction::Action(NorelAction::Login)));
        assert!(matches!(decoded[1], DecodedAction::Skipped { index: 1, .. }));
        assert!(matches!(decoded[2], DecodedAction::Skipped { index: 2, .. }));
        assert!(matches!(
            decoded[3],
            DecodedAction::Action(NorelAction::SetStep(12))
        ));
    }

    #[test]
    fn huge_step_payloads_saturate() {
        let decoded = decode_script(
            r#"[
                {"type":"SET_STEP","payload":99999999999999999999},
                {"type":"SET_STEP","payload":-99999999999999999999},
                {"type":"SET_STEP","payload":18446744073709551615},
                {"type":"SET_STEP","payload":3.5}
            ]"#,
        )
        .expect("script is a JSON array");

        assert!(matches!(
            decoded[0],
            DecodedAction::Action(NorelAction::SetStep(i64::MAX))
        ));
        assert!(matches!(
            decoded[1],
            DecodedAction::Action(NorelAction::SetStep(i64::MIN))
        ));
        assert!(matches!(
            decoded[2],
            DecodedAction::Action(NorelAction::SetStep(i64::MAX))
        ));
        assert!(matches!(decoded[3], DecodedAction::Skipped { index: 3, .. }));
    }
}
