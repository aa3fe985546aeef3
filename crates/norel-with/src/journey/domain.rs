use super::catalog;
use serde::{Deserialize, Serialize};

/// Position in the eight-step onboarding and servicing journey.
///
/// A `Step` is always within `1..=8`. Every way of building one from a raw
/// integer saturates at the bounds instead of failing, so callers can pass
/// whatever the UI hands them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Step(u8);

impl Step {
    pub const FIRST: Step = Step(1);
    pub const LAST: Step = Step(8);
    pub const COUNT: usize = 8;

    pub const fn clamped(value: i64) -> Self {
        if value < Self::FIRST.0 as i64 {
            Self::FIRST
        } else if value > Self::LAST.0 as i64 {
            Self::LAST
        } else {
            Self(value as u8)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based offset into the step catalogue.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub const fn next(self) -> Self {
        Self::clamped(self.0 as i64 + 1)
    }

    pub const fn is_last(self) -> bool {
        self.0 == Self::LAST.0
    }

    pub fn ordered() -> impl Iterator<Item = Step> {
        (Self::FIRST.0..=Self::LAST.0).map(Step)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<i64> for Step {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Step> for i64 {
    fn from(step: Step) -> Self {
        step.0 as i64
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Document renewal reminders that can pre-empt the current mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    License,
    Insurance,
    Shaken,
}

impl AlertKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::License, Self::Insurance, Self::Shaken]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::License => "Driver's License",
            Self::Insurance => "Insurance Policy",
            Self::Shaken => "Vehicle Inspection (Shaken)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub zip_code: String,
    pub company: String,
    pub company_phone: String,
    pub license_expiry: String,
    pub insurance_expiry: String,
    pub shaken_expiry: String,
}

impl UserProfile {
    /// Shallow merge: every field present in `patch` replaces the current
    /// value, every absent field is kept as is.
    pub fn merged(&self, patch: &ProfilePatch) -> Self {
        fn pick(current: &str, update: &Option<String>) -> String {
            update.clone().unwrap_or_else(|| current.to_owned())
        }

        Self {
            name: pick(&self.name, &patch.name),
            email: pick(&self.email, &patch.email),
            phone: pick(&self.phone, &patch.phone),
            address: pick(&self.address, &patch.address),
            zip_code: pick(&self.zip_code, &patch.zip_code),
            company: pick(&self.company, &patch.company),
            company_phone: pick(&self.company_phone, &patch.company_phone),
            license_expiry: pick(&self.license_expiry, &patch.license_expiry),
            insurance_expiry: pick(&self.insurance_expiry, &patch.insurance_expiry),
            shaken_expiry: pick(&self.shaken_expiry, &patch.shaken_expiry),
        }
    }
}

/// Partial profile update. Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shaken_expiry: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub next_payment_date: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    pub name: String,
    pub estimated_value: u64,
    pub recommendation_level: u8,
}

/// Aggregate dashboard state. Only the reducer produces new values of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NorelState {
    pub is_authenticated: bool,
    pub current_step: Step,
    pub norel_score: u32,
    pub is_menu_open: bool,
    pub user_profile: UserProfile,
    pub payment_info: PaymentInfo,
    pub vehicle_info: VehicleInfo,
    #[serde(rename = "alertType")]
    pub alert: Option<AlertKind>,
}

impl Default for NorelState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            current_step: Step::FIRST,
            norel_score: catalog::DEFAULT_NOREL_SCORE,
            is_menu_open: false,
            user_profile: catalog::default_user_profile(),
            payment_info: catalog::default_payment_info(),
            vehicle_info: catalog::default_vehicle_info(),
            alert: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_construction_saturates() {
        assert_eq!(Step::clamped(i64::MIN), Step::FIRST);
        assert_eq!(Step::clamped(0), Step::FIRST);
        assert_eq!(Step::clamped(5).get(), 5);
        assert_eq!(Step::clamped(9), Step::LAST);
        assert_eq!(Step::LAST.next(), Step::LAST);
        assert_eq!(Step::ordered().count(), Step::COUNT);
    }

    #[test]
    fn step_deserializes_with_clamping() {
        let step: Step = serde_json::from_str("42").expect("integer step parses");
        assert_eq!(step, Step::LAST);
        let step: Step = serde_json::from_str("-3").expect("negative step parses");
        assert_eq!(step, Step::FIRST);
    }

    #[test]
    fn patch_ignores_unknown_keys() {
        let patch: ProfilePatch =
            serde_json::from_str(r#"{"phone":"080-0000-0000","favouriteColour":"green"}"#)
                .expect("patch parses");
        assert_eq!(patch.phone.as_deref(), Some("080-0000-0000"));
        assert!(patch.name.is_none());
        assert!(!patch.is_empty());
    }
}
