use crate::journey::ProfilePatch;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{label}を入力してください")]
    Required { label: &'static str },
    #[error("正しい形式で入力してください（例: {example}）")]
    InvalidFormat { example: &'static str },
    #[error("住所をより詳しく入力してください")]
    AddressTooShort,
}

impl Serialize for FieldError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const MIN_ADDRESS_CHARS: usize = 5;

fn zip_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{3}-?\d{4}$").expect("zip code pattern compiles"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^0\d{1,4}-?\d{1,4}-?\d{3,4}$").expect("phone pattern compiles")
    })
}

fn require(value: &str, label: &'static str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required { label });
    }
    Ok(())
}

/// `150-0041` or `1500041`.
pub fn validate_zip_code(value: &str) -> Result<(), FieldError> {
    require(value, "郵便番号")?;
    if !zip_code_pattern().is_match(value) {
        return Err(FieldError::InvalidFormat { example: "150-0041" });
    }
    Ok(())
}

/// Domestic numbers such as `090-1234-5678` or `03-1234-5678`; hyphens are
/// optional.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    require(value, "電話番号")?;
    let digits = value.replace('-', "");
    if !phone_pattern().is_match(&digits) {
        return Err(FieldError::InvalidFormat {
            example: "090-1234-5678",
        });
    }
    Ok(())
}

pub fn validate_address(value: &str) -> Result<(), FieldError> {
    require(value, "住所")?;
    if value.chars().count() < MIN_ADDRESS_CHARS {
        return Err(FieldError::AddressTooShort);
    }
    Ok(())
}

pub fn validate_company_name(value: &str) -> Result<(), FieldError> {
    require(value, "会社名")
}

/// The three profile edit dialogs reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileForm {
    Address,
    Phone,
    Company,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_phone: Option<FieldError>,
}

impl ProfileValidationErrors {
    pub fn len(&self) -> usize {
        [
            &self.zip_code,
            &self.address,
            &self.phone,
            &self.company,
            &self.company_phone,
        ]
        .iter()
        .filter(|error| error.is_some())
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ProfileValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "profile form has {} invalid field(s)", self.len())
    }
}

impl std::error::Error for ProfileValidationErrors {}

/// Validates the fields owned by `form` and, when they all pass, returns a
/// patch carrying only those fields, ready for `UpdateProfile`. Fields of
/// other forms present in `input` are dropped.
pub fn validate_profile_form(
    form: ProfileForm,
    input: &ProfilePatch,
) -> Result<ProfilePatch, ProfileValidationErrors> {
    fn field(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or_default()
    }

    let mut errors = ProfileValidationErrors::default();
    let mut accepted = ProfilePatch::default();

    match form {
        ProfileForm::Address => {
            errors.zip_code = validate_zip_code(field(&input.zip_code)).err();
            errors.address = validate_address(field(&input.address)).err();
            accepted.zip_code = input.zip_code.clone();
            accepted.address = input.address.clone();
        }
        ProfileForm::Phone => {
            errors.phone = validate_phone(field(&input.phone)).err();
            accepted.phone = input.phone.clone();
        }
        ProfileForm::Company => {
            errors.company = validate_company_name(field(&input.company)).err();
            errors.company_phone = validate_phone(field(&input.company_phone)).err();
            accepted.company = input.company.clone();
            accepted.company_phone = input.company_phone.clone();
        }
    }

    if errors.is_empty() {
        Ok(accepted)
    } else {
        Err(errors)
    }
}
