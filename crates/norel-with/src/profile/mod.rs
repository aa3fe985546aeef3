mod validation;

pub use validation::{
    validate_address, validate_company_name, validate_phone, validate_profile_form,
    validate_zip_code, FieldError, ProfileForm, ProfileValidationErrors,
};
