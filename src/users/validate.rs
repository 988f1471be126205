use lazy_static::lazy_static;
use regex::Regex;

use super::dto::UserPayload;
use super::error::ApiError;

lazy_static! {
    static ref PHONE_RE: Regex = Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("valid phone regex");
}

/// Field checks applied before any store write. Presence of `age` and
/// `rating` is already guaranteed by deserialization.
pub fn validate_payload(payload: &UserPayload) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("name is required".into()));
    }
    if !PHONE_RE.is_match(&payload.phone) {
        return Err(ApiError::Validation(
            "phone must match the pattern 123-456-7890".into(),
        ));
    }
    for lang in &payload.languages {
        if lang.trim().is_empty() {
            return Err(ApiError::Validation(
                "languages entries must be non-empty".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> UserPayload {
        UserPayload {
            name: "Ana".into(),
            age: 30,
            rating: 4.5,
            phone: "123-456-7890".into(),
            languages: vec!["english".into(), "spanish".into()],
        }
    }

    #[test]
    fn accepts_well_formed_payload() {
        assert!(validate_payload(&payload()).is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let mut p = payload();
        p.name = "   ".into();
        assert!(matches!(
            validate_payload(&p),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn accepts_dashed_phone() {
        let mut p = payload();
        p.phone = "123-456-7890".into();
        assert!(validate_payload(&p).is_ok());
    }

    #[test]
    fn rejects_phone_without_separators() {
        let mut p = payload();
        p.phone = "1234567890".into();
        assert!(validate_payload(&p).is_err());
    }

    #[test]
    fn rejects_phone_with_trailing_garbage() {
        let mut p = payload();
        p.phone = "123-456-7890x".into();
        assert!(validate_payload(&p).is_err());
    }

    #[test]
    fn allows_empty_language_list() {
        let mut p = payload();
        p.languages = vec![];
        assert!(validate_payload(&p).is_ok());
    }

    #[test]
    fn rejects_blank_language_entry() {
        let mut p = payload();
        p.languages = vec!["english".into(), "".into()];
        assert!(validate_payload(&p).is_err());
    }
}
