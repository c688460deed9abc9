#[cfg(test)]
mod tests {
    use crate::api::validation::{validate_person_name, validate_phone};

    #[test]
    fn accepts_common_names() {
        assert!(validate_person_name("Awa Koné").is_ok());
        assert!(validate_person_name("Jean-Marc N'Guessan").is_ok());
        assert!(validate_person_name("M. Diabaté").is_ok());
    }

    #[test]
    fn rejects_empty_and_numeric_names() {
        assert!(validate_person_name("").is_err());
        assert!(validate_person_name("   ").is_err());
        assert!(validate_person_name("Awa123").is_err());
    }

    #[test]
    fn accepts_local_and_international_phones() {
        assert!(validate_phone("0708091011").is_ok());
        assert!(validate_phone("+225 07 08 09 10 11").is_ok());
        assert!(validate_phone("07-08-09-10-11").is_ok());
    }

    #[test]
    fn rejects_malformed_phones() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("telephone").is_err());
        assert!(validate_phone("07+08091011").is_err());
        assert!(validate_phone("123456789012345678901").is_err());
    }
}
