//! Conversions out of JSON text. Each one goes through [to_bytes] first.

use serde::de::DeserializeOwned;

use crate::{ConvertResult, JsonMap, bytes};

pub fn to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

pub fn try_to_map(text: &str) -> ConvertResult<JsonMap> {
    bytes::try_to_map(&to_bytes(text))
}

/// Same as [try_to_map], but returns an empty map on failure.
pub fn to_map(text: &str) -> JsonMap {
    bytes::to_map(&to_bytes(text))
}

pub fn try_decode<T>(text: &str) -> ConvertResult<T>
where
    T: DeserializeOwned,
{
    bytes::try_decode(&to_bytes(text))
}

pub fn decode<T>(text: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    bytes::decode(&to_bytes(text))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::{ConvertError, User};

    const USER_TEXT: &str = r#"{"full_name":"Suresh Mopidevi","profession":"iOS Developer"}"#;

    #[rstest(input, case(""), case("plain ascii"), case("ümlaut ✓ 🚀"))]
    fn test_to_bytes(input: &str) {
        let got = to_bytes(input);

        assert_eq!(input.len(), got.len());
        assert_eq!(Ok(input.to_string()), bytes::try_to_text(&got));
    }

    #[test]
    fn test_to_map() {
        let expected = json!({"full_name": "Suresh Mopidevi", "profession": "iOS Developer"});

        assert_eq!(Some(&to_map(USER_TEXT)), expected.as_object());
        assert_eq!(Ok(to_map(USER_TEXT)), try_to_map(USER_TEXT));
    }

    #[test]
    fn test_to_map_tolerates_whitespace() {
        let input = "\n  { \"full_name\" :\t\"A\" ,\r\n \"profession\": \"B\" }  \n";

        assert_eq!(2, to_map(input).len());
    }

    #[rstest(
        input,
        case("{\"full_name\":"),
        case("{'full_name': 'single quotes'}"),
        case("[\"not\", \"an\", \"object\"]")
    )]
    fn test_to_map_failure(input: &str) {
        assert!(to_map(input).is_empty());
        assert!(matches!(
            try_to_map(input),
            Err(ConvertError::Parse(_) | ConvertError::NotAMap { .. })
        ));
    }

    #[test]
    fn test_decode() {
        assert_eq!(Ok(User::default()), try_decode::<User>(USER_TEXT));
        assert_eq!(Some(User::default()), decode::<User>(USER_TEXT));
    }

    #[rstest(input, case(""), case("{}"), case(r#"{"full_name":null,"profession":"x"}"#))]
    fn test_decode_failure(input: &str) {
        assert!(matches!(
            try_decode::<User>(input),
            Err(ConvertError::Decode { .. })
        ));
        assert_eq!(None, decode::<User>(input));
    }
}
