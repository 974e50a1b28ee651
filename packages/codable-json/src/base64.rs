//! Serde helpers for byte fields carried as standard, padded base64 strings.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Avatar {
//!     #[serde(with = "codable_json::base64")]
//!     png: Vec<u8>,
//! }
//! ```

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Deserializer, Serializer, de};

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(bytes))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;

    base64_decode(&encoded).map_err(de::Error::custom)
}

pub(crate) fn base64_decode(input: &str) -> Result<Vec<u8>, String> {
    STANDARD.decode(input).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Attachment {
        name: String,
        #[serde(with = "crate::base64")]
        data: Vec<u8>,
    }

    #[rstest(
        data,
        expected,
        case(vec![], r#"{"name":"a","data":""}"#),
        case(b"hi".to_vec(), r#"{"name":"a","data":"aGk="}"#),
        case(vec![0xff, 0x00, 0x10], r#"{"name":"a","data":"/wAQ"}"#)
    )]
    fn test_serialize_as_padded_base64(data: Vec<u8>, expected: &str) {
        let attachment = Attachment {
            name: "a".to_string(),
            data,
        };

        let got = serde_json::to_string(&attachment).unwrap();
        assert_eq!(expected, got);

        let back: Attachment = serde_json::from_str(&got).unwrap();
        assert_eq!(attachment, back);
    }

    #[rstest(
        input,
        case(r#"{"name":"a","data":"not base64!"}"#),
        case(r#"{"name":"a","data":"aGk"}"#),
        case(r#"{"name":"a","data":42}"#)
    )]
    fn test_deserialize_rejects_invalid_data(input: &str) {
        assert!(serde_json::from_str::<Attachment>(input).is_err());
    }
}
