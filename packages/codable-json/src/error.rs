use thiserror::Error;

pub type ConvertResult<T = ()> = Result<T, ConvertError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error(r#"Failed to encode a value of type "{type_name}" as JSON: {reason}."#)]
    Encode { type_name: String, reason: String },

    #[error(r#"The provided bytes are not well-formed JSON: {0}."#)]
    Parse(String),

    #[error(r#"Failed to decode the provided JSON into "{type_name}": {reason}."#)]
    Decode { type_name: String, reason: String },

    #[error(r#"The provided bytes are not valid UTF-8: {0}."#)]
    TextEncoding(String),

    #[error(r#"Expected a JSON object at the top level, but found {found}."#)]
    NotAMap { found: &'static str },
}

impl ConvertError {
    pub(crate) fn encode<T: ?Sized, E: std::fmt::Display>(err: E) -> Self {
        Self::Encode {
            type_name: std::any::type_name::<T>().to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn decode<T: ?Sized>(err: serde_json::Error) -> Self {
        Self::Decode {
            type_name: std::any::type_name::<T>().to_string(),
            reason: err.to_string(),
        }
    }
}
