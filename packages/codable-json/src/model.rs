use serde::{Deserialize, Serialize};

/// A minimal user profile. `name` travels under the `full_name` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "full_name")]
    pub name: String,
    pub profession: String,
}

impl User {
    pub fn new(name: impl Into<String>, profession: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profession: profession.into(),
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new("Suresh Mopidevi", "iOS Developer")
    }
}
