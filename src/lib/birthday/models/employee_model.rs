//! Module with models compatible with Bitrix24's REST API
use serde::{Deserialize, Deserializer};

/// An entry of `user.get`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Employee {
    #[serde(rename = "ID", default, deserialize_with = "super::optional_string_or_number")]
    pub id: Option<String>,
    #[serde(rename = "NAME", default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(rename = "LAST_NAME", default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    /// `YYYY-MM-DD`, possibly followed by a time part
    #[serde(rename = "PERSONAL_BIRTHDAY", default, deserialize_with = "null_as_empty")]
    pub birthday: String,
    #[serde(rename = "ACTIVE", default, deserialize_with = "flag")]
    pub active: bool,
}

/// An entry of `disk.folder.getchildren`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct DiskEntry {
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,
    #[serde(rename = "TYPE")]
    pub kind: String,
}

impl DiskEntry {
    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/* Bitrix answers either `true` or `"Y"` depending on the method version */
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Str(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Str(s)) => s == "Y",
        None => false,
    })
}
