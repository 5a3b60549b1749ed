use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Deserializer};

pub mod employee_model;

pub const DEFAULT_POST_TITLE: &str = "Поздравляем с Днём Рождения!";
pub const DEFAULT_GREETING: &str = "С Днём Рождения, ";

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, whose top-level keys are environments (`dev`, `prod`, ...).
/// 2. Name of the environment to take settings from.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "ENV", default_value = "dev")]
    pub profile: String,
}

/// A model for describing configuration of one environment.
/// Consists of:
/// 1. Portal domain, e.g. `example.bitrix24.ru`
/// 2. ID of the user who owns the incoming webhook
/// 3. Webhook token
/// 4. ID of the disk folder with congratulation images
/// 5. ID of the user the post is published from
/// 6. Path to the file holding the image cursor
/// 7. Optional folder with post templates
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub domain: String,
    #[serde(deserialize_with = "string_or_number")]
    pub api_owner: String,
    #[serde(deserialize_with = "string_or_number")]
    pub token: String,
    #[serde(deserialize_with = "string_or_number")]
    pub folder_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub bot_id: String,
    pub image_index_filename: PathBuf,
    #[serde(default)]
    pub templates_folder: Option<PathBuf>,
}

/// Title and greeting of the published post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostTemplate {
    pub title: String,
    pub greeting: String,
}

impl Default for PostTemplate {
    fn default() -> Self {
        PostTemplate {
            title: DEFAULT_POST_TITLE.to_owned(),
            greeting: DEFAULT_GREETING.to_owned(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Id {
    Str(String),
    Int(i64),
}

impl Id {
    fn into_string(self) -> String {
        match self {
            Id::Str(s) => s,
            Id::Int(n) => n.to_string(),
        }
    }
}

/* ids come as numbers from hand-written configs, env overrides and the portal itself */
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Id::deserialize(deserializer)?.into_string())
}

pub(crate) fn optional_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Id>::deserialize(deserializer)?.map(Id::into_string))
}
