use std::fs;

use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{debug, error, info};

use super::models::{Args, Config, PostTemplate};

pub const POST_TITLE_TEMPLATE: &str = "post_title.txt";
pub const GREETING_TEMPLATE: &str = "greeting.txt";

/// Reads settings of `args.profile` from `args.config_json_path`.
/// Variables prefixed with `BIRTHDAY_` override values from the file.
/// Problems are logged and reported as `None`; the caller must not go on without a config.
pub fn read_config(args: &Args) -> Option<Config> {
    if !args.config_json_path.exists() {
        error!(
            "Config file not found: {}",
            args.config_json_path.display()
        );
        return None;
    }

    let figment = Figment::new()
        .merge(Json::file(&args.config_json_path).nested())
        .merge(Env::prefixed("BIRTHDAY_").global())
        .select(args.profile.as_str());

    match figment.extract::<Config>() {
        Ok(config) => {
            info!(
                "Read {} config from {}",
                args.profile,
                args.config_json_path.display()
            );
            Some(config)
        }
        Err(err) => {
            error!("Error decoding config file: {}", err);
            None
        }
    }
}

impl Config {
    /// Base URL of the incoming webhook, every REST method is appended to it.
    pub fn webhook_url(&self) -> String {
        format!(
            "https://{}/rest/{}/{}/",
            self.domain, self.api_owner, self.token
        )
    }

    pub fn read_template(&self, template_name: &str) -> Option<String> {
        let Some(templates_folder) = &self.templates_folder else {
            debug!("No templates folder configured, skipping {}", template_name);
            return None;
        };

        let template_path = templates_folder.join(template_name);
        match fs::read_to_string(&template_path) {
            Ok(template) => Some(template),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                error!("Template '{}' not found", template_path.display());
                None
            }
            Err(err) => {
                error!(
                    "Error reading the template file {}: {}",
                    template_path.display(),
                    err
                );
                None
            }
        }
    }
}

/// Post title and greeting, taken from templates when they exist.
pub fn load_post_template(config: &Config) -> PostTemplate {
    let mut template = PostTemplate::default();
    if let Some(title) = config.read_template(POST_TITLE_TEMPLATE) {
        template.title = title.trim_end_matches(['\r', '\n']).to_owned();
    }
    if let Some(greeting) = config.read_template(GREETING_TEMPLATE) {
        template.greeting = greeting.trim_end_matches(['\r', '\n']).to_owned();
    }
    template
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
