use std::{error::Error, path::PathBuf};

use log::{error, info, warn};
use serde_json::{json, Value};

use super::{
    error::BitrixResult,
    helpers::{build_message, compose_post, is_birthday_on, today_key},
    image_index::{read_image_index, write_image_index},
    models::{employee_model::DiskEntry, employee_model::Employee, Config, PostTemplate},
    remote_api::RemoteApi,
};

/// Feed audience of the post: all employees.
pub const POST_DESTINATION: &str = "UA";

pub struct BirthdayService<'a, A: RemoteApi> {
    api: &'a A,
    folder_id: String,
    bot_id: String,
    image_index_path: PathBuf,
    template: PostTemplate,
    /// `MM-DD` the whole run compares birthdays with
    today: String,
}

impl<'a, A: RemoteApi> BirthdayService<'a, A> {
    pub fn new(
        api: &'a A,
        folder_id: impl Into<String>,
        bot_id: impl Into<String>,
        image_index_path: impl Into<PathBuf>,
    ) -> Self {
        BirthdayService {
            api,
            folder_id: folder_id.into(),
            bot_id: bot_id.into(),
            image_index_path: image_index_path.into(),
            template: PostTemplate::default(),
            today: today_key(),
        }
    }

    pub fn from_config(api: &'a A, config: &Config) -> Self {
        Self::new(
            api,
            config.folder_id.as_str(),
            config.bot_id.as_str(),
            config.image_index_filename.as_path(),
        )
    }

    pub fn with_template(mut self, template: PostTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_today(mut self, today: impl Into<String>) -> Self {
        self.today = today.into();
        self
    }

    pub fn today(&self) -> &str {
        &self.today
    }

    /// Active employees whose birthday is today.
    /// The portal can only filter out empty birthdays, the date itself is matched here.
    pub async fn fetch_birthday_employees(&self) -> BitrixResult<Vec<Employee>> {
        let entries = self
            .api
            .list(
                "user.get",
                json!({
                    "FILTER": {
                        "ACTIVE": "Y",
                        "!PERSONAL_BIRTHDAY": ""
                    },
                    "SELECT": ["ID", "NAME", "LAST_NAME", "PERSONAL_BIRTHDAY", "ACTIVE"]
                }),
            )
            .await?;

        let birthday_employees = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Employee>(entry.clone()) {
                Ok(employee) => Some(employee),
                Err(err) => {
                    warn!("Skipping malformed user.get entry {}: {}", entry, err);
                    None
                }
            })
            .filter(|employee| is_birthday_on(employee, &self.today))
            .collect::<Vec<_>>();
        info!(
            "Found {} employee(s) with birthday on {}",
            birthday_employees.len(),
            self.today
        );
        Ok(birthday_employees)
    }

    /// IDs of files in the images folder, subfolders are skipped.
    pub async fn list_images(&self) -> BitrixResult<Vec<String>> {
        let entries = self
            .api
            .list("disk.folder.getchildren", json!({ "id": self.folder_id }))
            .await?;
        let entries: Vec<DiskEntry> = serde_json::from_value(Value::Array(entries))?;
        Ok(entries
            .into_iter()
            .filter(DiskEntry::is_file)
            .map(|entry| entry.id)
            .collect())
    }

    /// Next image of the rotation. The cursor is advanced only when there is something to pick.
    pub async fn next_image(&self) -> Result<Option<String>, Box<dyn Error>> {
        let images = self.list_images().await?;
        if images.is_empty() {
            info!("No images in folder {}", self.folder_id);
            return Ok(None);
        }

        let current_index = read_image_index(&self.image_index_path) % images.len();
        let image_id = images[current_index].clone();
        write_image_index(&self.image_index_path, (current_index + 1) % images.len())?;

        info!(
            "Picked image {} ({} of {})",
            image_id,
            current_index + 1,
            images.len()
        );
        Ok(Some(image_id))
    }

    pub async fn resolve_image_url(&self, image_id: &str) -> BitrixResult<Option<String>> {
        let file = self
            .api
            .call("disk.file.get", json!({ "id": image_id }))
            .await?;

        match file.get("DOWNLOAD_URL").and_then(Value::as_str) {
            Some(url) if !url.is_empty() => Ok(Some(url.to_owned())),
            _ => {
                error!("Couldn't get the public URL for image ID: {}", image_id);
                Ok(None)
            }
        }
    }

    /// Publishes one post mentioning everyone from `employees` whose birthday is today.
    /// Returns whether a post was published; with nobody to congratulate nothing is touched.
    pub async fn publish(&self, employees: &[Employee]) -> Result<bool, Box<dyn Error>> {
        info!("Checking employees with birthday of {}", self.today);

        let congratulations = employees
            .iter()
            .filter(|employee| is_birthday_on(employee, &self.today))
            .filter_map(build_message)
            .collect::<Vec<_>>();

        if congratulations.is_empty() {
            info!("Nobody to congratulate today");
            return Ok(false);
        }

        let image_url = match self.next_image().await? {
            Some(image_id) => self.resolve_image_url(&image_id).await?,
            None => None,
        };

        let post_message = compose_post(
            &self.template.greeting,
            &congratulations,
            image_url.as_deref(),
        );
        self.api
            .call(
                "log.blogpost.add",
                json!({
                    "USER_ID": self.bot_id,
                    "POST_TITLE": self.template.title,
                    "POST_MESSAGE": post_message,
                    "DEST": POST_DESTINATION,
                }),
            )
            .await?;

        info!(
            "Published congratulations for {} employee(s)",
            congratulations.len()
        );
        Ok(true)
    }
}
