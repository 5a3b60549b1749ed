use std::error::Error;

use log::info;

use super::{
    config::load_post_template, models::Config, remote_api::RemoteApi, service::BirthdayService,
};

/// One run of the tool: fetch today's birthdays and congratulate them.
/// Returns whether a post was published.
pub async fn run<A: RemoteApi>(api: &A, config: &Config) -> Result<bool, Box<dyn Error>> {
    let service =
        BirthdayService::from_config(api, config).with_template(load_post_template(config));

    let employees = service.fetch_birthday_employees().await?;
    let published = service.publish(&employees).await?;
    if !published {
        info!("No congratulations published");
    }
    Ok(published)
}
