use chrono::{Local, NaiveDate};
use log::error;

use crate::birthday::models::employee_model::Employee;

/// `MM-DD` of the given date, the form birthdays are compared in.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// `MM-DD` of today by the local clock.
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/* `1990-03-15` and `1990-03-15T03:00:00+03:00` both give `03-15` */
pub fn birthday_key(birthday: &str) -> Option<&str> {
    birthday.get(5..10)
}

pub fn is_birthday_on(employee: &Employee, day_key: &str) -> bool {
    birthday_key(&employee.birthday) == Some(day_key)
}

/// Mention of the employee, rendered by the portal as a link to their profile.
/// Employees without an ID can't be mentioned and give `None`.
pub fn build_message(employee: &Employee) -> Option<String> {
    match employee.id.as_deref() {
        Some(id) if !id.is_empty() => Some(format!(
            "[USER={}]{} {}[/USER]",
            id, employee.first_name, employee.last_name
        )),
        _ => {
            error!(
                "User ID not found for employee {} {}",
                employee.first_name, employee.last_name
            );
            None
        }
    }
}

/// Body of the feed post. Without an image URL the `[IMG]` block is left out.
pub fn compose_post(greeting: &str, mentions: &[String], image_url: Option<&str>) -> String {
    let mut post = format!("{}{}!", greeting, mentions.join(", "));
    if let Some(url) = image_url {
        post.push_str(&format!("\n\n[IMG]{}[/IMG]", url));
    }
    post
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
