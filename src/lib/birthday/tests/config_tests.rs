use std::path::{Path, PathBuf};

use figment::Jail;

use super::*;

const CONFIG_JSON: &str = r#"{
    "dev": {
        "domain": "dev.bitrix24.ru",
        "api_owner": 1,
        "token": "devtoken",
        "folder_id": "15",
        "bot_id": 7,
        "image_index_filename": "image_index.txt"
    },
    "prod": {
        "domain": "corp.bitrix24.ru",
        "api_owner": "12",
        "token": "prodtoken",
        "folder_id": 2048,
        "bot_id": "99",
        "image_index_filename": "/var/lib/birthday/image_index.txt",
        "templates_folder": "templates"
    }
}"#;

fn args_for(path: &Path, profile: &str) -> Args {
    Args {
        config_json_path: path.to_path_buf(),
        profile: profile.to_owned(),
    }
}

fn config_with_templates(folder: Option<PathBuf>) -> Config {
    Config {
        domain: "corp.bitrix24.ru".to_owned(),
        api_owner: "12".to_owned(),
        token: "secret".to_owned(),
        folder_id: "2048".to_owned(),
        bot_id: "99".to_owned(),
        image_index_filename: PathBuf::from("image_index.txt"),
        templates_folder: folder,
    }
}

/* every test reading config runs in a jail: BIRTHDAY_* variables are process-wide */

#[test]
fn read_config_selects_profile() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", CONFIG_JSON)?;
        let path = jail.directory().join("config.json");

        let dev = read_config(&args_for(&path, "dev")).unwrap();
        assert_eq!(dev.domain, "dev.bitrix24.ru");
        assert_eq!(dev.api_owner, "1");
        assert_eq!(dev.bot_id, "7");
        assert_eq!(dev.folder_id, "15");
        assert_eq!(dev.templates_folder, None);

        let prod = read_config(&args_for(&path, "prod")).unwrap();
        assert_eq!(prod.token, "prodtoken");
        assert_eq!(prod.folder_id, "2048");
        assert_eq!(
            prod.image_index_filename,
            PathBuf::from("/var/lib/birthday/image_index.txt")
        );
        assert_eq!(prod.templates_folder, Some(PathBuf::from("templates")));
        Ok(())
    });
}

#[test]
fn read_config_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", CONFIG_JSON)?;
        jail.set_env("BIRTHDAY_TOKEN", "123456");
        jail.set_env("BIRTHDAY_BOT_ID", "31");
        let path = jail.directory().join("config.json");

        let prod = read_config(&args_for(&path, "prod")).unwrap();
        assert_eq!(prod.token, "123456");
        assert_eq!(prod.bot_id, "31");
        assert_eq!(prod.domain, "corp.bitrix24.ru");

        let dev = read_config(&args_for(&path, "dev")).unwrap();
        assert_eq!(dev.token, "123456");
        assert_eq!(dev.bot_id, "31");

        jail.set_env("BIRTHDAY_TOKEN", "abc");
        let prod = read_config(&args_for(&path, "prod")).unwrap();
        assert_eq!(prod.token, "abc");
        Ok(())
    });
}

#[test]
fn read_config_missing_file() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("config.json");
        assert!(read_config(&args_for(&path, "dev")).is_none());
        Ok(())
    });
}

#[test]
fn read_config_malformed_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", "{ \"dev\": { \"domain\": ")?;
        let path = jail.directory().join("config.json");
        assert!(read_config(&args_for(&path, "dev")).is_none());
        Ok(())
    });
}

#[test]
fn read_config_unknown_profile() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", CONFIG_JSON)?;
        let path = jail.directory().join("config.json");
        assert!(read_config(&args_for(&path, "staging")).is_none());
        Ok(())
    });
}

#[test]
fn webhook_url_is_built_from_domain_owner_and_token() {
    let config = config_with_templates(None);
    assert_eq!(
        config.webhook_url(),
        "https://corp.bitrix24.ru/rest/12/secret/"
    );
}

#[test]
fn read_template_existing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("greeting.txt"), "Happy birthday, ").unwrap();
    let config = config_with_templates(Some(dir.path().to_path_buf()));
    assert_eq!(
        config.read_template("greeting.txt").as_deref(),
        Some("Happy birthday, ")
    );
}

#[test]
fn read_template_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_templates(Some(dir.path().to_path_buf()));
    assert!(config.read_template("greeting.txt").is_none());
    assert!(config_with_templates(None)
        .read_template("greeting.txt")
        .is_none());
}

#[test]
fn post_template_defaults_without_templates() {
    assert_eq!(
        load_post_template(&config_with_templates(None)),
        PostTemplate::default()
    );
}

#[test]
fn post_template_from_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(POST_TITLE_TEMPLATE), "С праздником!\n").unwrap();
    let config = config_with_templates(Some(dir.path().to_path_buf()));

    let template = load_post_template(&config);
    assert_eq!(template.title, "С праздником!");
    assert_eq!(template.greeting, "С Днём Рождения, ");
}
