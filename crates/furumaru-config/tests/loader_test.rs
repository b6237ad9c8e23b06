//! Layered loading tests against a temporary config directory.

use furumaru_config::ConfigLoader;
use furumaru_core::LogFormat;
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write config file");
}

#[tokio::test]
async fn test_local_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "default.toml",
        r#"
        [web]
        user_web_url = "https://www.furumaru.example"
        assets_url = "https://assets.furumaru.example"

        [merchant_center]
        title = "ふるマル"
        description = "default"
        currency = "JPY"
        brand = "ふるマル"
        product_path = "/items/{id}"
        "#,
    );
    write(
        dir.path(),
        "local.toml",
        r#"
        [logging]
        level = "debug"
        format = "json"

        [merchant_center]
        description = "local"
        "#,
    );

    let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
    let config = loader.get().await;

    assert_eq!(config.web.user_web_url, "https://www.furumaru.example");
    assert_eq!(config.merchant_center.description, "local");
    assert_eq!(config.merchant_center.title, "ふるマル");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "default.toml",
        r#"
        [web]
        user_web_url = "not a url"
        assets_url = "https://assets.furumaru.example"
        "#,
    );

    let err = match ConfigLoader::new(dir.path().to_string_lossy()) {
        Ok(_) => panic!("expected invalid configuration to be rejected"),
        Err(err) => err,
    };
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    assert!(err.to_string().contains("user_web"));
}

#[tokio::test]
async fn test_reload_picks_up_changes_and_keeps_old_on_error() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "default.toml",
        r#"
        [app]
        name = "gateway-a"
        version = "1.0.0"
        environment = "development"
        "#,
    );

    let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
    assert_eq!(loader.get().await.app.name, "gateway-a");

    write(
        dir.path(),
        "default.toml",
        r#"
        [app]
        name = "gateway-b"
        version = "1.0.0"
        environment = "development"
        "#,
    );
    loader.reload().await.unwrap();
    assert_eq!(loader.get().await.app.name, "gateway-b");

    write(
        dir.path(),
        "default.toml",
        r#"
        [logging]
        level = "info,furumaru=chatty"
        "#,
    );
    assert!(loader.reload().await.is_err());
    assert_eq!(loader.get().await.app.name, "gateway-b");
}
