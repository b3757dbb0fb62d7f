//! Integration tests for route tables built from configuration

use pretty_assertions::assert_eq;
use rhtmx_url::*;
use serde_json::json;

const URLS_TOML: &str = r#"
[defaults]
_host = "api.example.com"

[routes.user_post]
template = "/users/:user_id/posts/:id"

[routes.category]
template = "/categories/:name"
defaults = { name = "all" }

[routes.local]
template = "/health"
defaults = { _host = "localhost:3000" }
"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn table() -> RouteTable {
    init_tracing();
    UrlConfig::from_toml_str(URLS_TOML)
        .unwrap()
        .build(&UrlGen::default())
        .unwrap()
}

#[test]
fn test_builds_every_route() {
    assert_eq!(table().names(), vec!["category", "local", "user_post"]);
}

#[test]
fn test_global_defaults_apply() {
    assert_eq!(
        table().url_for("user_post", &[json!(1), json!(2)]).unwrap(),
        "//api.example.com/users/1/posts/2"
    );
}

#[test]
fn test_route_defaults_apply() {
    let table = table();
    assert_eq!(table.url_for("category", &[]).unwrap(), "//api.example.com/categories/all");
    assert_eq!(table.url_for("local", &[]).unwrap(), "//localhost:3000/health");
}

#[test]
fn test_errors_surface_through_table() {
    let err = table().url_for("user_post", &[json!(1)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing [:id] for spec '/users/:user_id/posts/:id'"
    );
}

#[test]
fn test_empty_template_rejected_at_build() {
    let config = UrlConfig::from_toml_str(
        r#"
        [routes.bad]
        template = ""
        "#,
    )
    .unwrap();
    let err = config.build(&UrlGen::default()).unwrap_err();
    assert_eq!(err, UrlError::EmptyTemplate);
}

#[test]
fn test_invalid_toml_reports_error() {
    let err = UrlConfig::from_toml_str("[routes.x\ntemplate = 1").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_load_missing_file_gives_empty_table() {
    let config = UrlConfig::load("no/such/dir/urls.toml").unwrap();
    let table = config.build(&UrlGen::default()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_load_file_and_build_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("urls.toml");
    std::fs::write(&path, URLS_TOML).unwrap();

    let table = UrlConfig::load(&path).unwrap().build(&UrlGen::default()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.url_for("category", &[json!("news")]).unwrap(),
        "//api.example.com/categories/news"
    );
}

#[test]
fn test_load_blank_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("urls.toml");
    std::fs::write(&path, "\n   \n").unwrap();

    let config = UrlConfig::load(&path).unwrap();
    assert!(config.routes.is_empty());
    assert!(config.defaults.is_empty());
}

#[test]
fn test_load_malformed_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("urls.toml");
    std::fs::write(&path, "[routes.x\n").unwrap();

    let err = UrlConfig::load(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.starts_with("Failed to parse url config file"), "{}", message);
    assert!(message.contains(&format!("{:?}", path)), "{}", message);
}

#[test]
fn test_load_unreadable_path_names_path() {
    let dir = tempfile::tempdir().unwrap();

    // a directory exists but cannot be read as a file
    let err = UrlConfig::load(dir.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.starts_with("Failed to read url config file"), "{}", message);
    assert!(message.contains(&format!("{:?}", dir.path())), "{}", message);
}

#[test]
fn test_load_default_without_urls_toml() {
    // tests run from the package root, which ships no urls.toml
    let config = UrlConfig::load_default().unwrap();
    assert!(config.routes.is_empty());
}
