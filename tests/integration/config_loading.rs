use contactbook::config::ConfigLoader;
use contactbook::tooling::cli::{CliContext, Commands};
use std::fs;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

// Loads read `CONTACTBOOK__*` from the process environment; serialize them
// against tests in this file that set those variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn config_file_drives_seed_and_display() {
    let _env = env_guard();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("contactbook.toml");
    fs::write(
        &path,
        r#"
        [display]
        separator = "=>"

        [[seed.contacts]]
        name = "Uno"
        phone = "1"

        [[seed.contacts]]
        name = "Dos"
        phone = "2"
        email = "dos@example.com"
        "#,
    )
    .unwrap();

    let mut ctx = CliContext::new(Some(path), false).unwrap();
    assert_eq!(ctx.book().count(), 2);
    assert_eq!(ctx.config().display.separator, "=>");
    assert_eq!(ctx.config().seed.contacts[1].email.as_deref(), Some("dos@example.com"));
    let out = ctx.execute(&Commands::Viz).unwrap();
    assert!(out.contains("Uno => Dos"));
}

#[test]
fn seeding_can_be_disabled_in_file() {
    let _env = env_guard();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("contactbook.toml");
    fs::write(&path, "[seed]\nenabled = false\n").unwrap();

    let ctx = CliContext::new(Some(path), false).unwrap();
    assert_eq!(ctx.book().count(), 0);
}

#[test]
fn environment_overrides_file() {
    let _env = env_guard();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("contactbook.toml");
    fs::write(&path, "[display]\nmissing_email = \"-\"\n").unwrap();

    std::env::set_var("CONTACTBOOK__DISPLAY__MISSING_EMAIL", "(none)");
    let result = ConfigLoader::load_from_file(&path);
    std::env::remove_var("CONTACTBOOK__DISPLAY__MISSING_EMAIL");

    assert_eq!(result.unwrap().display.missing_email, "(none)");
}

#[test]
fn malformed_file_is_an_error() {
    let _env = env_guard();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("contactbook.toml");
    fs::write(&path, "[seed\nenabled = ").unwrap();
    assert!(CliContext::new(Some(path), false).is_err());
}
