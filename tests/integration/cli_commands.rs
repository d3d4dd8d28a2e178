use contactbook::config::ContactBookConfig;
use contactbook::tooling::cli::{CliContext, Commands};

fn context() -> CliContext {
    CliContext::from_config(ContactBookConfig::default(), false)
}

#[test]
fn list_text_and_json() {
    let mut ctx = context();
    let text = ctx
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(text.contains("Juan Pérez"));
    assert!(text.contains("Contacts (5)"));

    let json = ctx
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["count"], 5);
    assert_eq!(value["contacts"][4]["name"], "Juan Carlos Ruiz");
}

#[test]
fn search_json_reports_match_fields() {
    let mut ctx = context();
    let json = ctx
        .execute(&Commands::Search {
            term: "juan".to_string(),
            exact: false,
            format: "json".to_string(),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["contact"]["name"], "Juan Pérez");
    assert_eq!(results[0]["name_match"], true);
    assert_eq!(results[1]["contact"]["name"], "Juan Carlos Ruiz");
}

#[test]
fn search_exact_text_without_hits() {
    let mut ctx = context();
    let out = ctx
        .execute(&Commands::Search {
            term: "juan".to_string(),
            exact: true,
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(out, "No contacts found.\n");
}

#[test]
fn invalid_format_is_rejected() {
    let mut ctx = context();
    assert!(ctx
        .execute(&Commands::List {
            format: "yaml".to_string(),
        })
        .is_err());
}

#[test]
fn viz_on_seeded_and_empty_book() {
    let mut ctx = context();
    let out = ctx.execute(&Commands::Viz).unwrap();
    assert!(out.contains("Juan Pérez → María García → Carlos López"));

    let mut empty = CliContext::from_config(ContactBookConfig::default(), true);
    assert!(empty.execute(&Commands::Viz).unwrap().contains("Empty list"));
}

#[test]
fn config_command_prints_toml() {
    let mut ctx = context();
    let out = ctx.execute(&Commands::Config).unwrap();
    let parsed: ContactBookConfig = toml::from_str(&out).unwrap();
    assert_eq!(parsed.seed.contacts.len(), 5);
    assert_eq!(parsed.display.separator, "→");
}
