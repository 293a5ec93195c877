use agent::{AgentError, Config, PromptSet, render_system_prompt};
use chrono::{TimeZone, Utc};
use clap::Parser;
use std::ffi::OsString;
use std::fs;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
    let args: Vec<OsString> = vec![
        "agent".into(),
        "--timezone-id".into(),
        "America/New_York".into(),
        "--timezone-display".into(),
        "US Eastern Time".into(),
        "--system-prompt-path".into(),
        dir.path().join("system.md").into_os_string(),
        "--greeting-path".into(),
        dir.path().join("greeting.md").into_os_string(),
    ];
    Config::try_parse_from(args).unwrap()
}

#[test]
fn replaces_every_placeholder() {
    let out = render_system_prompt(
        "{{CURRENT_DATE_CONTEXT}} Use {{TIMEZONE}}. Again: {{TIMEZONE}}",
        "Today is now.",
        "UTC",
    );
    assert_eq!(out, "Today is now. Use UTC. Again: UTC");
}

#[test]
fn template_without_placeholders_is_unchanged() {
    assert_eq!(render_system_prompt("Be brief.", "ctx", "UTC"), "Be brief.");
}

#[test]
fn loads_and_renders_in_configured_timezone() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("system.md"),
        "{{CURRENT_DATE_CONTEXT}}\nAssume {{TIMEZONE}}.",
    )
    .unwrap();
    fs::write(dir.path().join("greeting.md"), "Hello!").unwrap();
    let config = config_in(&dir);

    let now = Utc.with_ymd_and_hms(2025, 1, 22, 19, 0, 0).single().unwrap();
    let prompts = PromptSet::load(&config, now).unwrap();

    let context = "Today is Wednesday, January twenty-second, 2025. \
                   The current time is 2 PM US Eastern Time.";
    assert_eq!(prompts.date_context, context);
    assert_eq!(
        prompts.system_prompt,
        format!("{context}\nAssume US Eastern Time.")
    );
    assert_eq!(prompts.greeting, "Hello!");
}

#[test]
fn local_date_can_differ_from_utc() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("system.md"), "{{CURRENT_DATE_CONTEXT}}").unwrap();
    fs::write(dir.path().join("greeting.md"), "").unwrap();
    let config = config_in(&dir);

    let now = Utc.with_ymd_and_hms(2025, 3, 7, 3, 30, 0).single().unwrap();
    let prompts = PromptSet::load(&config, now).unwrap();
    assert_eq!(
        prompts.date_context,
        "Today is Thursday, March sixth, 2025. The current time is 10:30 PM US Eastern Time."
    );
}

#[test]
fn missing_prompt_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let now = Utc.with_ymd_and_hms(2025, 1, 22, 19, 0, 0).single().unwrap();

    match PromptSet::load(&config, now) {
        Err(AgentError::ReadPrompt { path, .. }) => {
            assert_eq!(path, dir.path().join("system.md"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
