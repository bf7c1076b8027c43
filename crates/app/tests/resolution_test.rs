//! End-to-end resolution against YAML placeholder files on disk.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::sync::Arc;

use placeholders_application::{LoadConfigStore, PlaceholderResolver, ResolveError};
use placeholders_infrastructure::{
    ScenarioTagsSubscriber, SettingsRepository, TokioFileSystem, YamlConfigLoader,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const GREETINGS: &str = r#"
smoke:
  placeholders:
    greeting:
      $default:
        $default: "Hello ${target}"
    target:
      $default:
        $default: World
    host:
      $default:
        $default: example.com
        mobile: m.example.com
      qa:
        $default: qa.example.com
        mobile: ""
    retries:
      qa:
        $default: 3
        x: 0
    secure:
      qa:
        $default: true
        x: false
empty:
  description: no placeholders here
"#;

const STAGING: &str = r#"
smoke:
  placeholders:
    target:
      qa:
        $default: Staging
"#;

const CYCLIC: &str = r#"
loop:
  placeholders:
    a:
      $default:
        $default: "${b}"
    b:
      $default:
        $default: "x-${a}"
"#;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

/// Writes the fixtures and returns a resolver driven by the returned subscriber.
async fn setup(
    settings: &str,
    files: &[(&str, &str)],
) -> (TempDir, ScenarioTagsSubscriber, PlaceholderResolver<ScenarioTagsSubscriber>) {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        write(dir.path(), name, content);
    }
    write(dir.path(), "placeholders.yml", settings);

    let loaded = SettingsRepository::new()
        .load(&dir.path().join("placeholders.yml"))
        .await
        .unwrap();
    let store = LoadConfigStore::new(YamlConfigLoader::new(TokioFileSystem::new()))
        .execute(&loaded.config_mapping())
        .await
        .unwrap();

    let subscriber = ScenarioTagsSubscriber::new();
    let resolver = PlaceholderResolver::new(Arc::new(store), subscriber.clone());
    (dir, subscriber, resolver)
}

#[tokio::test]
async fn test_hello_world() {
    let (_dir, scenario, mut resolver) = setup(
        "config_tags:\n  greetings: greetings.yml\n",
        &[("greetings.yml", GREETINGS)],
    )
    .await;
    resolver.set_environment("qa");

    scenario.before_scenario(["@greetings:smoke", "$x"]);
    assert_eq!(resolver.resolve("greeting").unwrap(), "Hello World");
    scenario.after_scenario();
}

#[tokio::test]
async fn test_hello_staging_from_merged_files() {
    let (_dir, scenario, mut resolver) = setup(
        "config_tags:\n  greetings: [greetings.yml, staging.yml]\n",
        &[("greetings.yml", GREETINGS), ("staging.yml", STAGING)],
    )
    .await;
    scenario.before_scenario(["@greetings:smoke", "$x"]);

    resolver.set_environment("qa");
    assert_eq!(resolver.resolve("greeting").unwrap(), "Hello Staging");

    resolver.set_environment("prod");
    assert_eq!(resolver.resolve("greeting").unwrap(), "Hello World");
}

#[tokio::test]
async fn test_empty_exact_variant_falls_back() {
    let (_dir, scenario, resolver) = setup(
        "config_tags:\n  greetings: greetings.yml\n",
        &[("greetings.yml", GREETINGS)],
    )
    .await;
    let resolver = resolver.with_environment("qa");

    scenario.before_scenario(["greetings:smoke", "$mobile"]);
    assert_eq!(resolver.resolve("host").unwrap(), "qa.example.com");

    scenario.before_scenario(["greetings:smoke", "$desktop", "$mobile"]);
    assert_eq!(
        resolver.substitute("https://${host}/login").unwrap(),
        "https://qa.example.com/login"
    );
}

#[tokio::test]
async fn test_falsy_yaml_scalars_fall_back() {
    let (_dir, scenario, resolver) = setup(
        "config_tags:\n  greetings: greetings.yml\n",
        &[("greetings.yml", GREETINGS)],
    )
    .await;
    let resolver = resolver.with_environment("qa");
    scenario.before_scenario(["@greetings:smoke", "$x"]);

    assert_eq!(resolver.resolve("retries").unwrap(), "3");
    assert_eq!(resolver.resolve("secure").unwrap(), "true");
}

#[tokio::test]
async fn test_runtime_override_beats_file() {
    let (_dir, scenario, mut resolver) = setup(
        "config_tags:\n  greetings: greetings.yml\n",
        &[("greetings.yml", GREETINGS)],
    )
    .await;
    scenario.before_scenario(["@greetings:smoke"]);

    resolver.register("target", "Runtime");
    assert_eq!(resolver.resolve("greeting").unwrap(), "Hello Runtime");
}

#[tokio::test]
async fn test_cyclic_dependency_reports_chain() {
    let (_dir, scenario, resolver) = setup(
        "config_tags:\n  cycles: cyclic.yml\n",
        &[("cyclic.yml", CYCLIC)],
    )
    .await;
    scenario.before_scenario(["@cycles:loop"]);

    let err = resolver.resolve("a").unwrap_err();
    assert_eq!(
        err,
        ResolveError::CyclicDependency {
            placeholder: "a".into(),
            chain: vec!["a".into(), "b".into(), "a".into()],
        }
    );
}

#[tokio::test]
async fn test_undefined_names_section_and_file() {
    let (dir, scenario, resolver) = setup(
        "config_tags:\n  greetings: greetings.yml\n",
        &[("greetings.yml", GREETINGS)],
    )
    .await;
    scenario.before_scenario(["@greetings:empty"]);

    let err = resolver.resolve("greeting").unwrap_err();
    assert!(err.is_undefined());
    let message = err.to_string();
    assert!(message.contains(">empty>placeholders>greeting"), "{message}");
    assert!(
        message.contains(&dir.path().join("greetings.yml").display().to_string()),
        "{message}"
    );
}

#[tokio::test]
async fn test_undefined_without_config_tag() {
    let (_dir, scenario, resolver) = setup(
        "config_tags:\n  greetings: greetings.yml\n",
        &[("greetings.yml", GREETINGS)],
    )
    .await;
    scenario.before_scenario(["@wip"]);

    let err = resolver.resolve("greeting").unwrap_err();
    assert!(
        err.to_string()
            .contains("not linked with any replacements file")
    );
}

#[tokio::test]
async fn test_missing_section() {
    let (_dir, scenario, resolver) = setup(
        "config_tags:\n  greetings: greetings.yml\n",
        &[("greetings.yml", GREETINGS)],
    )
    .await;
    scenario.before_scenario(["@greetings:regression"]);

    let err = resolver.resolve("greeting").unwrap_err();
    assert!(matches!(
        err,
        ResolveError::MissingSection { ref config_key, ref section, .. }
            if config_key == "greetings" && section == "regression"
    ));
}

#[tokio::test]
async fn test_engines_share_one_store() {
    let (_dir, scenario, resolver) = setup(
        "config_tags:\n  greetings: greetings.yml\n",
        &[("greetings.yml", GREETINGS)],
    )
    .await;
    scenario.before_scenario(["@greetings:smoke"]);

    let mut other = PlaceholderResolver::new(resolver.shared_config(), scenario.clone());
    other.register("target", "Other");
    assert!(Arc::ptr_eq(&resolver.shared_config(), &other.shared_config()));

    assert_eq!(resolver.resolve("greeting").unwrap(), "Hello World");
    assert_eq!(other.resolve("greeting").unwrap(), "Hello Other");
}
