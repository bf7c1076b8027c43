//! Placeholders - resolve scenario placeholders from the command line.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use placeholders_application::{LoadConfigStore, PlaceholderResolver, ResolveResult};
use placeholders_domain::{ConfigStore, DEFAULT_ENVIRONMENT, ExtensionSettings};
use placeholders_infrastructure::{
    LoadedSettings, ScenarioTagsSubscriber, SettingsRepository, TokioFileSystem, YamlConfigLoader,
    to_json_pretty,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SETTINGS_FILE: &str = "placeholders.yml";

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Resolve `${name}` placeholders for tagged scenarios
#[derive(Parser, Debug)]
#[command(name = "placeholders", version)]
#[command(about = "Resolve scenario placeholders against YAML replacement files", long_about = None)]
struct Cli {
    /// Settings file mapping config keys to placeholder files
    /// [default: placeholders.yml, if present]
    #[arg(long, value_name = "FILE", global = true)]
    settings: Option<PathBuf>,

    /// Active environment [default: settings file value, then "default"]
    #[arg(short, long, value_name = "NAME", global = true)]
    environment: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a single placeholder
    Resolve {
        /// Placeholder name, without `${ }`
        name: String,

        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Replace every `${name}` reference in a text
    Substitute {
        /// Text containing placeholder references
        text: String,

        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// List configured config keys and their files
    Tags,

    /// Print the merged document of a config key as JSON
    Dump {
        /// Config key from the settings file
        config_key: String,
    },
}

/// Simulated scenario the resolution runs for.
#[derive(Args, Debug)]
struct ScenarioArgs {
    /// Scenario tag, e.g. `@login:smoke` or `$mobile` (repeatable, in order)
    #[arg(long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Runtime override `name[@environment[/variant]]=value` (repeatable)
    #[arg(long = "set", value_name = "OVERRIDE")]
    overrides: Vec<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let settings = load_settings(cli.settings.as_deref()).await?;
    let environment = cli
        .environment
        .or_else(|| settings.settings.environment.clone())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

    match cli.command {
        Command::Resolve { name, scenario } => {
            let value = run_scenario(&settings, environment, &scenario, |resolver| {
                resolver.resolve(&name)
            })
            .await?;
            println!("{value}");
        }
        Command::Substitute { text, scenario } => {
            let value = run_scenario(&settings, environment, &scenario, |resolver| {
                resolver.substitute(&text)
            })
            .await?;
            println!("{value}");
        }
        Command::Tags => {
            for (key, paths) in settings.config_mapping().iter() {
                let files: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                println!("{key}: {}", files.join(", "));
            }
        }
        Command::Dump { config_key } => {
            let store = load_store(&settings).await?;
            let entry = store
                .entry(&config_key)
                .ok_or_else(|| format!("Config '{config_key}' is not defined in the settings"))?;
            print!("{}", to_json_pretty(entry.document())?);
        }
    }

    Ok(())
}

/// Loads the settings file; a missing default file means empty settings.
async fn load_settings(path: Option<&Path>) -> CliResult<LoadedSettings> {
    let repository = SettingsRepository::new();
    match path {
        Some(path) => Ok(repository.load(path).await?),
        None => {
            let path = Path::new(DEFAULT_SETTINGS_FILE);
            if path.is_file() {
                Ok(repository.load(path).await?)
            } else {
                tracing::debug!("no settings file, running with runtime overrides only");
                Ok(LoadedSettings {
                    settings: ExtensionSettings::default(),
                    base_dir: PathBuf::new(),
                })
            }
        }
    }
}

async fn load_store(settings: &LoadedSettings) -> CliResult<ConfigStore> {
    let loader = YamlConfigLoader::new(TokioFileSystem::new());
    Ok(LoadConfigStore::new(loader)
        .execute(&settings.config_mapping())
        .await?)
}

/// Runs `action` as if inside a scenario carrying `scenario.tags`.
async fn run_scenario<F>(
    settings: &LoadedSettings,
    environment: String,
    scenario: &ScenarioArgs,
    action: F,
) -> CliResult<String>
where
    F: FnOnce(&PlaceholderResolver<ScenarioTagsSubscriber>) -> ResolveResult<String>,
{
    let store = Arc::new(load_store(settings).await?);
    let subscriber = ScenarioTagsSubscriber::new();
    let mut resolver =
        PlaceholderResolver::new(store, subscriber.clone()).with_environment(environment);

    for definition in &scenario.overrides {
        resolver.apply_override(definition)?;
    }

    subscriber.before_scenario(scenario.tags.iter().cloned());
    let result = action(&resolver);
    subscriber.after_scenario();

    Ok(result?)
}
