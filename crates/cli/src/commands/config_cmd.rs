//! `careerfit config` — Configuration management commands.

use careerfit_config::{AppConfig, ConfigError, EmptyGroupPolicy};

pub async fn validate(loaded: Result<AppConfig, ConfigError>) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match loaded {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();

            if config.scoring.empty_group_policy == EmptyGroupPolicy::Zero {
                warnings.push("empty_group_policy = \"zero\" scores unanswered traits as 0");
            }

            if config.scoring.processing_delay_ms > 5_000 {
                warnings.push("processing_delay_ms is above 5 seconds");
            }

            if !config.session.publish_events {
                warnings.push("Session events are disabled");
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Catalog:   {}", config.catalog.path.as_deref().unwrap_or("built-in"));
            println!("   Delay:     {} ms", config.scoring.processing_delay_ms);
            println!("   Policy:    {:?}", config.scoring.empty_group_policy);
            println!("   Top-N:     {}", config.scoring.recommendation_limit);
            println!("   Log level: {}", config.logging.level);
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
