//! `careerfit status` — Show configuration and catalog status.

use super::Context;
use careerfit_config::AppConfig;
use careerfit_core::Catalog;

pub async fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let config = &ctx.config;

    println!("🧭 CareerFit Status");
    println!("==================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Catalog:      {}", ctx.catalog_source);
    println!("  Questions:    {}", ctx.catalog.questions().len());
    println!("  Careers:      {}", ctx.catalog.careers().len());
    println!("  Domains:      {}", ctx.catalog.domains().len());
    println!("  Delay:        {} ms", config.scoring.processing_delay_ms);
    println!("  Policy:       {:?}", config.scoring.empty_group_policy);
    println!("  Events:       {}", if config.session.publish_events { "enabled" } else { "disabled" });
    println!("  Log level:    {}", config.logging.level);

    if AppConfig::config_path().exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `careerfit onboard` first");
    }

    Ok(())
}
