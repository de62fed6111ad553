//! `careerfit questions` — List the question bank.

use super::Context;
use careerfit_core::{Catalog, TraitKey};

pub async fn run(ctx: &Context, trait_filter: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let keys: Vec<TraitKey> = match trait_filter {
        Some(raw) => vec![raw.parse()?],
        None => TraitKey::ALL.to_vec(),
    };

    for key in keys {
        let heading = ctx
            .catalog
            .get_trait_definition(key)
            .map(|t| format!("{} — {}", t.name, t.description))
            .unwrap_or_else(|| key.display_name().to_string());
        println!("🧩 {heading}");
        for q in ctx.catalog.get_questions_by_trait(key) {
            println!("  {:>2}. {}", q.id + 1, q.text);
        }
        println!();
    }

    let scale: Vec<String> = ctx
        .catalog
        .answer_options()
        .iter()
        .map(|o| format!("{} = {}", o.value, o.label))
        .collect();
    println!("Scale: {}", scale.join(", "));

    Ok(())
}
