//! `careerfit careers` — Browse and search the career library.

use super::Context;
use careerfit_core::{Catalog, Domain};

pub async fn run(
    ctx: &Context,
    domain: Option<&str>,
    query: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let domain: Option<Domain> = domain.map(str::parse).transpose()?;
    let careers = ctx.catalog.search_careers(query.unwrap_or(""), domain);

    if json {
        println!("{}", serde_json::to_string_pretty(&careers)?);
        return Ok(());
    }

    if careers.is_empty() {
        println!("No careers match.");
        return Ok(());
    }

    for d in Domain::ALL {
        let in_domain: Vec<_> = careers.iter().filter(|c| c.domain == d).collect();
        if in_domain.is_empty() {
            continue;
        }
        let heading = ctx
            .catalog
            .get_domain_info(d)
            .map(|info| info.full_name.clone())
            .unwrap_or_else(|| d.as_str().to_uppercase());
        println!("📚 {heading}");
        for career in in_domain {
            println!("  {:<28} {}", career.id, career.name);
        }
        println!();
    }
    println!("{} careers", careers.len());

    Ok(())
}
