//! `careerfit recommend` — Rank careers for an answer list.

use super::{Context, bar, parse_answers, print_traits};
use careerfit_core::Catalog;
use careerfit_scoring::{FitBand, aggregate_traits, recommend_careers, validate_answer_list};

pub async fn run(
    ctx: &Context,
    raw_answers: &str,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let answers = parse_answers(raw_answers, &*ctx.catalog)?;
    let answers = validate_answer_list(&answers, ctx.catalog.questions())?;
    let traits = aggregate_traits(
        &answers,
        ctx.catalog.questions(),
        ctx.config.scoring.empty_group_policy,
    )?;

    let limit = limit.unwrap_or(ctx.config.scoring.recommendation_limit);
    let matches = recommend_careers(&*ctx.catalog, &traits, limit);

    println!("🧭 Your trait profile");
    print_traits(&traits);
    println!();
    println!("⭐ Top {} careers", matches.len());
    for (rank, m) in matches.iter().enumerate() {
        println!(
            "  {:>2}. {:<30} {} {:>3}%  {}",
            rank + 1,
            m.career.name,
            bar(m.score),
            m.score,
            FitBand::from_score(m.score)
        );
    }

    Ok(())
}
