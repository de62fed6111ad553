//! `careerfit score` — Score an answer list against one career.

use super::{Context, parse_answers, print_traits};
use careerfit_core::{AssessmentProcessor, AssessmentResult, Catalog};
use careerfit_scoring::{FitBand, Guidance, TraitInsight, trait_insights, validate_answer_list};
use serde::Serialize;

#[derive(Serialize)]
struct ScoreReport<'a> {
    career_id: &'a str,
    career_name: &'a str,
    #[serde(flatten)]
    result: &'a AssessmentResult,
    fit: FitBand,
    insights: Vec<TraitInsight>,
    guidance: Guidance,
}

pub async fn run(
    ctx: &Context,
    career_id: &str,
    raw_answers: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let career = ctx
        .catalog
        .get_career_by_id(career_id)
        .ok_or_else(|| format!("Unknown career '{career_id}' (see `careerfit careers`)"))?;

    let answers = parse_answers(raw_answers, &*ctx.catalog)?;
    let answers = validate_answer_list(&answers, ctx.catalog.questions())?;

    let result = ctx
        .orchestrator()
        .process(&answers, &career.required_traits)
        .await?;

    let report = ScoreReport {
        career_id: &career.id,
        career_name: &career.name,
        result: &result,
        fit: FitBand::from_score(result.compatibility_score),
        insights: trait_insights(&result.user_traits, &career.required_traits),
        guidance: Guidance::for_result(career, result.compatibility_score),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🎯 {} — {}% ({})", career.name, result.compatibility_score, report.fit);
    println!();
    print_traits(&result.user_traits);
    println!();
    println!("  {:<22} {:>4} {:>8}  Status", "Trait", "You", "Needed");
    for insight in &report.insights {
        println!(
            "  {:<22} {:>4} {:>8}  {}",
            insight.name, insight.user_score, insight.required_score, insight.gap
        );
    }
    println!();
    println!("  Similar careers: {}", report.guidance.similar_careers.join(", "));

    Ok(())
}
