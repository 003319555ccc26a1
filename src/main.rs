use std::env;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use scholarpath::api::{HttpScholarshipSource, ScholarshipSource};
use scholarpath::query::SearchInput;
use scholarpath::types::SearchMode;
use scholarpath::{config, display, filter, query};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let root = env::var("SCHOLARPATH_ROOT").unwrap_or_else(|_| ".".to_string());
    let config = config::load(&root)?;

    let source = HttpScholarshipSource::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let input = SearchInput {
        search_text: env::var("SEARCH_TEXT").unwrap_or_default(),
        level_of_study: env::var("LEVEL_OF_STUDY").unwrap_or_else(|_| "all".to_string()),
        award_type: env::var("AWARD_TYPE").unwrap_or_else(|_| "all".to_string()),
        min_funds: env::var("MIN_FUNDS").unwrap_or_default(),
        max_funds: env::var("MAX_FUNDS").unwrap_or_default(),
    };
    let delegated = env::var("DELEGATED").map(|v| v == "1").unwrap_or(false);

    let criteria = if delegated {
        query::delegated_search(&input)?
    } else {
        query::local_search(&input)
    };

    // Delegated results are already ranked by the remote service and bypass
    // the local predicate engine entirely.
    let records = match criteria.mode {
        SearchMode::DelegatedSearch => source.search_delegated(&criteria.search_text).await?,
        SearchMode::LocalFilter => {
            let all = source.fetch_all().await?;
            filter::apply(&all, &criteria)
        }
    };

    let cards = display::project(&records);

    if cards.is_empty() {
        println!("No scholarships found matching your criteria. Try adjusting your filters.");
        return Ok(());
    }

    for card in &cards {
        if card.organization.is_empty() {
            println!("- {}", card.award_name);
        } else {
            println!("- {} ({})", card.award_name, card.organization);
        }
        println!("  Funds: {}  Deadline: {}", card.funds_badge, card.deadline_display);
        if !card.levels_of_study.is_empty() {
            println!("  Levels: {}", card.levels_of_study.join(", "));
        }
        if !card.award_type.is_empty() {
            println!("  Type: {}", card.award_type);
        }
        if !card.purpose.is_empty() {
            println!("  Purpose: {}", card.purpose);
        }
        if !card.focus.is_empty() {
            println!("  Focus: {}", card.focus);
        }
        if !card.qualifications.is_empty() {
            println!("  Qualifications: {}", card.qualifications);
        }
        if !card.website.is_empty() {
            println!("  Apply: {}", card.website);
        }
    }
    println!("\n{} scholarship(s) found.", cards.len());

    Ok(())
}
