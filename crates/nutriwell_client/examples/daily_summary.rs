use chrono::Utc;
use nutriwell_client::http_client::ReqwestWellnessClient;
use nutriwell_client::{DateRange, Page, WellnessApi, config::Config};
use nutriwell_core::summarize_day;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;
    let client = ReqwestWellnessClient::from_config(&cfg);

    let today = Utc::now().date_naive();
    let meals = client
        .list_meal_logs(Some(DateRange::single_day(today)), None, Page::default())
        .await
        .map_err(|e| format!("failed to fetch meal logs: {}", e))?;

    let summary = summarize_day(&meals);
    println!("{} meals logged today", summary.meal_count);
    println!(
        "totals: {:.0} kcal / {:.1} g protein / {:.1} g carbs / {:.1} g fat",
        summary.total_calories, summary.total_protein, summary.total_carbs, summary.total_fat
    );
    for (meal_type, group) in &summary.meals_by_type {
        println!("- {}: {} logged", meal_type.as_str(), group.len());
    }

    Ok(())
}
