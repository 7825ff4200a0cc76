use chrono::{Duration, Utc};
use nutriwell_client::http_client::ReqwestWellnessClient;
use nutriwell_client::{DateRange, Page, WellnessApi, config::Config};
use nutriwell_core::{WellnessMetric, analyze_trend, metric_series};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;
    let client = ReqwestWellnessClient::from_config(&cfg);

    let to = Utc::now().date_naive();
    let from = to - Duration::days(13);
    let entries = client
        .list_wellness_logs(Some(DateRange { from, to }), Page::default())
        .await
        .map_err(|e| format!("failed to fetch wellness logs: {}", e))?;

    if entries.is_empty() {
        println!("No wellness entries in the last two weeks");
        return Ok(());
    }

    let metric = WellnessMetric::Mood;
    let points = metric_series(&entries, metric);
    let summary = analyze_trend(&points, metric.polarity());

    println!(
        "mood over the last {} days: average {:.1}, trend {:?}",
        summary.window.len(),
        summary.average,
        summary.trend
    );

    Ok(())
}
