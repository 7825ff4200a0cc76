//! Fetch-then-aggregate flow: the path a dashboard takes from the meal-log
//! listing endpoint to the rendered daily totals.

use chrono::NaiveDate;
use nutriwell_client::http_client::ReqwestWellnessClient;
use nutriwell_client::{DateRange, Page, WellnessApi};
use nutriwell_core::{MealType, summarize_day, summarize_meal_type};
use secrecy::SecretString;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetched_meals_reduce_to_daily_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/u1/meal-logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "m1", "user_id": "u1", "meal_type": "breakfast",
                "logged_at": "2025-03-10T07:45:00Z",
                "items": [{"name": "oats", "portion_size": 60.0, "portion_unit": "g"}],
                "nutrition": {"calories": 500.0, "protein_g": 18.0, "carbs_g": 70.0, "fat_g": 12.0}
            },
            {
                "id": "m2", "user_id": "u1", "meal_type": "lunch",
                "logged_at": "2025-03-10T12:30:00Z",
                "items": [{"name": "bowl", "portion_size": 1.0, "portion_unit": "serving"}],
                "nutrition": {"calories": 700.0, "protein_g": 35.0, "carbs_g": 80.0, "fat_g": 20.0}
            },
            {
                "id": "m3", "user_id": "u1", "meal_type": "dinner",
                "logged_at": "2025-03-10T19:00:00Z",
                "items": [{"name": "pasta", "portion_size": 1.0, "portion_unit": "plate"}],
                "nutrition": {"calories": 600.0, "protein_g": 25.0, "carbs_g": 75.0, "fat_g": 18.0}
            }
        ])))
        .mount(&mock_server)
        .await;

    let client =
        ReqwestWellnessClient::new(&mock_server.uri(), "u1", SecretString::new("tok".into()));
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let meals = client
        .list_meal_logs(Some(DateRange::single_day(today)), None, Page::default())
        .await
        .expect("meal logs");

    let summary = summarize_day(&meals);
    assert_eq!(summary.total_calories, 1800.0);
    assert_eq!(summary.meal_count, 3);
    assert_eq!(summary.meals_by_type.len(), 3);

    let lunch = summarize_meal_type(&summary.meals_by_type[&MealType::Lunch]);
    assert_eq!(lunch.entry_count, 1);
    assert_eq!(lunch.total_calories, 700.0);
}
