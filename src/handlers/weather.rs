use crate::model::WeatherForecast;
use crate::service::weather::forecast;
use axum::Json;

pub async fn weather_forecast() -> Json<Vec<WeatherForecast>> {
    let today = chrono::Local::now().date_naive();
    let mut rng = rand::thread_rng();
    Json(forecast(&mut rng, today))
}
