pub async fn index() -> &'static str {
    "cinema-schedule-api: GET /movies, /halls, /schedule"
}
