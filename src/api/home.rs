use axum::response::Html;

const ROUTES: &[(&str, &str)] = &[
    (
        "Precipitation readings since the cutoff date",
        "/api/v1.0/precipitation",
    ),
    ("All stations and their names", "/api/v1.0/stations"),
    (
        "Temperature observations (TOBS) of the most active station over the past year",
        "/api/v1.0/tobs",
    ),
    (
        "Min, average and max temperature from a start date (yyyy-mm-dd)",
        "/api/v1.0/{start}",
    ),
    (
        "Min, average and max temperature for a date range (yyyy-mm-dd/yyyy-mm-dd)",
        "/api/v1.0/{start}/{end}",
    ),
    ("OpenAPI documentation", "/swagger-ui"),
];

/// List all available API routes
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "HTML listing of the available routes", content_type = "text/html", body = String)
    ),
    tag = "home"
)]
pub async fn home() -> Html<String> {
    let mut page = String::from("Welcome to the Climate API!<br/>Available Routes:<br/>");
    for (description, path) in ROUTES {
        page.push_str(&format!("{description}:<br/>&nbsp;&nbsp;{path}<br/>"));
    }
    Html(page)
}
