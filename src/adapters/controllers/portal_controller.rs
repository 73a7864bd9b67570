use axum::{extract::State, response::Html};

use crate::domain::config::app::AppConfig;

const PORTAL_TEMPLATE: &str = include_str!("../../../assets/portal.html");

pub struct PortalController;

impl PortalController {
    /// Portal page. The LIFF id is injected at render time so the browser
    /// can initialize the LINE SDK; everything else is static markup.
    /// GET /
    pub async fn index(State(config): State<AppConfig>) -> Html<String> {
        Html(PORTAL_TEMPLATE.replace("__LIFF_ID__", &config.liff_id))
    }
}
