use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::cities::ResourceLinks;
use crate::features::index::handler;

/// Create the root route
pub fn routes(links: Arc<ResourceLinks>) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .with_state(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_index_links_to_cities() {
        let links = Arc::new(ResourceLinks::new("http://cities.test", "/cities"));
        let server = TestServer::new(routes(links)).unwrap();

        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(
            body["links"],
            json!([
                { "rel": "self", "href": "http://cities.test/" },
                { "rel": "cities", "href": "http://cities.test/cities" }
            ])
        );
    }
}
