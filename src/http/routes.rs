use axum::{
    Router,
    extract::{Path, State},
    response::{IntoResponse, Json},
    routing::get,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::catalog::Catalog;
use crate::dataset::{ArticleId, ArticleRecord, RelatedPaper};

pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/articles", get(articles))
        .route("/articles/{id}/related", get(related_papers))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

async fn health(State(catalog): State<Catalog>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": {
            "articles": catalog.article_count(),
            "relations": catalog.relation_count(),
            "fetch_delay_ms": catalog.fetch_delay().as_millis() as u64,
            "statistics": catalog.relation_statistics(),
        },
    }))
}

async fn articles(State(catalog): State<Catalog>) -> Json<Vec<ArticleRecord>> {
    let articles = catalog.get_articles().await;
    debug!("serving {} articles", articles.len());
    Json(articles)
}

// Unknown ids answer 200 with an empty list.
async fn related_papers(
    Path(id): Path<String>,
    State(catalog): State<Catalog>,
) -> Json<Vec<RelatedPaper>> {
    Json(catalog.get_related_papers(&ArticleId::from(id)).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::catalog::DEFAULT_FETCH_DELAY;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = router(Catalog::bundled(DEFAULT_FETCH_DELAY).unwrap());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_health() {
        let (status, body) = get_json("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["catalog"]["articles"], 3);
        assert_eq!(body["catalog"]["relations"], 3);
        assert_eq!(body["catalog"]["fetch_delay_ms"], 100);
        assert_eq!(body["catalog"]["statistics"]["total_relations"], 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_articles() {
        let (status, body) = get_json("/articles").await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![41234567, 41234890, 41235012]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_related_papers() {
        let (status, body) = get_json("/articles/41234890/related").await;

        assert_eq!(status, StatusCode::OK);
        let papers = body.as_array().unwrap();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0]["arxiv_url"], "http://arxiv.org/abs/2406.09876v1");
        assert_eq!(
            papers[0]["paper_title"],
            "Lexical Retrieval Remains a Strong Baseline for RAG"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_related_papers_unknown_id() {
        let (status, body) = get_json("/articles/999/related").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
