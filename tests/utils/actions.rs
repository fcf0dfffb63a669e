use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a request through the router and decode the JSON body
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn create_user(&self, username: &str) -> String {
        let (status, body) = self.post("/api/users", json!({ "username": username })).await;
        assert_eq!(status, StatusCode::CREATED, "create user failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_player(&self, name: &str, country: &str) -> String {
        let (status, body) = self
            .post(
                "/api/players",
                json!({ "name": name, "country": country, "role": "All-rounder" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create player failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_match(&self, match_number: u32) -> String {
        let (status, body) = self
            .post(
                "/api/matches",
                json!({
                    "matchNumber": match_number,
                    "team1": "India",
                    "team2": "Australia",
                    "date": format!("2026-02-{:02}T14:00:00Z", match_number),
                    "venue": "Colombo",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create match failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    /// Saves the builder's players as the user's team
    pub async fn save_squad(&self, user_id: &str, captain: &str) -> (StatusCode, Value) {
        self.post(
            "/api/teams",
            json!({ "userId": user_id, "players": self.players, "captain": captain }),
        )
        .await
    }

    pub async fn post_stats(&self, match_id: &str, player_id: &str, stats: Value) -> (StatusCode, Value) {
        let mut body = stats;
        body["matchId"] = json!(match_id);
        body["playerId"] = json!(player_id);
        self.post("/api/stats", body).await
    }
}
