mod utils;
use axum::http::{Method, StatusCode};
use serde_json::json;
use utils::TestSetupBuilder;

#[tokio::test]
async fn leaderboard_ranks_users_with_captain_bonus() {
    let setup = TestSetupBuilder::new().with_full_squad().build().await;
    let alice = setup.create_user("alice").await;
    let bob = setup.create_user("bob").await;
    let match_id = setup.create_match(1).await;

    let star = setup.players[0].clone();
    let keeper = setup.players[1].clone();

    let (status, _) = setup.save_squad(&alice, &star).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = setup.save_squad(&bob, &keeper).await;
    assert_eq!(status, StatusCode::OK);

    // 50 off 30 with 4 fours and 2 sixes: 78 points
    let (status, body) = setup
        .post_stats(
            &match_id,
            &star,
            json!({ "runs": 50, "ballsFaced": 30, "fours": 4, "sixes": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["fantasyPoints"], 78.0);

    // Two catches and a run out: 18 points
    let (status, body) = setup
        .post_stats(
            &match_id,
            &keeper,
            json!({ "catches": 2, "runouts": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["fantasyPoints"], 18.0);

    let (status, board) = setup.get("/api/leaderboard").await;
    assert_eq!(status, StatusCode::OK);

    let board = board.as_array().unwrap();
    assert_eq!(board.len(), 2);

    assert_eq!(board[0]["userId"], alice.as_str());
    assert_eq!(board[0]["username"], "alice");
    assert_eq!(board[0]["totalPoints"], 156.0 + 18.0);
    assert_eq!(board[0]["captain"]["id"], star.as_str());
    assert_eq!(board[0]["matchBreakdown"][0]["matchId"], match_id.as_str());
    assert!(board[0].get("playerIds").is_none());

    assert_eq!(board[1]["userId"], bob.as_str());
    assert_eq!(board[1]["totalPoints"], 78.0 + 36.0);
}

#[tokio::test]
async fn user_breakdown_lists_players_per_match() {
    let setup = TestSetupBuilder::new().with_full_squad().build().await;
    let alice = setup.create_user("alice").await;
    let first = setup.create_match(1).await;
    let second = setup.create_match(2).await;
    let captain = setup.players[5].clone();

    setup.save_squad(&alice, &captain).await;
    setup
        .post_stats(&first, &captain, json!({ "stumpings": 1 }))
        .await;
    setup
        .post_stats(&second, &captain, json!({ "runs": 0, "ballsFaced": 3 }))
        .await;
    setup
        .post_stats(&second, &setup.players[6], json!({ "catches": 1 }))
        .await;

    let (status, breakdown) = setup
        .get(&format!("/api/leaderboard/user/{alice}"))
        .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(breakdown["totalPoints"], 14.0 - 8.0 + 5.0);
    let matches = breakdown["matchBreakdown"].as_array().unwrap();
    assert_eq!(matches.len(), 2);

    // Groups follow recording order
    assert_eq!(matches[0]["matchId"], first.as_str());
    assert_eq!(matches[0]["match"]["matchNumber"], 1);

    let duck_match = &matches[1];
    assert_eq!(duck_match["matchId"], second.as_str());
    assert_eq!(duck_match["match"]["matchNumber"], 2);
    assert_eq!(duck_match["match"]["team1"], "India");
    assert_eq!(duck_match["totalPoints"], -3.0);

    let captain_line = duck_match["players"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["isCaptain"] == true)
        .unwrap();
    assert_eq!(captain_line["points"], -4.0);
    assert_eq!(captain_line["finalPoints"], -8.0);
    assert_eq!(captain_line["playerName"], "Player 5");
}

#[tokio::test]
async fn user_breakdown_without_team_is_not_found() {
    let setup = TestSetupBuilder::new().build().await;
    let alice = setup.create_user("alice").await;

    let (status, body) = setup
        .get(&format!("/api/leaderboard/user/{alice}"))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Team not found"));
}

#[tokio::test]
async fn invalid_team_is_rejected() {
    let setup = TestSetupBuilder::new().with_players(19).build().await;
    let alice = setup.create_user("alice").await;

    let (status, body) = setup.save_squad(&alice, &setup.players[0]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("exactly 20"));
}

#[tokio::test]
async fn editing_stats_changes_the_leaderboard() {
    let setup = TestSetupBuilder::new().with_full_squad().build().await;
    let alice = setup.create_user("alice").await;
    let match_id = setup.create_match(1).await;
    let captain = setup.players[0].clone();
    setup.save_squad(&alice, &captain).await;

    let (_, record) = setup
        .post_stats(&match_id, &setup.players[1], json!({ "catches": 1 }))
        .await;
    let stats_id = record["id"].as_str().unwrap().to_string();

    let (status, updated) = setup
        .send(
            Method::PUT,
            &format!("/api/stats/{stats_id}"),
            Some(json!({ "catches": 3 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], stats_id.as_str());
    assert_eq!(updated["fantasyPoints"], 15.0);

    let (_, board) = setup.get("/api/leaderboard").await;
    assert_eq!(board[0]["totalPoints"], 15.0);

    let (status, _) = setup
        .send(Method::DELETE, &format!("/api/stats/{stats_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, board) = setup.get("/api/leaderboard").await;
    assert_eq!(board[0]["totalPoints"], 0.0);
}
