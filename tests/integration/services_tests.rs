//! LeetCode and summary endpoints end to end

use crate::common::*;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_leetcode_profile() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql/"))
        .and(body_partial_json(json!({
            "operationName": "getUserProfile",
            "variables": { "username": LEETCODE_USER }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "matchedUser": leetcode_user_json() }
        })))
        .expect(1)
        .mount(&upstreams.leetcode)
        .await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;
    let (status, body) = get_json(&format!("{}/api/leetcode/{}", base, LEETCODE_USER)).await;

    assert_eq!(status, 200);
    assert_eq!(body["username"], LEETCODE_USER);
    assert_eq!(body["profile"]["ranking"], 4521);
    assert_eq!(body["submitStatsGlobal"]["acSubmissionNum"][1]["count"], 30);
    assert_eq!(body["userCalendar"]["streak"], 3);
}

#[tokio::test]
async fn test_leetcode_user_not_found() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_leetcode(Value::Null).await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;
    let (status, body) = get_json(&format!("{}/api/leetcode/nobody", base)).await;

    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": "LeetCode username not found"}));
}

#[tokio::test]
async fn test_leetcode_upstream_failure() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&upstreams.leetcode)
        .await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;
    let (status, body) = get_json(&format!("{}/api/leetcode/{}", base, LEETCODE_USER)).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "Failed to fetch LeetCode data."}));
}

#[tokio::test]
async fn test_summary_requires_both_usernames() {
    let upstreams = Upstreams::start().await;
    let generator = FakeGenerator::replying("unused");
    let base = spawn_app(&upstreams.config(), generator.clone()).await;

    for query in [
        "",
        "?githubUsername=octocat",
        "?leetcodeUsername=lc_octo",
        "?githubUsername=octocat&leetcodeUsername=",
        "?githubUsername=%20&leetcodeUsername=lc_octo",
    ] {
        let (status, body) = get_json(&format!("{}/api/gemini/summary{}", base, query)).await;
        assert_eq!(status, 400, "query {:?}", query);
        assert_eq!(body, json!({"error": "Both usernames are required"}));
    }

    assert!(generator.prompts.lock().unwrap().is_empty());
    assert!(upstreams.api.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_summary_success() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    upstreams.mount_leetcode(leetcode_user_json()).await;

    let generator = FakeGenerator::replying("A capable engineer. Both.");
    let base = spawn_app(&upstreams.config(), generator.clone()).await;
    let (status, body) = get_json(&format!(
        "{}/api/gemini/summary?githubUsername={}&leetcodeUsername={}",
        base, GITHUB_USER, LEETCODE_USER
    ))
    .await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({"summary": "A capable engineer. Both."}));

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("- Name: The Octocat\n"));
    assert!(prompts[0].contains("- Bio: No bio provided\n"));
    assert!(prompts[0].contains("- Public Repositories: 8\n"));
    assert!(prompts[0].contains("- Ranking: 4521\n"));
    assert!(prompts[0].contains("- Problems Solved - Easy: 30\n"));
    assert!(prompts[0].contains("- Medium: 25\n"));
    assert!(prompts[0].contains("- Hard: 5\n"));
}

#[tokio::test]
async fn test_summary_generator_failure() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    upstreams.mount_leetcode(leetcode_user_json()).await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::failing()).await;
    let (status, body) = get_json(&format!(
        "{}/api/gemini/summary?githubUsername={}&leetcodeUsername={}",
        base, GITHUB_USER, LEETCODE_USER
    ))
    .await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "Failed to generate summary"}));
}

#[tokio::test]
async fn test_summary_with_unknown_leetcode_user() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    upstreams.mount_leetcode(Value::Null).await;

    let generator = FakeGenerator::replying("unused");
    let base = spawn_app(&upstreams.config(), generator.clone()).await;
    let (status, body) = get_json(&format!(
        "{}/api/gemini/summary?githubUsername={}&leetcodeUsername=nobody",
        base, GITHUB_USER
    ))
    .await;

    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to generate summary");
    assert!(generator.prompts.lock().unwrap().is_empty());
}
