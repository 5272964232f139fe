//! `/api/github/:username` end to end

use crate::common::*;
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_hello() {
    let upstreams = Upstreams::start().await;
    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;

    let body = reqwest::get(&base).await.unwrap().text().await.unwrap();
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn test_full_profile() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    upstreams.mount_pages(OVERVIEW_PAGE, REPOSITORIES_PAGE).await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;
    let (status, body) = get_json(&format!("{}/api/github/{}", base, GITHUB_USER)).await;

    assert_eq!(status, 200);

    // Authoritative record passes through, unknown fields included
    assert_eq!(body["userData"]["login"], GITHUB_USER);
    assert_eq!(body["userData"]["public_repos"], 8);
    assert_eq!(body["userData"]["company"], "@github");
    assert_eq!(body["joinDate"], "2011-01-25T18:44:36Z");

    assert_eq!(
        body["contributionsThisYear"],
        "1,234 contributions in the last year"
    );
    assert_eq!(
        body["pinnedRepos"],
        json!([
            {
                "repoName": "Hello-World",
                "description": "My first repository on GitHub!",
                "language": "JavaScript"
            },
            {
                "repoName": "Spoon-Knife",
                "description": "No description available",
                "language": "HTML"
            }
        ])
    );
    assert_eq!(
        body["scrapingStatus"],
        json!({"profileScraped": true, "pinnedReposFound": true, "languagesFound": true})
    );
    assert!(body.get("leetcode").is_none());
}

#[tokio::test]
async fn test_language_breakdown() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    upstreams.mount_pages(OVERVIEW_PAGE, REPOSITORIES_PAGE).await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;
    let (_, body) = get_json(&format!("{}/api/github/{}", base, GITHUB_USER)).await;

    assert_eq!(body["languagesCount"], json!({"JavaScript": 3, "Python": 2}));
    assert_eq!(
        body["languageSummary"],
        json!([
            {"language": "JavaScript", "percent": "60.0%"},
            {"language": "Python", "percent": "40.0%"}
        ])
    );
}

#[tokio::test]
async fn test_no_pinned_repos_still_succeeds() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    upstreams
        .mount_pages(OVERVIEW_WITHOUT_PINS, REPOSITORIES_PAGE)
        .await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;
    let (status, body) = get_json(&format!("{}/api/github/{}", base, GITHUB_USER)).await;

    assert_eq!(status, 200);
    assert_eq!(body["pinnedRepos"], json!([]));
    assert_eq!(body["scrapingStatus"]["pinnedReposFound"], false);
    assert_eq!(body["scrapingStatus"]["profileScraped"], true);
    assert_eq!(body["scrapingStatus"]["languagesFound"], true);
}

#[tokio::test]
async fn test_slow_github_api_fails_without_scraping() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/users/{}", GITHUB_USER)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(github_user_json())
                .set_delay(Duration::from_millis(1500)),
        )
        .expect(1)
        .mount(&upstreams.api)
        .await;
    Mock::given(method("GET"))
        .respond_with(html(OVERVIEW_PAGE))
        .expect(0)
        .mount(&upstreams.web)
        .await;

    let base = spawn_app(
        &upstreams.config_with(10, 200),
        FakeGenerator::replying("unused"),
    )
    .await;
    let (status, body) = get_json(&format!("{}/api/github/{}", base, GITHUB_USER)).await;

    assert_eq!(status, 404);
    assert_eq!(
        body,
        json!({"error": "GitHub user not found or error occurred"})
    );
}

#[tokio::test]
async fn test_unknown_github_user() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .and(path("/users/ghost-user"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&upstreams.api)
        .await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;
    let (status, body) = get_json(&format!("{}/api/github/ghost-user", base)).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "GitHub user not found or error occurred");
}

#[tokio::test]
async fn test_failing_pages_degrade_to_placeholders() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstreams.web)
        .await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;
    let (status, body) = get_json(&format!("{}/api/github/{}", base, GITHUB_USER)).await;

    assert_eq!(status, 200);
    assert_eq!(body["userData"]["login"], GITHUB_USER);
    assert_eq!(
        body["contributionsThisYear"],
        "Unable to fetch contributions data"
    );
    assert_eq!(body["pinnedRepos"], json!([]));
    assert_eq!(body["languagesCount"], json!({}));
    assert_eq!(body["languageSummary"], json!([]));
    assert_eq!(
        body["scrapingStatus"],
        json!({"profileScraped": false, "pinnedReposFound": false, "languagesFound": false})
    );
}

#[tokio::test]
async fn test_unrecognized_markup_degrades_to_placeholders() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    upstreams
        .mount_pages("<html><body><p>redesigned</p></body></html>", "<html></html>")
        .await;

    let base = spawn_app(&upstreams.config(), FakeGenerator::replying("unused")).await;
    let (status, body) = get_json(&format!("{}/api/github/{}", base, GITHUB_USER)).await;

    assert_eq!(status, 200);
    assert_eq!(body["contributionsThisYear"], "Contribution data unavailable");
    assert_eq!(body["scrapingStatus"]["profileScraped"], false);
}

#[tokio::test]
async fn test_scrapes_of_one_host_are_paced() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    upstreams.mount_pages(OVERVIEW_PAGE, REPOSITORIES_PAGE).await;

    let base = spawn_app(
        &upstreams.config_with(200, 2000),
        FakeGenerator::replying("unused"),
    )
    .await;

    let started = Instant::now();
    let (status, _) = get_json(&format!("{}/api/github/{}", base, GITHUB_USER)).await;
    let elapsed = started.elapsed();

    // Three page fetches on one host means at least two pacing gaps
    assert_eq!(status, 200);
    assert!(
        elapsed >= Duration::from_millis(400),
        "request took only {:?}",
        elapsed
    );
    assert_eq!(upstreams.web.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_slow_pages_keep_their_pacing_gap() {
    let upstreams = Upstreams::start().await;
    upstreams.mount_github_user().await;
    let slow = |body: &str| html(body).set_delay(Duration::from_millis(300));
    Mock::given(method("GET"))
        .and(path(format!("/{}", GITHUB_USER)))
        .and(query_param("tab", "repositories"))
        .respond_with(slow(REPOSITORIES_PAGE))
        .mount(&upstreams.web)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/{}", GITHUB_USER)))
        .respond_with(slow(OVERVIEW_PAGE))
        .mount(&upstreams.web)
        .await;

    let base = spawn_app(
        &upstreams.config_with(300, 2000),
        FakeGenerator::replying("unused"),
    )
    .await;

    let started = Instant::now();
    let (status, body) = get_json(&format!("{}/api/github/{}", base, GITHUB_USER)).await;
    let elapsed = started.elapsed();

    // Three 300ms pages with a full 300ms gap after each of the first two
    assert_eq!(status, 200);
    assert_eq!(body["scrapingStatus"]["languagesFound"], true);
    assert!(
        elapsed >= Duration::from_millis(1500),
        "request took only {:?}",
        elapsed
    );
}
