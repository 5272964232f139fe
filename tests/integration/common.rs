//! Shared fixtures: mock upstreams, a fake text generator and a live server

use async_trait::async_trait;
use devcard::config::{Config, FetcherConfig, UpstreamConfig, DEFAULT_USER_AGENT};
use devcard::server::{serve, AppState};
use devcard::{DevCardError, TextGenerator};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GITHUB_USER: &str = "octocat";
pub const LEETCODE_USER: &str = "lc_octo";

/// The three upstreams the service talks to
pub struct Upstreams {
    pub api: MockServer,
    pub web: MockServer,
    pub leetcode: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            api: MockServer::start().await,
            web: MockServer::start().await,
            leetcode: MockServer::start().await,
        }
    }

    /// Config pointing at the mocks, with short pacing and timeout
    pub fn config(&self) -> Config {
        self.config_with(10, 2000)
    }

    pub fn config_with(&self, pacing_ms: u64, timeout_ms: u64) -> Config {
        Config {
            upstream: UpstreamConfig {
                github_api_url: self.api.uri(),
                github_web_url: self.web.uri(),
                leetcode_graphql_url: format!("{}/graphql/", self.leetcode.uri()),
            },
            fetcher: FetcherConfig {
                timeout_ms,
                pacing_ms,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
            ..Config::default()
        }
    }

    pub async fn mount_github_user(&self) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}", GITHUB_USER)))
            .respond_with(ResponseTemplate::new(200).set_body_json(github_user_json()))
            .mount(&self.api)
            .await;
    }

    /// Mounts the repositories tab first so it wins over the bare profile path
    pub async fn mount_pages(&self, overview: &str, repositories: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{}", GITHUB_USER)))
            .and(query_param("tab", "repositories"))
            .respond_with(html(repositories))
            .mount(&self.web)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/{}", GITHUB_USER)))
            .respond_with(html(overview))
            .mount(&self.web)
            .await;
    }

    pub async fn mount_leetcode(&self, matched_user: Value) {
        Mock::given(method("POST"))
            .and(path("/graphql/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": { "matchedUser": matched_user } })),
            )
            .mount(&self.leetcode)
            .await;
    }
}

pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body.to_string())
}

pub fn github_user_json() -> Value {
    json!({
        "login": GITHUB_USER,
        "id": 583231,
        "name": "The Octocat",
        "bio": null,
        "company": "@github",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "public_repos": 8,
        "followers": 120,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z"
    })
}

pub fn leetcode_user_json() -> Value {
    json!({
        "username": LEETCODE_USER,
        "profile": { "realName": "Octo", "ranking": 4521 },
        "submitStatsGlobal": {
            "acSubmissionNum": [
                { "difficulty": "All", "count": 60, "submissions": 90 },
                { "difficulty": "Easy", "count": 30, "submissions": 40 },
                { "difficulty": "Medium", "count": 25, "submissions": 40 },
                { "difficulty": "Hard", "count": 5, "submissions": 10 }
            ]
        },
        "badges": [],
        "userCalendar": { "streak": 3, "totalActiveDays": 40, "submissionCalendar": "{}" },
        "languageProblemCount": [{ "languageName": "Rust", "problemsSolved": 42 }]
    })
}

pub const OVERVIEW_PAGE: &str = r#"
<html><body>
  <div class="js-pinned-items-reorder-container">
    <ol class="js-pinned-items-reorder-list">
      <li class="pinned-item-list-item">
        <div class="pinned-item-list-item-content">
          <span class="repo">Hello-World</span>
          <p class="pinned-item-desc">My first repository on GitHub!</p>
          <p class="f6"><span itemprop="programmingLanguage">JavaScript</span></p>
        </div>
      </li>
      <li class="pinned-item-list-item">
        <div class="pinned-item-list-item-content">
          <span class="repo">octocat/Spoon-Knife</span>
          <p class="f6"><span itemprop="programmingLanguage">HTML</span></p>
        </div>
      </li>
    </ol>
  </div>
  <div class="js-yearly-contributions">
    <h2 class="f4 text-normal mb-2">
      1,234 contributions
      in the last year
    </h2>
  </div>
</body></html>
"#;

pub const OVERVIEW_WITHOUT_PINS: &str = r#"
<html><body>
  <div class="js-yearly-contributions">
    <h2 class="f4 text-normal mb-2">57 contributions in the last year</h2>
  </div>
</body></html>
"#;

pub const REPOSITORIES_PAGE: &str = r#"
<html><body><ul>
  <li itemprop="owns"><h3><a>one</a></h3><span itemprop="programmingLanguage">JavaScript</span></li>
  <li itemprop="owns"><h3><a>two</a></h3><span itemprop="programmingLanguage">Python</span></li>
  <li itemprop="owns"><h3><a>three</a></h3><span itemprop="programmingLanguage">JavaScript</span></li>
  <li itemprop="owns"><h3><a>four</a></h3><span itemprop="programmingLanguage">Python</span></li>
  <li itemprop="owns"><h3><a>five</a></h3><span itemprop="programmingLanguage">JavaScript</span></li>
</ul></body></html>
"#;

/// Records prompts and answers with a canned reply, or fails when none is set
pub struct FakeGenerator {
    reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DevCardError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| DevCardError::Summarization("quota exceeded".to_string()))
    }
}

/// Starts the service on an ephemeral port and returns its base URL
pub async fn spawn_app(config: &Config, generator: Arc<dyn TextGenerator>) -> String {
    let state = AppState::with_generator(config, generator).expect("failed to build state");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener has no address");

    tokio::spawn(async move {
        let _ = serve(listener, state).await;
    });

    format!("http://{}", addr)
}

/// GETs `url` and returns the status with the JSON body
pub async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.expect("request to service failed");
    let status = response.status().as_u16();
    let body = response.json().await.expect("service returned non-JSON");
    (status, body)
}
