//! Test fixtures for integration tests
//!
//! `FakeUpstream` serves the three upstream endpoints from a local axum
//! router bound to an ephemeral port.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const VIDEO_ID: &str = "dQw4w9WgXcQ";
pub const API_KEY: &str = "AIzaSyTestKey_0123456789";

pub const SAMPLE_VTT: &str = "WEBVTT\n\
Kind: captions\n\
Language: es\n\
\n\
00:00:01.000 --> 00:00:03.500\n\
<c>Hola</c>   a todos\n\
\n\
00:00:03.500 --> 00:00:06.000\n\
bienvenidos al\n\
<i>canal</i>\n";

/// A caption track the fake player API advertises
#[derive(Debug, Clone)]
pub struct FakeTrack {
    pub lang: &'static str,
    pub asr: bool,
}

impl FakeTrack {
    pub fn manual(lang: &'static str) -> Self {
        Self { lang, asr: false }
    }

    pub fn asr(lang: &'static str) -> Self {
        Self { lang, asr: true }
    }
}

/// Behavior of the fake upstream
#[derive(Debug, Clone)]
pub struct FakeUpstream {
    pub embed_key: bool,
    pub player_status: StatusCode,
    pub tracks: Vec<FakeTrack>,
    pub timedtext_status: StatusCode,
    pub vtt: String,
}

impl Default for FakeUpstream {
    fn default() -> Self {
        Self {
            embed_key: true,
            player_status: StatusCode::OK,
            tracks: vec![FakeTrack::manual("es")],
            timedtext_status: StatusCode::OK,
            vtt: SAMPLE_VTT.to_string(),
        }
    }
}

/// Requests observed by the fake upstream
#[derive(Debug, Default)]
pub struct Recorded {
    pub watch_queries: Vec<HashMap<String, String>>,
    pub accept_languages: Vec<String>,
    pub player_bodies: Vec<Value>,
    pub player_keys: Vec<String>,
    pub timedtext_queries: Vec<HashMap<String, String>>,
}

struct FakeState {
    base_url: String,
    behavior: FakeUpstream,
    recorded: Arc<Mutex<Recorded>>,
}

/// A running fake upstream
pub struct RunningUpstream {
    pub base_url: String,
    pub recorded: Arc<Mutex<Recorded>>,
}

impl FakeUpstream {
    /// Bind to an ephemeral port and serve in the background
    pub async fn spawn(self) -> RunningUpstream {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let recorded = Arc::new(Mutex::new(Recorded::default()));

        let state = Arc::new(FakeState {
            base_url: base_url.clone(),
            behavior: self,
            recorded: recorded.clone(),
        });

        let app = Router::new()
            .route("/watch", get(watch_page))
            .route("/youtubei/v1/player", post(player))
            .route("/api/timedtext", get(timedtext))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningUpstream { base_url, recorded }
    }
}

async fn watch_page(
    State(state): State<Arc<FakeState>>,
    headers: axum::http::HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.watch_queries.push(query);
        if let Some(lang) = headers.get("accept-language") {
            recorded
                .accept_languages
                .push(lang.to_str().unwrap().to_string());
        }
    }

    let config = if state.behavior.embed_key {
        format!(r#"ytcfg.set({{"INNERTUBE_API_KEY":"{}","INNERTUBE_CLIENT_VERSION":"2.0"}});"#, API_KEY)
    } else {
        "ytcfg.set({});".to_string()
    };
    format!("<html><head><script>{}</script></head><body></body></html>", config).into_response()
}

async fn player(
    State(state): State<Arc<FakeState>>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.player_bodies.push(body.clone());
        recorded
            .player_keys
            .push(query.get("key").cloned().unwrap_or_default());
    }

    if !state.behavior.player_status.is_success() {
        return (state.behavior.player_status, "upstream failure").into_response();
    }

    let video_id = body["videoId"].as_str().unwrap_or_default();
    if state.behavior.tracks.is_empty() {
        return Json(json!({ "playabilityStatus": { "status": "OK" } })).into_response();
    }

    let tracks: Vec<Value> = state
        .behavior
        .tracks
        .iter()
        .map(|t| {
            let mut track = json!({
                "baseUrl": format!("{}/api/timedtext?v={}&lang={}", state.base_url, video_id, t.lang),
                "languageCode": t.lang,
                "name": { "runs": [{ "text": t.lang }] },
            });
            if t.asr {
                track["kind"] = json!("asr");
            }
            track
        })
        .collect();

    Json(json!({
        "captions": {
            "playerCaptionsTracklistRenderer": {
                "captionTracks": tracks
            }
        }
    }))
    .into_response()
}

async fn timedtext(
    State(state): State<Arc<FakeState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.recorded.lock().unwrap().timedtext_queries.push(query);

    if !state.behavior.timedtext_status.is_success() {
        return state.behavior.timedtext_status.into_response();
    }
    state.behavior.vtt.clone().into_response()
}
