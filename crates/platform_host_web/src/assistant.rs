//! `fetch`-backed generative-text assistant adapter.
//!
//! Requests go to the Gemini `generateContent` REST endpoint. The API key is baked in at build
//! time from `HAMZA_OS_AI_API_KEY`; builds without it answer every request with an error.

use platform_host::{AssistantFuture, AssistantRequest, AssistantService};
use serde::{Deserialize, Serialize};

const MODEL: &str = "gemini-2.5-flash";
const ENDPOINT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone, Default)]
/// Browser assistant adapter.
pub struct WebAssistantService {
    api_key: Option<String>,
}

impl WebAssistantService {
    /// Creates an adapter using the build-time API key, if any.
    pub fn from_build_env() -> Self {
        Self {
            api_key: option_env!("HAMZA_OS_AI_API_KEY")
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        }
    }

    /// Creates an adapter with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    fn endpoint(&self) -> Result<String, String> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| "API key is missing in the build environment".to_string())?;
        Ok(format!("{ENDPOINT_BASE}/{MODEL}:generateContent?key={key}"))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

fn request_body(request: &AssistantRequest) -> Result<String, String> {
    let body = GenerateBody {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: request.system_instruction.clone(),
            }],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: request.prompt.clone(),
            }],
        }],
    };
    serde_json::to_string(&body).map_err(|e| e.to_string())
}

/// Extracts the reply text from a `generateContent` response body.
fn parse_reply(raw: &str) -> Result<String, String> {
    let response: GenerateResponse =
        serde_json::from_str(raw).map_err(|e| format!("malformed assistant response: {e}"))?;
    let text = response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .map(|part| part.text)
        .collect::<Vec<_>>()
        .join("");
    if text.trim().is_empty() {
        return Err("assistant response contained no text".to_string());
    }
    Ok(text)
}

impl AssistantService for WebAssistantService {
    fn generate<'a>(
        &'a self,
        request: &'a AssistantRequest,
    ) -> AssistantFuture<'a, Result<String, String>> {
        Box::pin(async move {
            let url = self.endpoint()?;
            let body = request_body(request)?;
            let raw = post_json(&url, &body, request.timeout_ms).await?;
            parse_reply(&raw)
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_json(url: &str, body: &str, timeout_ms: u32) -> Result<String, String> {
    use futures::future::{select, Either};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    fn js_err(err: JsValue) -> String {
        format!("{err:?}")
    }

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;

    let headers = web_sys::Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(js_err)?;

    let timer_window = window.clone();
    let timeout = JsFuture::from(js_sys::Promise::new(&mut move |resolve, _reject| {
        let _ = timer_window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms as i32);
    }));
    let fetch = JsFuture::from(window.fetch_with_request(&request));
    futures::pin_mut!(fetch, timeout);

    let response = match select(fetch, timeout).await {
        Either::Left((result, _)) => result.map_err(|err| format!("network error: {}", js_err(err)))?,
        Either::Right(_) => {
            return Err(format!("assistant request timed out after {timeout_ms} ms"));
        }
    };
    let response: web_sys::Response = response.dyn_into().map_err(js_err)?;
    if !response.ok() {
        return Err(format!(
            "assistant request failed with HTTP {}",
            response.status()
        ));
    }
    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    text.as_string()
        .ok_or_else(|| "assistant response body was not text".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json(_url: &str, _body: &str, _timeout_ms: u32) -> Result<String, String> {
    Err("network requests are only available when compiled for wasm32".to_string())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn parse_reply_joins_candidate_parts() {
        let raw = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello"},{"text":" there"}]}}]}"#;
        assert_eq!(parse_reply(raw), Ok("Hello there".to_string()));
    }

    #[test]
    fn parse_reply_rejects_empty_and_malformed_bodies() {
        assert!(parse_reply(r#"{"candidates":[]}"#).is_err());
        assert!(parse_reply("<html>").unwrap_err().contains("malformed"));
    }

    #[test]
    fn request_body_carries_prompt_and_instruction() {
        let body = request_body(&AssistantRequest::new("who are you", "be short")).expect("body");
        let value: serde_json::Value = serde_json::from_str(&body).expect("json");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "be short");
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "who are you");
    }

    #[test]
    fn missing_api_key_fails_before_network() {
        let service = WebAssistantService::default();
        let err = block_on(service.generate(&AssistantRequest::new("hi", ""))).unwrap_err();
        assert!(err.contains("API key"));
    }

    #[test]
    fn endpoint_embeds_model_and_key() {
        let service = WebAssistantService::with_api_key("k123");
        let url = service.endpoint().expect("endpoint");
        assert!(url.ends_with("gemini-2.5-flash:generateContent?key=k123"));
    }
}
