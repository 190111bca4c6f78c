#![allow(dead_code)]

use serde_json::{Value, json};

pub fn sample_answer_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": text}]
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 8,
            "candidatesTokenCount": 1,
            "totalTokenCount": 9
        },
        "modelVersion": "gemini-2.5-pro"
    })
}

pub fn multi_part_answer_response() -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    {"text": "Let me add the numbers.", "thought": true},
                    {"text": "2 + 2 "},
                    {"text": "= 4"}
                ]
            },
            "finishReason": "STOP"
        }]
    })
}

pub fn blocked_prompt_response() -> Value {
    json!({
        "promptFeedback": {"blockReason": "SAFETY"},
        "usageMetadata": {"promptTokenCount": 8, "totalTokenCount": 8}
    })
}

pub fn quota_exceeded_error() -> Value {
    json!({
        "error": {
            "code": 429,
            "message": "Resource has been exhausted (e.g. check quota).",
            "status": "RESOURCE_EXHAUSTED"
        }
    })
}

pub fn invalid_key_error() -> Value {
    json!({
        "error": {
            "code": 400,
            "message": "API key not valid. Please pass a valid API key.",
            "status": "INVALID_ARGUMENT"
        }
    })
}
