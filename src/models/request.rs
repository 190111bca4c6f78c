use serde::{self, Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct AskRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl AskRequest {
    /// Parses a raw request body. An empty body, JSON `null`, or a `null` question yields an empty question.
    pub fn from_body(body: &[u8]) -> Result<AskRequest, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(AskRequest::default());
        }
        let request: Option<AskRequest> = serde_json::from_slice(body)?;
        Ok(request.unwrap_or_default())
    }
}
