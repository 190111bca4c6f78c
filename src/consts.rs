pub const GEMINI_MODEL: &str = "models/gemini-2.5-pro";
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub(crate) const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

pub const SERVER_HOST: &str = "127.0.0.1";
pub const SERVER_PORT: u16 = 5001;

pub const LIVENESS_MESSAGE: &str = "Gemini service is running!";
