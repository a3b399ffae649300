use serde_json::Value;
use thiserror::Error;

/// What went wrong with an API call.
///
/// `Cancelled` is not a user-facing failure: it means a newer request
/// superseded this one (or the view went away) and the result must be
/// discarded silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("запрос отменён")]
    Cancelled,
    #[error("ошибка сети: {0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Classify a transport-level failure from `gloo_net`. An aborted fetch
    /// surfaces as a JS `AbortError`; everything else is a network problem.
    pub fn from_send(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Cancelled,
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Pick the most specific message out of an error payload.
///
/// Checked in order: the first entry of a structured `errors` map/list, then
/// the top-level `message`, then a generic fallback with the status code.
pub fn server_error_message(status: u16, body: &Value) -> String {
    if let Some(message) = first_field_error(body.get("errors")) {
        return message;
    }
    if let Some(Value::String(message)) = body.get("message") {
        return message.clone();
    }
    format!("ошибка сервера ({status})")
}

fn first_field_error(errors: Option<&Value>) -> Option<String> {
    match errors? {
        Value::Object(map) => map.values().find_map(first_string),
        value => first_string(value),
    }
}

fn first_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_errors_win_over_message() {
        let body = json!({
            "message": "The given data was invalid.",
            "errors": { "name": ["название уже используется"] }
        });
        assert_eq!(server_error_message(422, &body), "название уже используется");
    }

    #[test]
    fn message_is_second_choice() {
        let body = json!({ "message": "категория содержит товары" });
        assert_eq!(server_error_message(409, &body), "категория содержит товары");
    }

    #[test]
    fn generic_fallback_carries_status() {
        assert_eq!(server_error_message(500, &json!({})), "ошибка сервера (500)");
        assert_eq!(server_error_message(500, &Value::Null), "ошибка сервера (500)");
    }

    #[test]
    fn errors_as_plain_list_also_works() {
        let body = json!({ "errors": ["первая ошибка", "вторая"] });
        assert_eq!(server_error_message(422, &body), "первая ошибка");
    }
}
