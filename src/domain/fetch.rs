use std::fmt::Display;

use serde_json::Value;

/// Outcome of a one-shot fetch as seen by a view.
///
/// Starts as `Loading` and moves once to `Success` or `Failure`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Loading,
    Success(Value),
    Failure(String),
}

impl FetchState {
    pub fn from_result<E: Display>(result: Result<Value, E>) -> Self {
        match result {
            Ok(payload) => FetchState::Success(payload),
            Err(err) => FetchState::Failure(err.to_string()),
        }
    }
}

/// Two-space indented JSON, keys in the order they arrived.
pub fn pretty_payload(payload: &Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_keeps_payload_verbatim() {
        let payload: Value = serde_json::from_str(r#"{"categories":["a","b"]}"#).unwrap();
        let state = FetchState::from_result::<String>(Ok(payload.clone()));
        let FetchState::Success(stored) = &state else {
            panic!("expected success, got {state:?}");
        };
        assert_eq!(stored, &payload);
        assert_eq!(
            serde_json::to_string(stored).unwrap(),
            r#"{"categories":["a","b"]}"#
        );
    }

    #[test]
    fn failure_keeps_message_verbatim() {
        let state = FetchState::from_result::<&str>(Err("ECONNREFUSED"));
        assert_eq!(state, FetchState::Failure("ECONNREFUSED".to_string()));
    }

    #[test]
    fn starts_loading() {
        assert_eq!(FetchState::default(), FetchState::Loading);
    }

    #[test]
    fn pretty_print_preserves_key_order() {
        let payload: Value =
            serde_json::from_str(r#"{"zeta":1,"alpha":{"b":true,"a":null},"list":["x"]}"#).unwrap();
        let expected = "{\n  \"zeta\": 1,\n  \"alpha\": {\n    \"b\": true,\n    \"a\": null\n  },\n  \"list\": [\n    \"x\"\n  ]\n}";
        assert_eq!(pretty_payload(&payload), expected);
    }
}
