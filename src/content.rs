//! Fixed payloads served by the content endpoint

use serde::{Deserialize, Serialize};

/// The single record the site publishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub title: String,
    pub content: String,
    pub status: String,
}

impl ContentRecord {
    pub fn fixed() -> Self {
        Self {
            title: "Welcome".to_string(),
            content: "Ini konten asli dari backend".to_string(),
            status: "secure".to_string(),
        }
    }
}

/// Body returned when the gate refuses the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenialBody {
    pub error: String,
}

impl DenialBody {
    pub fn blocked() -> Self {
        Self {
            error: "blocked".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_record_wire_format() {
        let json = serde_json::to_string(&ContentRecord::fixed()).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Welcome","content":"Ini konten asli dari backend","status":"secure"}"#
        );
    }

    #[test]
    fn test_denial_wire_format() {
        let json = serde_json::to_string(&DenialBody::blocked()).unwrap();
        assert_eq!(json, r#"{"error":"blocked"}"#);
    }
}
