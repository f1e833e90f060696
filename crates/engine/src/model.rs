use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Output record
// ---------------------------------------------------------------------------

/// The final labeled record for one directory line.
///
/// Field names and the literal type strings are part of the external
/// contract consumed by downstream tooling; they serialize exactly as
/// `{"subject": [...], "location": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub subject: Vec<Subject>,
    pub location: Vec<Location>,
}

/// A person named by the entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: SubjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubjectType {
    #[serde(rename = "primary")]
    Primary,
    #[serde(rename = "deceased spouse of primary")]
    DeceasedSpouse,
}

/// An address fragment, plus any attributes attached by predicate rules
/// (`type = home`, `position = rear`). Extra keys flatten into the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub value: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Subject {
    pub fn primary(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: SubjectType::Primary,
            occupation: None,
        }
    }

    pub fn deceased_spouse(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: SubjectType::DeceasedSpouse,
            occupation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_serializes_contract_literals() {
        let mut primary = Subject::primary("SMITH JOHN");
        primary.occupation = Some("carpenter".into());
        let json = serde_json::to_value(&primary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": "SMITH JOHN",
                "type": "primary",
                "occupation": "carpenter",
            })
        );

        let spouse = Subject::deceased_spouse("JOHN");
        let json = serde_json::to_value(&spouse).unwrap();
        assert_eq!(json["type"], "deceased spouse of primary");
        // no occupation key when unset
        assert!(json.get("occupation").is_none());
    }

    #[test]
    fn location_flattens_extra_keys() {
        let mut loc = Location {
            value: "45 Elm".into(),
            extra: BTreeMap::new(),
        };
        loc.extra.insert("position".into(), "rear".into());
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"value": "45 Elm", "position": "rear"})
        );
    }

    #[test]
    fn empty_record_shape() {
        let json = serde_json::to_value(Record::default()).unwrap();
        assert_eq!(json, serde_json::json!({"subject": [], "location": []}));
    }
}
