//! RDAP record extraction.
//!
//! RDAP documents are untrusted, partially-present data: every structural
//! assumption is guarded, and a missing or malformed field silently leaves
//! the `"Unknown"` placeholder instead of failing extraction.

use crate::types::RdapRecord;

/// Extract registrar and date fields from an RDAP document.
///
/// Field precedence:
/// - Registrar: the first entity carrying the `registrar` role whose
///   vCard contains an `fn` or `org` entry with a fourth positional
///   field. First match across entities wins.
/// - Dates: `registration` and `expiration` events. Events are not
///   assumed sorted and duplicates may appear; a later matching event
///   overwrites an earlier one, mirroring long-standing consumer
///   behavior for these documents.
pub fn extract_record(doc: &serde_json::Value) -> RdapRecord {
    let mut record = RdapRecord::default();

    if let Some(entities) = doc.get("entities").and_then(|e| e.as_array()) {
        for entity in entities {
            let is_registrar = entity
                .get("roles")
                .and_then(|r| r.as_array())
                .map(|roles| roles.iter().any(|role| role.as_str() == Some("registrar")))
                .unwrap_or(false);

            if !is_registrar {
                continue;
            }

            if let Some(name) = extract_vcard_name(entity) {
                record.registrar = name;
                break;
            }
        }
    }

    if let Some(events) = doc.get("events").and_then(|e| e.as_array()) {
        for event in events {
            let (action, date) = match (
                event.get("eventAction").and_then(|a| a.as_str()),
                event.get("eventDate").and_then(|d| d.as_str()),
            ) {
                (Some(action), Some(date)) => (action, date),
                _ => continue,
            };

            match action {
                "registration" => record.registration_date = date.to_string(),
                "expiration" => record.expiration_date = date.to_string(),
                _ => {}
            }
        }
    }

    record
}

/// Pull the display name out of an entity's vCard.
///
/// The vCard body is `vcardArray[1]`; each entry is a positional array
/// `[tag, params, type, value]`. We take the first `fn` or `org` entry
/// that actually carries the fourth field.
fn extract_vcard_name(entity: &serde_json::Value) -> Option<String> {
    entity
        .get("vcardArray")
        .and_then(|v| v.as_array())
        .and_then(|a| a.get(1))
        .and_then(|a| a.as_array())
        .and_then(|items| {
            for item in items {
                if let Some(entry) = item.as_array() {
                    if entry.len() < 4 {
                        continue;
                    }
                    match entry.first().and_then(|t| t.as_str()) {
                        Some("fn") | Some("org") => {
                            return entry.get(3).and_then(|n| n.as_str()).map(String::from);
                        }
                        _ => {}
                    }
                }
            }
            None
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNKNOWN;

    #[test]
    fn test_extract_full_document() {
        let doc = serde_json::json!({
            "entities": [
                {
                    "roles": ["registrar"],
                    "vcardArray": [
                        "vcard",
                        [
                            ["version", {}, "text", "4.0"],
                            ["fn", {}, "text", "Example Registrar, Inc."]
                        ]
                    ]
                }
            ],
            "events": [
                {"eventAction": "registration", "eventDate": "1995-08-14T04:00:00Z"},
                {"eventAction": "expiration", "eventDate": "2026-08-13T04:00:00Z"}
            ]
        });

        let record = extract_record(&doc);
        assert_eq!(record.registrar, "Example Registrar, Inc.");
        assert_eq!(record.registration_date, "1995-08-14T04:00:00Z");
        assert_eq!(record.expiration_date, "2026-08-13T04:00:00Z");
    }

    #[test]
    fn test_extract_org_tag_also_names_registrar() {
        let doc = serde_json::json!({
            "entities": [
                {
                    "roles": ["registrar"],
                    "vcardArray": [
                        "vcard",
                        [["org", {}, "text", "Registrar Org Ltd."]]
                    ]
                }
            ]
        });

        assert_eq!(extract_record(&doc).registrar, "Registrar Org Ltd.");
    }

    #[test]
    fn test_extract_registrar_first_match_wins() {
        let doc = serde_json::json!({
            "entities": [
                {"roles": ["registrant"]},
                {
                    "roles": ["registrar"],
                    "vcardArray": ["vcard", [["fn", {}, "text", "First Registrar"]]]
                },
                {
                    "roles": ["registrar"],
                    "vcardArray": ["vcard", [["fn", {}, "text", "Second Registrar"]]]
                }
            ]
        });

        assert_eq!(extract_record(&doc).registrar, "First Registrar");
    }

    #[test]
    fn test_extract_dates_last_match_wins() {
        // Duplicate actions: the later event overwrites the earlier one.
        let doc = serde_json::json!({
            "events": [
                {"eventAction": "registration", "eventDate": "2001-01-01T00:00:00Z"},
                {"eventAction": "registration", "eventDate": "2002-02-02T00:00:00Z"}
            ]
        });

        let record = extract_record(&doc);
        assert_eq!(record.registration_date, "2002-02-02T00:00:00Z");
    }

    #[test]
    fn test_extract_short_vcard_entry_is_skipped() {
        // The fn entry only has three positional fields; no name to take.
        let doc = serde_json::json!({
            "entities": [
                {
                    "roles": ["registrar"],
                    "vcardArray": ["vcard", [["fn", {}, "text"]]]
                }
            ]
        });

        assert_eq!(extract_record(&doc).registrar, UNKNOWN);
    }

    #[test]
    fn test_extract_empty_document_yields_unknowns() {
        let record = extract_record(&serde_json::json!({}));
        assert_eq!(record.registrar, UNKNOWN);
        assert_eq!(record.registration_date, UNKNOWN);
        assert_eq!(record.expiration_date, UNKNOWN);
    }

    #[test]
    fn test_extract_tolerates_malformed_shapes() {
        // entities is an object, events entries lack dates — no panic,
        // no partial garbage.
        let doc = serde_json::json!({
            "entities": {"roles": "registrar"},
            "events": [
                {"eventAction": "registration"},
                {"eventDate": "2020-01-01T00:00:00Z"},
                "not-an-object"
            ]
        });

        let record = extract_record(&doc);
        assert_eq!(record.registrar, UNKNOWN);
        assert_eq!(record.registration_date, UNKNOWN);
        assert_eq!(record.expiration_date, UNKNOWN);
    }
}
