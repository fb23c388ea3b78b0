//! Basic-info field resolution: fixed fields in user order, then custom fields.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::layout::dates::{language, DateFormatter};
use crate::models::resume::{is_visible, BasicInfo};

/// A basic-info field ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedField {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Keys shown in the heading rather than the field list.
const HEADING_KEYS: &[&str] = &["name", "title"];

/// Field keys whose raw value is an ISO date.
const DATE_KEYS: &[&str] = &["birthDate"];

/// Fallback order when the document has no `fieldOrder`.
const FALLBACK_KEYS: &[&str] = &["email", "phone", "location"];

/// Resolves the ordered, filtered field list for the basic-info block.
///
/// Order: `fieldOrder` entries (or the email/phone/location fallback), then
/// visible custom fields. Hidden entries, heading keys, empty values and
/// repeated keys are dropped; the first occurrence of a key wins.
pub fn resolve_fields(
    basic: &BasicInfo,
    locale: &str,
    formatter: &dyn DateFormatter,
) -> Vec<ResolvedField> {
    let mut candidates: Vec<ResolvedField> = Vec::new();

    match &basic.field_order {
        Some(order) => {
            for field in order {
                if !is_visible(field.visible) || HEADING_KEYS.contains(&field.key.as_str()) {
                    continue;
                }
                let raw = basic.field_value(&field.key).unwrap_or_default();
                let value = if DATE_KEYS.contains(&field.key.as_str()) {
                    format_date_or_raw(&raw, locale, formatter)
                } else {
                    raw
                };
                candidates.push(ResolvedField {
                    key: field.key.clone(),
                    label: field.label.clone(),
                    value,
                });
            }
        }
        None => {
            for key in FALLBACK_KEYS {
                candidates.push(ResolvedField {
                    key: (*key).to_string(),
                    label: fallback_label(key, locale).to_string(),
                    value: basic.field_value(key).unwrap_or_default(),
                });
            }
        }
    }

    candidates.extend(
        basic
            .custom_fields
            .iter()
            .filter(|f| is_visible(f.visible))
            .map(|f| ResolvedField {
                key: f.id.clone(),
                label: f.label.clone(),
                value: f.value.clone(),
            }),
    );

    let mut seen: HashSet<String> = HashSet::new();
    candidates
        .into_iter()
        .filter(|f| !f.value.is_empty())
        .filter(|f| seen.insert(f.key.clone()))
        .collect()
}

/// Formats a date value, keeping the raw string when the formatter rejects it.
fn format_date_or_raw(raw: &str, locale: &str, formatter: &dyn DateFormatter) -> String {
    formatter
        .format(raw, locale)
        .unwrap_or_else(|_| raw.to_string())
}

fn fallback_label(key: &str, locale: &str) -> &'static str {
    let zh = language(locale) == "zh";
    match (key, zh) {
        ("email", true) => "邮箱",
        ("phone", true) => "电话",
        ("location", true) => "所在地",
        ("email", false) => "Email",
        ("phone", false) => "Phone",
        ("location", false) => "Location",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::dates::{DateFormatError, MonthYearFormatter};
    use crate::models::resume::{BasicFieldType, CustomFieldType};

    fn order(key: &str, visible: Option<bool>) -> BasicFieldType {
        BasicFieldType {
            key: key.to_string(),
            label: key.to_string(),
            visible,
        }
    }

    fn custom(id: &str, value: &str, visible: Option<bool>) -> CustomFieldType {
        CustomFieldType {
            id: id.to_string(),
            label: format!("{id} label"),
            value: value.to_string(),
            visible,
        }
    }

    fn keys(fields: &[ResolvedField]) -> Vec<&str> {
        fields.iter().map(|f| f.key.as_str()).collect()
    }

    struct FailingFormatter;

    impl DateFormatter for FailingFormatter {
        fn format(&self, iso: &str, _locale: &str) -> Result<String, DateFormatError> {
            Err(DateFormatError::Unparseable(iso.to_string()))
        }
    }

    #[test]
    fn test_field_order_with_birth_date_scenario() {
        let basic = BasicInfo {
            email: "a@b.com".to_string(),
            phone: "555-0100".to_string(),
            birth_date: "1990-05-01".to_string(),
            field_order: Some(vec![order("email", Some(true)), order("birthDate", Some(true))]),
            ..Default::default()
        };

        let fields = resolve_fields(&basic, "en", &MonthYearFormatter);
        assert_eq!(
            fields,
            vec![
                ResolvedField {
                    key: "email".to_string(),
                    label: "email".to_string(),
                    value: "a@b.com".to_string(),
                },
                ResolvedField {
                    key: "birthDate".to_string(),
                    label: "birthDate".to_string(),
                    value: "May 1990".to_string(),
                },
            ],
            "phone is not in fieldOrder so it must not appear"
        );
    }

    #[test]
    fn test_fallback_order_when_field_order_absent() {
        let basic = BasicInfo {
            email: "a@b.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Berlin".to_string(),
            birth_date: "1990-05-01".to_string(),
            ..Default::default()
        };
        let fields = resolve_fields(&basic, "en", &MonthYearFormatter);
        assert_eq!(keys(&fields), vec!["email", "phone", "location"]);
        assert_eq!(fields[0].label, "Email");
    }

    #[test]
    fn test_fallback_labels_follow_locale() {
        let basic = BasicInfo {
            location: "上海".to_string(),
            ..Default::default()
        };
        let fields = resolve_fields(&basic, "zh-CN", &MonthYearFormatter);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].label, "所在地");
    }

    #[test]
    fn test_hidden_and_heading_keys_dropped() {
        let basic = BasicInfo {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            email: "a@b.com".to_string(),
            phone: "555-0100".to_string(),
            field_order: Some(vec![
                order("name", Some(true)),
                order("title", None),
                order("email", Some(false)),
                order("phone", None),
            ]),
            ..Default::default()
        };
        let fields = resolve_fields(&basic, "en", &MonthYearFormatter);
        assert_eq!(keys(&fields), vec!["phone"]);
    }

    #[test]
    fn test_custom_fields_appended_after_ordered() {
        let basic = BasicInfo {
            email: "a@b.com".to_string(),
            field_order: Some(vec![order("email", None)]),
            custom_fields: vec![
                custom("site", "ada.dev", None),
                custom("hidden", "x", Some(false)),
                custom("blank", "", Some(true)),
            ],
            ..Default::default()
        };
        let fields = resolve_fields(&basic, "en", &MonthYearFormatter);
        assert_eq!(keys(&fields), vec!["email", "site"]);
        assert_eq!(fields[1].label, "site label");
        assert_eq!(fields[1].value, "ada.dev");
    }

    #[test]
    fn test_whitespace_value_is_not_empty() {
        let basic = BasicInfo {
            custom_fields: vec![custom("spacer", " ", None)],
            ..Default::default()
        };
        let fields = resolve_fields(&basic, "en", &MonthYearFormatter);
        assert_eq!(keys(&fields), vec!["spacer"]);
        assert_eq!(fields[0].value, " ");
    }

    #[test]
    fn test_custom_fields_appended_after_fallback() {
        let basic = BasicInfo {
            phone: "555".to_string(),
            custom_fields: vec![custom("github", "ada", None)],
            ..Default::default()
        };
        let fields = resolve_fields(&basic, "en", &MonthYearFormatter);
        assert_eq!(keys(&fields), vec!["phone", "github"]);
    }

    #[test]
    fn test_formatter_failure_falls_back_to_raw() {
        let basic = BasicInfo {
            birth_date: "sometime in May".to_string(),
            field_order: Some(vec![order("birthDate", None)]),
            ..Default::default()
        };
        let fields = resolve_fields(&basic, "en", &FailingFormatter);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].value, "sometime in May");
    }

    #[test]
    fn test_empty_birth_date_dropped() {
        let basic = BasicInfo {
            field_order: Some(vec![order("birthDate", None)]),
            ..Default::default()
        };
        assert!(resolve_fields(&basic, "en", &MonthYearFormatter).is_empty());
    }

    #[test]
    fn test_duplicate_keys_emitted_once() {
        let basic = BasicInfo {
            email: "a@b.com".to_string(),
            field_order: Some(vec![order("email", None), order("email", None)]),
            custom_fields: vec![custom("email", "other@b.com", None)],
            ..Default::default()
        };
        let fields = resolve_fields(&basic, "en", &MonthYearFormatter);
        assert_eq!(keys(&fields), vec!["email"]);
        assert_eq!(fields[0].value, "a@b.com");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let basic = BasicInfo {
            email: "a@b.com".to_string(),
            location: "Oslo".to_string(),
            custom_fields: vec![custom("site", "ada.dev", None)],
            ..Default::default()
        };
        let a = resolve_fields(&basic, "en", &MonthYearFormatter);
        let b = resolve_fields(&basic, "en", &MonthYearFormatter);
        assert_eq!(a, b);
    }
}
