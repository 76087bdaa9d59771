//! Core data types for the exporter.

use serde::Serialize;

/// A single naming-convention rule read from the conventions sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRecord {
    /// Fully qualified asset IRI (base IRI + identifier suffix).
    pub iri: String,

    /// Whether an object ID is mandatory ("ja" in the workbook).
    pub object_id_required: bool,

    /// Validation pattern for AAS codes, exported verbatim.
    pub aas_regex: String,

    /// Structure of the AAS code (human readable).
    pub aas_opbouw: String,

    /// Example AAS code.
    pub aas_voorbeeld: String,

    /// Template for object descriptions.
    pub omschrijving_template: String,

    /// Explanation of the description template.
    pub omschrijving_uitleg: String,

    /// Example description.
    pub omschrijving_voorbeeld: String,

    /// 1-based row number in the conventions sheet.
    pub row: u32,
}

/// Complete rule set extracted from one workbook.
///
/// Only `latest_rule_version` and `rules` are serialized; the other fields
/// exist for operator reporting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    /// Version marker from the version sheet; empty when unavailable.
    pub latest_rule_version: String,

    /// Exported rules in sheet order.
    pub rules: Vec<RuleRecord>,

    /// Count of data rows that did not qualify for export.
    #[serde(skip)]
    pub skipped_rows: usize,

    /// Non-fatal issues noticed during extraction.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl RuleSet {
    /// Create an empty rule set with the given version marker.
    #[must_use]
    pub fn new(latest_rule_version: impl Into<String>) -> Self {
        Self {
            latest_rule_version: latest_rule_version.into(),
            rules: Vec::new(),
            skipped_rows: 0,
            warnings: Vec::new(),
        }
    }

    /// Append a rule to the set.
    pub fn add_rule(&mut self, rule: RuleRecord) {
        self.rules.push(rule);
    }

    /// Record a non-fatal extraction issue.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rule() -> RuleRecord {
        RuleRecord {
            iri: "https://dds.schiphol.nl/asset/runway".to_string(),
            object_id_required: true,
            aas_regex: "^RWY-[0-9]{2}[LCR]?$".to_string(),
            aas_opbouw: "RWY-<nummer><positie>".to_string(),
            aas_voorbeeld: "RWY-18R".to_string(),
            omschrijving_template: "Runway <nummer>".to_string(),
            omschrijving_uitleg: "Nummer is de magnetische koers".to_string(),
            omschrijving_voorbeeld: "Runway 18R".to_string(),
            row: 2,
        }
    }

    #[test]
    fn test_rule_record_json_field_names() {
        let value = serde_json::to_value(sample_rule()).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "iri",
            "objectIdRequired",
            "aasRegex",
            "aasOpbouw",
            "aasVoorbeeld",
            "omschrijvingTemplate",
            "omschrijvingUitleg",
            "omschrijvingVoorbeeld",
            "row",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 9);
    }

    #[test]
    fn test_rule_record_json_values() {
        let value = serde_json::to_value(sample_rule()).unwrap();

        assert_eq!(value["iri"], "https://dds.schiphol.nl/asset/runway");
        assert_eq!(value["objectIdRequired"], true);
        assert_eq!(value["row"], 2);
    }

    #[test]
    fn test_rule_set_serializes_two_fields() {
        let mut rule_set = RuleSet::new("1.4");
        rule_set.add_rule(sample_rule());
        rule_set.skipped_rows = 3;
        rule_set.add_warning("Row 5: aasRegex does not compile");

        let value = serde_json::to_value(&rule_set).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 2);
        assert_eq!(value["latestRuleVersion"], "1.4");
        assert_eq!(value["rules"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_rule_set_new() {
        let rule_set = RuleSet::new("v2.1");

        assert_eq!(rule_set.latest_rule_version, "v2.1");
        assert!(rule_set.rules.is_empty());
        assert_eq!(rule_set.skipped_rows, 0);
        assert!(rule_set.warnings.is_empty());
    }

    #[test]
    fn test_rule_set_add_rule_and_warning() {
        let mut rule_set = RuleSet::new("");

        rule_set.add_rule(sample_rule());
        rule_set.add_warning("test warning");

        assert_eq!(rule_set.rules.len(), 1);
        assert_eq!(rule_set.warnings, vec!["test warning".to_string()]);
    }
}
