//! Rule model for WebKit content-blocker lists.
//!
//! These types serialize to the JSON rule format consumed by
//! `WKContentRuleListStore`: an array of objects, each holding a `trigger`
//! (URL pattern plus optional domain scope) and an `action`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Trigger
// =============================================================================

/// Condition portion of a content-blocker rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Regex-style pattern matched against the full request URL.
    #[serde(rename = "url-filter")]
    pub url_filter: String,

    /// Domains the rule is restricted to. `None` means every domain.
    #[serde(rename = "if-domain", default, skip_serializing_if = "Option::is_none")]
    pub if_domain: Option<Vec<String>>,

    /// Domains the rule is suppressed on. WebKit rejects triggers carrying
    /// both `if-domain` and `unless-domain`.
    #[serde(rename = "unless-domain", default, skip_serializing_if = "Option::is_none")]
    pub unless_domain: Option<Vec<String>>,
}

impl Trigger {
    /// Pattern that matches every URL.
    pub const MATCH_ALL: &'static str = ".*";

    /// Trigger that fires on every request regardless of domain.
    pub fn match_all() -> Self {
        Self {
            url_filter: Self::MATCH_ALL.to_string(),
            if_domain: None,
            unless_domain: None,
        }
    }

    /// Trigger that fires on every request from the given domains.
    pub fn on_domains(domains: Vec<String>) -> Self {
        Self {
            url_filter: Self::MATCH_ALL.to_string(),
            if_domain: Some(domains),
            unless_domain: None,
        }
    }

    /// Trigger that fires on every request except from the given domains.
    pub fn except_domains(domains: Vec<String>) -> Self {
        Self {
            url_filter: Self::MATCH_ALL.to_string(),
            if_domain: None,
            unless_domain: Some(domains),
        }
    }

    /// Trigger matching a URL pattern on any domain.
    pub fn url_pattern(url_filter: String) -> Self {
        Self {
            url_filter,
            if_domain: None,
            unless_domain: None,
        }
    }
}

// =============================================================================
// Action
// =============================================================================

/// Effect applied when a trigger matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    /// Cancel the network request.
    Block,
    /// Hide page elements matched by the CSS selector.
    CssDisplayNone {
        /// Selector carried verbatim from the source rule.
        selector: String,
    },
}

// =============================================================================
// Rule / RuleSet
// =============================================================================

/// One trigger/action pair. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub trigger: Trigger,
    pub action: Action,
}

/// Insertion-ordered rule collection for one category.
///
/// Grows by append during aggregation and serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// Filter-list category. Each category aggregates its own sources and
/// produces one independent output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ads,
    Privacy,
    Annoyance,
    Unbreak,
}

impl Category {
    /// Every category, in output order.
    pub const ALL: [Category; 4] = [
        Category::Ads,
        Category::Privacy,
        Category::Annoyance,
        Category::Unbreak,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ads => "ads",
            Category::Privacy => "privacy",
            Category::Annoyance => "annoyance",
            Category::Unbreak => "unbreak",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ads" => Ok(Category::Ads),
            "privacy" => Ok(Category::Privacy),
            "annoyance" => Ok(Category::Annoyance),
            "unbreak" => Ok(Category::Unbreak),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_rule() -> Rule {
        Rule {
            trigger: Trigger::on_domains(vec!["example.com".to_string()]),
            action: Action::Block,
        }
    }

    fn hide_rule() -> Rule {
        Rule {
            trigger: Trigger::match_all(),
            action: Action::CssDisplayNone {
                selector: ".ad-banner".to_string(),
            },
        }
    }

    #[test]
    fn test_block_rule_json_shape() {
        let json = serde_json::to_value(block_rule()).unwrap();
        assert_eq!(json["trigger"]["url-filter"], ".*");
        assert_eq!(json["trigger"]["if-domain"][0], "example.com");
        assert_eq!(json["action"]["type"], "block");
        assert!(json["action"].get("selector").is_none());
    }

    #[test]
    fn test_hide_rule_json_shape() {
        let json = serde_json::to_value(hide_rule()).unwrap();
        assert_eq!(json["trigger"]["url-filter"], ".*");
        assert_eq!(json["action"]["type"], "css-display-none");
        assert_eq!(json["action"]["selector"], ".ad-banner");
    }

    #[test]
    fn test_absent_domain_keys_are_omitted() {
        let json = serde_json::to_value(hide_rule()).unwrap();
        assert!(json["trigger"].get("if-domain").is_none());
        assert!(json["trigger"].get("unless-domain").is_none());
    }

    #[test]
    fn test_unless_domain_serializes() {
        let trigger = Trigger::except_domains(vec!["example.com".to_string()]);
        let json = serde_json::to_value(&trigger).unwrap();
        assert_eq!(json["unless-domain"][0], "example.com");
        assert!(json.get("if-domain").is_none());
    }

    #[test]
    fn test_rule_set_serializes_as_array() {
        let set: RuleSet = vec![block_rule(), hide_rule()].into_iter().collect();
        let json = serde_json::to_value(&set).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["action"]["type"], "block");
    }

    #[test]
    fn test_rule_set_round_trip() {
        let set: RuleSet = vec![block_rule(), hide_rule()].into_iter().collect();
        let json = serde_json::to_string_pretty(&set).unwrap();
        let back: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);
    }

    #[test]
    fn test_empty_rule_set_round_trip() {
        let set = RuleSet::new();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[]");
        let back: RuleSet = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_category_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("adz".parse::<Category>().is_err());
    }
}
