//! Per-line translation of Adblock Plus syntax into content-blocker rules.
//!
//! Only the two dominant rule families are translated: element hiding
//! (`domains##selector`) and domain-anchored network blocking
//! (`||pattern`). Exception rules (`@@`), cosmetic variants (`#@#`, `#?#`),
//! and option-qualified behavior are outside the supported subset and come
//! back as [`ParseOutcome::Unsupported`].

use cb_core::domain::normalize;
use cb_core::types::{Action, Rule, Trigger};

/// Separator between the domain list and the selector of a hiding rule.
const ELEMENT_HIDING_SEPARATOR: &str = "##";

/// Marker anchoring a network pattern to a domain boundary.
const DOMAIN_ANCHOR: &str = "||";

/// Outcome of examining one line of filter-list text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Blank line, `!` comment, or `[...]` metadata header.
    NoRule,
    /// Recognized syntax that does not translate to the target format.
    Unsupported,
    /// A translated rule.
    Parsed(Rule),
}

/// Translate one line of filter-list text.
pub fn parse_line(line: &str) -> ParseOutcome {
    let line = line.trim();
    if line.is_empty() || line.starts_with('!') || line.starts_with('[') {
        return ParseOutcome::NoRule;
    }

    if let Some((domains, selector)) = line.split_once(ELEMENT_HIDING_SEPARATOR) {
        return ParseOutcome::Parsed(element_hiding_rule(domains, selector));
    }

    if let Some(pattern) = line.strip_prefix(DOMAIN_ANCHOR) {
        return network_rule(pattern);
    }

    ParseOutcome::Unsupported
}

/// Translate a whole list, keeping parsed rules in line order.
pub fn parse_list(text: &str) -> Vec<Rule> {
    text.lines()
        .filter_map(|line| match parse_line(line) {
            ParseOutcome::Parsed(rule) => Some(rule),
            _ => None,
        })
        .collect()
}

/// One entry of an element-hiding domain list, split from its `~` marker.
struct DomainSpec<'a> {
    name: &'a str,
    excluded: bool,
}

impl<'a> DomainSpec<'a> {
    fn parse(entry: &'a str) -> Self {
        match entry.trim().strip_prefix('~') {
            Some(name) => Self {
                name,
                excluded: true,
            },
            None => Self {
                name: entry.trim(),
                excluded: false,
            },
        }
    }
}

/// Build a hiding rule from the text on either side of `##`.
///
/// Never fails: labels that do not normalize are dropped, and a rule whose
/// entire domain list was dropped degrades to domain-agnostic.
fn element_hiding_rule(domains: &str, selector: &str) -> Rule {
    let mut include = Vec::new();
    let mut exclude = Vec::new();

    if !domains.is_empty() {
        for spec in domains.split(',').map(DomainSpec::parse) {
            match normalize(spec.name) {
                Ok(domain) if spec.excluded => exclude.push(domain),
                Ok(domain) => include.push(domain),
                Err(err) => log::debug!("dropping domain {:?}: {err}", spec.name),
            }
        }
    }

    // A trigger cannot carry both if-domain and unless-domain, so
    // exclusions only survive when nothing was included.
    let trigger = if !include.is_empty() {
        if !exclude.is_empty() {
            log::debug!(
                "dropping {} excluded domain(s) shadowed by the include list",
                exclude.len()
            );
        }
        Trigger::on_domains(include)
    } else if !exclude.is_empty() {
        Trigger::except_domains(exclude)
    } else {
        Trigger::match_all()
    };

    Rule {
        trigger,
        action: Action::CssDisplayNone {
            selector: selector.to_string(),
        },
    }
}

/// Translate the remainder of a `||` network rule.
fn network_rule(pattern: &str) -> ParseOutcome {
    // Options after `$` qualify behavior the target format does not model.
    let pattern = match pattern.split_once('$') {
        Some((head, _options)) => head,
        None => pattern,
    };
    let pattern = pattern.replace('^', "");

    if !pattern.contains('/') && !pattern.contains('*') {
        // Bare domain: scope with if-domain instead of a URL pattern.
        return match normalize(&pattern) {
            Ok(domain) => ParseOutcome::Parsed(Rule {
                trigger: Trigger::on_domains(vec![domain]),
                action: Action::Block,
            }),
            Err(_) => ParseOutcome::Unsupported,
        };
    }

    // Escape dots before expanding `*`; the dots the expansion introduces
    // must stay meta.
    let body = pattern.replace('.', "\\.").replace('*', ".*");

    // WebKit's url-filter dialect has no alternation, and one bad pattern
    // fails compilation of the whole rule set.
    if body.contains('|') {
        return ParseOutcome::Unsupported;
    }

    ParseOutcome::Parsed(Rule {
        trigger: Trigger::url_pattern(format!(".*{body}.*")),
        action: Action::Block,
    })
}
