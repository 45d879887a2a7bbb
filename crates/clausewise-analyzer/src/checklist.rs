//! "Before you sign" checklist.

use clausewise_core::RiskLevel;
use regex::Regex;

use crate::document::Document;
use crate::patterns::{PatternSet, compile, first_capture};
use crate::rules::{
    CHECKLIST_FALLBACK_ITEMS, CHECKLIST_HIGH_RISK_ITEM, CHECKLIST_KEEP_COPY_ITEM,
    CHECKLIST_MAX_ITEMS, CHECKLIST_RULES, ChecklistItem, JURISDICTION_PATTERN,
};

pub struct ChecklistBuilder {
    rules: Vec<(PatternSet, ChecklistItem)>,
    jurisdiction: Regex,
}

impl ChecklistBuilder {
    pub fn new() -> Self {
        Self {
            rules: CHECKLIST_RULES
                .iter()
                .map(|(patterns, item)| (PatternSet::new(patterns), *item))
                .collect(),
            jurisdiction: compile(JURISDICTION_PATTERN),
        }
    }

    /// Ordered checklist of at most seven items, always ending in the
    /// keep-a-copy reminder unless truncated away.
    pub fn build(&self, doc: &Document, risk: RiskLevel) -> Vec<String> {
        let mut items: Vec<String> = Vec::new();

        for (set, item) in &self.rules {
            if !set.is_match(doc.lower()) {
                continue;
            }
            match item {
                ChecklistItem::Fixed(text) => items.push(text.to_string()),
                ChecklistItem::Jurisdiction => {
                    if let Some(place) = first_capture(&self.jurisdiction, doc.text(), &[2]) {
                        items.push(format!(
                            "Disputes will be handled under {place} law — check if this affects you."
                        ));
                    }
                }
            }
        }

        if risk == RiskLevel::High {
            items.push(CHECKLIST_HIGH_RISK_ITEM.to_string());
        }
        if items.is_empty() {
            items.extend(CHECKLIST_FALLBACK_ITEMS.iter().map(|s| s.to_string()));
        }
        items.push(CHECKLIST_KEEP_COPY_ITEM.to_string());
        items.truncate(CHECKLIST_MAX_ITEMS);
        items
    }
}

impl Default for ChecklistBuilder {
    fn default() -> Self {
        Self::new()
    }
}
