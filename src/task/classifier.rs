//! Rule-based suggestion of priority, estimate and tags
//!
//! Matching is plain substring containment on the lower-cased description,
//! so `"ui"` matches inside `"quick"` and `"by"` inside `"nearby"`. Keep it
//! that way: callers rely on suggestions being stable across releases.

use super::model::{Suggestion, Tag, TaskPriority};

const HIGH_PRIORITY_WORDS: &[&str] = &["urgent", "asap", "immediately", "today", "now", "critical"];

const MEDIUM_PRIORITY_WORDS: &[&str] = &["soon", "tomorrow", "by", "this week", "next"];

const BASE_ESTIMATE_MINUTES: u32 = 10;

/// Applied in order; every matching rule overwrites the previous estimate.
const ESTIMATE_RULES: &[(&[&str], u32)] = &[
    (&["read", "skim", "review"], 20),
    (
        &["implement", "build", "develop", "code", "refactor", "deploy"],
        120,
    ),
    (&["email", "reply", "call", "schedule"], 15),
];

const TAG_KEYWORDS: &[(Tag, &[&str])] = &[
    (Tag::Email, &["email", "reply", "mail"]),
    (
        Tag::Coding,
        &["code", "implement", "build", "bug", "feature", "refactor"],
    ),
    (Tag::Research, &["read", "research", "paper", "study"]),
    (Tag::Meeting, &["meeting", "call", "sync", "standup"]),
    (Tag::Design, &["design", "ux", "ui", "prototype"]),
    (
        Tag::Deploy,
        &[
            "deploy",
            "release",
            "ci",
            "cd",
            "sagemaker",
            "vertex",
            "aws",
            "gcp",
            "azure",
        ],
    ),
];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Suggest priority, estimate and tags for a task description.
///
/// Deterministic and case-insensitive. Callers are expected to reject empty
/// descriptions before getting here.
pub fn classify(text: &str) -> Suggestion {
    let text = text.to_lowercase();

    Suggestion {
        priority: priority_for(&text),
        est_minutes: estimate_for(&text),
        tags: tags_for(&text),
    }
}

fn priority_for(text: &str) -> TaskPriority {
    if contains_any(text, HIGH_PRIORITY_WORDS) {
        TaskPriority::High
    } else if contains_any(text, MEDIUM_PRIORITY_WORDS) {
        TaskPriority::Medium
    } else {
        TaskPriority::Low
    }
}

fn estimate_for(text: &str) -> u32 {
    ESTIMATE_RULES
        .iter()
        .fold(BASE_ESTIMATE_MINUTES, |minutes, (words, rule_minutes)| {
            if contains_any(text, words) {
                *rule_minutes
            } else {
                minutes
            }
        })
}

fn tags_for(text: &str) -> Vec<Tag> {
    let tags: Vec<Tag> = TAG_KEYWORDS
        .iter()
        .filter(|(_, words)| contains_any(text, words))
        .map(|(tag, _)| *tag)
        .collect();

    if tags.is_empty() {
        vec![Tag::General]
    } else {
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_deterministic() {
        let text = "Review the design prototype before Friday's standup";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_urgent_is_high_in_any_case() {
        assert_eq!(classify("URGENT: fix login").priority, TaskPriority::High);
        assert_eq!(classify("Urgent laundry").priority, TaskPriority::High);
    }

    #[test]
    fn test_read_report_tomorrow() {
        let s = classify("read the report tomorrow");
        assert_eq!(s.priority, TaskPriority::Medium);
        assert_eq!(s.est_minutes, 20);
        assert!(s.tags.contains(&Tag::Research));
    }

    #[test]
    fn test_deploy_feature_asap() {
        let s = classify("deploy the new feature asap");
        assert_eq!(s.priority, TaskPriority::High);
        assert_eq!(s.est_minutes, 120);
        assert_eq!(s.tags, vec![Tag::Coding, Tag::Deploy]);
    }

    #[test]
    fn test_no_keywords_defaults() {
        let s = classify("buy milk");
        assert_eq!(s.priority, TaskPriority::Low);
        assert_eq!(s.est_minutes, BASE_ESTIMATE_MINUTES);
        assert_eq!(s.tags, vec![Tag::General]);
    }

    #[test]
    fn test_high_tier_wins_over_medium() {
        assert_eq!(
            classify("finish it tomorrow or today").priority,
            TaskPriority::High
        );
        assert_eq!(
            classify("finish report by friday").priority,
            TaskPriority::Medium
        );
    }

    #[test]
    fn test_later_estimate_rules_override_earlier() {
        assert_eq!(classify("read then deploy").est_minutes, 120);
        assert_eq!(classify("review and refactor code then reply").est_minutes, 15);
        assert_eq!(classify("skim notes").est_minutes, 20);
    }

    #[test]
    fn test_multiple_tags_in_fixed_order() {
        let s = classify("Email the team about the sync meeting");
        assert_eq!(s.tags, vec![Tag::Email, Tag::Meeting]);
        assert_eq!(s.est_minutes, 15);
        assert_eq!(s.priority, TaskPriority::Low);
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        // "ui" inside "quick"
        assert_eq!(classify("quick fix").tags, vec![Tag::Design]);
    }
}
