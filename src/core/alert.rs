use crate::models::{Alert, AlertType, Assessment, CandidateMatch};

const BLOCK_SUGGESTIONS: [&str; 3] = [
    "Change the event title to make it unique",
    "Pick a different date or location",
    "Add a distinguishing detail such as an edition, audience or theme",
];

const WARN_SUGGESTIONS: [&str; 3] = [
    "Review the similar events listed below",
    "Make sure you are not creating a duplicate",
    "Consider editing an existing event instead",
];

/// Turn the matches of a duplicate check into a user-facing alert
///
/// Expects `matches` in result order, so the first entry is the closest one.
pub fn format_alert(matches: &[CandidateMatch]) -> Alert {
    let Some(top) = matches.first() else {
        return Alert {
            alert_type: AlertType::Info,
            title: "No similar events found".to_string(),
            message: "No existing events look like this one.".to_string(),
            suggestions: Vec::new(),
        };
    };

    if matches.iter().any(|m| m.assessment == Assessment::Block) {
        return Alert {
            alert_type: AlertType::Error,
            title: "Duplicate Event Detected".to_string(),
            message: format!(
                "This event looks like a duplicate of \"{}\". Please make it distinct before creating it.",
                top.title
            ),
            suggestions: to_strings(&BLOCK_SUGGESTIONS),
        };
    }

    if matches.iter().any(|m| m.assessment == Assessment::Warn) {
        let count = matches.len();
        return Alert {
            alert_type: AlertType::Warning,
            title: "Similar Events Found".to_string(),
            message: format!(
                "Found {} similar event{}. Please review before creating.",
                count,
                if count == 1 { "" } else { "s" }
            ),
            suggestions: to_strings(&WARN_SUGGESTIONS),
        };
    }

    Alert {
        alert_type: AlertType::Info,
        title: "Low Risk".to_string(),
        message: "Some related events exist, but none look like duplicates.".to_string(),
        suggestions: Vec::new(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, title: &str, similarity: f64, assessment: Assessment) -> CandidateMatch {
        CandidateMatch {
            event_id: id.to_string(),
            title: title.to_string(),
            similarity,
            assessment,
        }
    }

    #[test]
    fn test_no_matches() {
        let alert = format_alert(&[]);
        assert_eq!(alert.alert_type, AlertType::Info);
        assert_eq!(alert.title, "No similar events found");
        assert!(alert.suggestions.is_empty());
    }

    #[test]
    fn test_block_alert_names_top_match() {
        let matches = vec![
            candidate("1", "Rust Meetup Berlin", 0.95, Assessment::Block),
            candidate("2", "Rust Meetup", 0.9, Assessment::Block),
        ];
        let alert = format_alert(&matches);

        assert_eq!(alert.alert_type, AlertType::Error);
        assert_eq!(alert.title, "Duplicate Event Detected");
        assert!(alert.message.contains("\"Rust Meetup Berlin\""));
        assert_eq!(alert.suggestions.len(), 3);
    }

    #[test]
    fn test_warn_alert_counts_matches() {
        let matches = vec![
            candidate("1", "Tech Talk", 0.7, Assessment::Warn),
            candidate("2", "Tech Walk", 0.4, Assessment::LowRisk),
        ];
        let alert = format_alert(&matches);

        assert_eq!(alert.alert_type, AlertType::Warning);
        assert_eq!(alert.title, "Similar Events Found");
        assert!(alert.message.contains("2 similar events"));
        assert_eq!(alert.suggestions.len(), 3);

        let single = format_alert(&matches[..1]);
        assert!(single.message.contains("1 similar event."));
    }

    #[test]
    fn test_low_risk_alert() {
        let matches = vec![candidate("1", "Gala Dinner", 0.2, Assessment::LowRisk)];
        let alert = format_alert(&matches);

        assert_eq!(alert.alert_type, AlertType::Info);
        assert_eq!(alert.title, "Low Risk");
        assert!(alert.suggestions.is_empty());
    }
}
