// src/report/mod.rs
use crate::extractors::LookupOutcome;

/// Console report, one `- Field > value` line per field.
pub fn render_text(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::NotFound { username } => format!("{} does not exist.", username),
        LookupOutcome::Found(record) => [
            format!("- Name > {} (@{})", record.name, record.username),
            format!("- Bio > {}", record.bio),
            format!("- Followers > {}", record.followers),
            format!("- Following > {}", record.following),
            format!("- Posts > {}", record.posts),
            format!("- ID > {}", record.identifier),
        ]
        .join("\n"),
    }
}

/// Machine-readable report. Missing profiles serialize as `{"username", "exists": false}`.
pub fn render_json(outcome: &LookupOutcome) -> Result<String, serde_json::Error> {
    match outcome {
        LookupOutcome::Found(record) => serde_json::to_string_pretty(record),
        LookupOutcome::NotFound { username } => serde_json::to_string_pretty(&serde_json::json!({
            "username": username,
            "exists": false,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::ProfileRecord;

    fn found() -> LookupOutcome {
        LookupOutcome::Found(ProfileRecord {
            username: "janedoe".to_string(),
            name: "Jane doe".to_string(),
            bio: "Photographer".to_string(),
            followers: "1,234".to_string(),
            following: "56".to_string(),
            posts: "78".to_string(),
            identifier: "17841400000000000".to_string(),
            exists: true,
        })
    }

    #[test]
    fn test_text_report() {
        let expected = "- Name > Jane doe (@janedoe)\n\
                        - Bio > Photographer\n\
                        - Followers > 1,234\n\
                        - Following > 56\n\
                        - Posts > 78\n\
                        - ID > 17841400000000000";
        assert_eq!(render_text(&found()), expected);

        let missing = LookupOutcome::NotFound { username: "ghost".to_string() };
        assert_eq!(render_text(&missing), "ghost does not exist.");
    }

    #[test]
    fn test_json_report() {
        let value: serde_json::Value = serde_json::from_str(&render_json(&found()).unwrap()).unwrap();
        assert_eq!(value["name"], "Jane doe");
        assert_eq!(value["followers"], "1,234");
        assert_eq!(value["exists"], true);

        let missing = LookupOutcome::NotFound { username: "ghost".to_string() };
        let value: serde_json::Value = serde_json::from_str(&render_json(&missing).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "username": "ghost", "exists": false }));
    }
}
