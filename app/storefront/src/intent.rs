//! User intents posted to the dispatcher.

use std::collections::HashMap;

/// A user action, as a message to the dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Search-box submission.
    Search { text: String },
    /// Filter-form submission.
    Filter { fields: HashMap<String, String> },
    /// Show or hide the filter panel.
    ToggleFilter,
    /// Show or hide the chat panel.
    ToggleChat,
    /// Stop the dispatcher once in-flight queries settle.
    Shutdown,
}

impl Intent {
    /// The first-load action: a browse query through the normal pipeline.
    pub fn initial_browse() -> Self {
        Intent::Search {
            text: String::new(),
        }
    }

    /// Parse one line of terminal input.
    ///
    /// Plain text searches (blank text browses). `/filter k=v ...` submits
    /// form fields, `/filter` alone toggles the panel, `/chat` toggles the
    /// chat panel, `/quit` ends the session. Unknown commands yield `None`.
    pub fn parse_line(line: &str) -> Option<Intent> {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            return Some(Intent::Search {
                text: line.to_string(),
            });
        };

        let mut words = command.split_whitespace();
        match words.next() {
            Some("filter") => {
                let args: Vec<&str> = words.collect();
                if args.is_empty() {
                    Some(Intent::ToggleFilter)
                } else {
                    let fields = args
                        .iter()
                        .filter_map(|arg| arg.split_once('='))
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect();
                    Some(Intent::Filter { fields })
                }
            }
            Some("chat") => Some(Intent::ToggleChat),
            Some("quit") | Some("exit") => Some(Intent::Shutdown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_searches() {
        assert_eq!(
            Intent::parse_line("  x200  "),
            Some(Intent::Search {
                text: "x200".to_string()
            })
        );
    }

    #[test]
    fn test_blank_line_browses() {
        assert_eq!(
            Intent::parse_line("   "),
            Some(Intent::Search {
                text: String::new()
            })
        );
        assert_eq!(Intent::initial_browse(), Intent::parse_line("").unwrap());
    }

    #[test]
    fn test_filter_form_fields() {
        let intent = Intent::parse_line("/filter model=x200 price_max=500").unwrap();
        let Intent::Filter { fields } = intent else {
            panic!("expected a filter intent");
        };
        assert_eq!(fields.get("model").map(String::as_str), Some("x200"));
        assert_eq!(fields.get("price_max").map(String::as_str), Some("500"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_filter_ignores_malformed_pairs() {
        let intent = Intent::parse_line("/filter model=x200 bogus").unwrap();
        let Intent::Filter { fields } = intent else {
            panic!("expected a filter intent");
        };
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_bare_filter_toggles_panel() {
        assert_eq!(Intent::parse_line("/filter"), Some(Intent::ToggleFilter));
    }

    #[test]
    fn test_chat_and_quit() {
        assert_eq!(Intent::parse_line("/chat"), Some(Intent::ToggleChat));
        assert_eq!(Intent::parse_line("/quit"), Some(Intent::Shutdown));
        assert_eq!(Intent::parse_line("/exit"), Some(Intent::Shutdown));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(Intent::parse_line("/frobnicate"), None);
    }
}
