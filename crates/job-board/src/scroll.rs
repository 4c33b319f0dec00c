use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

/// Scroll offsets remembered by the browser for history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SavedPosition {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollTarget {
    /// Scroll to the element matching the fragment selector.
    Element {
        selector: String,
        behavior: ScrollBehavior,
    },
    /// Restore the exact position saved for back/forward navigation.
    Restore(SavedPosition),
    Top {
        top: f64,
        behavior: ScrollBehavior,
    },
}

/// Decide where the page lands after a navigation.
///
/// A fragment wins over a saved position, which wins over the top of the page.
/// `""` and a bare `"#"` count as no fragment.
pub fn scroll_behavior(hash: Option<&str>, saved: Option<SavedPosition>) -> ScrollTarget {
    if let Some(selector) = hash.filter(|h| !h.is_empty() && *h != "#") {
        return ScrollTarget::Element {
            selector: selector.to_string(),
            behavior: ScrollBehavior::Smooth,
        };
    }

    if let Some(position) = saved {
        return ScrollTarget::Restore(position);
    }

    ScrollTarget::Top {
        top: 0.0,
        behavior: ScrollBehavior::Smooth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAVED: SavedPosition = SavedPosition {
        left: 12.0,
        top: 640.5,
    };

    #[test]
    fn fragment_wins_over_saved_position() {
        assert_eq!(
            scroll_behavior(Some("#requirements"), Some(SAVED)),
            ScrollTarget::Element {
                selector: "#requirements".to_string(),
                behavior: ScrollBehavior::Smooth,
            }
        );
    }

    #[test]
    fn saved_position_restored_exactly() {
        assert_eq!(scroll_behavior(None, Some(SAVED)), ScrollTarget::Restore(SAVED));
        assert_eq!(scroll_behavior(Some(""), Some(SAVED)), ScrollTarget::Restore(SAVED));
    }

    #[test]
    fn defaults_to_smooth_top() {
        let top = ScrollTarget::Top {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
        };
        assert_eq!(scroll_behavior(None, None), top);
        assert_eq!(scroll_behavior(Some("#"), None), top);
    }

    #[test]
    fn serializes_tagged_targets() {
        let value = serde_json::to_value(scroll_behavior(None, Some(SAVED))).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "kind": "restore", "left": 12.0, "top": 640.5 })
        );

        let value = serde_json::to_value(scroll_behavior(Some("#faq"), None)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "kind": "element", "selector": "#faq", "behavior": "smooth" })
        );
    }
}
