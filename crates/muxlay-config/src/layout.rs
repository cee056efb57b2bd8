//! Layout document types.
//!
//! A layout describes one tmux session: its name and an ordered list of
//! windows, each with an optional chain of splits. These types only carry
//! data; rule checking happens in `muxlay-core`'s validation module.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level layout document.
///
/// `windows` stays an `Option` so a missing list can be told apart from an
/// empty one and both rejected by validation instead of defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLayout {
    #[serde(rename = "session")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<Vec<WindowLayout>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<Split>,
}

/// One node of a window's split chain.
///
/// Each split cuts the pane created by its parent, so the chain never
/// branches: a window with a chain of depth N ends up with N + 1 panes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Split {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(rename = "split", default, skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<Split>>,
}

/// Direction of the cut line.
///
/// `Vertical` cuts top to bottom and yields a left/right pair; `Horizontal`
/// yields a top/bottom pair. Unknown strings deserialize into `Unrecognized`
/// so the validator can report them with the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Orientation {
    Horizontal,
    Vertical,
    Unrecognized(String),
}

impl Orientation {
    pub fn as_str(&self) -> &str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Orientation::Unrecognized(_))
    }
}

impl From<String> for Orientation {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "horizontal" => Orientation::Horizontal,
            "vertical" => Orientation::Vertical,
            _ => Orientation::Unrecognized(raw),
        }
    }
}

impl From<Orientation> for String {
    fn from(orientation: Orientation) -> Self {
        orientation.as_str().to_string()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SessionLayout {
    /// The layout used when no layout file is given.
    pub fn default_layout() -> Self {
        Self {
            name: "default".to_string(),
            windows: Some(vec![
                WindowLayout {
                    name: Some("window1".to_string()),
                    process: Some("vim".to_string()),
                    split: Some(Split {
                        orientation: Some(Orientation::Vertical),
                        percentage: Some(50.0),
                        child: Some(Box::new(Split {
                            orientation: Some(Orientation::Horizontal),
                            percentage: Some(20.0),
                            child: None,
                        })),
                    }),
                },
                WindowLayout {
                    name: Some("window2".to_string()),
                    process: None,
                    split: Some(Split {
                        orientation: Some(Orientation::Horizontal),
                        percentage: Some(30.0),
                        child: None,
                    }),
                },
            ]),
        }
    }

    /// Windows in declaration order; empty when the list is missing.
    pub fn windows(&self) -> &[WindowLayout] {
        self.windows.as_deref().unwrap_or(&[])
    }

    /// Total panes the layout produces across all windows.
    pub fn pane_count(&self) -> usize {
        self.windows().iter().map(WindowLayout::pane_count).sum()
    }
}

impl WindowLayout {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The process to launch, or `None` for the default shell.
    pub fn process(&self) -> Option<&str> {
        self.process.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// Iterate the split chain from the root down.
    pub fn splits(&self) -> SplitChain<'_> {
        SplitChain {
            next: self.split.as_ref(),
        }
    }

    pub fn pane_count(&self) -> usize {
        1 + self.splits().count()
    }
}

/// Iterator over a split chain. Walks iteratively, so chain depth is
/// bounded only by the document.
pub struct SplitChain<'a> {
    next: Option<&'a Split>,
}

impl<'a> Iterator for SplitChain<'a> {
    type Item = &'a Split;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.child.as_deref();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_layout() {
        let layout: SessionLayout = serde_json::from_str(
            r#"{"session":"work","windows":[{"name":"w1","split":{"type":"vertical"}}]}"#,
        )
        .unwrap();

        assert_eq!(layout.name, "work");
        assert_eq!(layout.windows().len(), 1);
        let window = &layout.windows()[0];
        assert_eq!(window.name(), Some("w1"));
        assert_eq!(window.process(), None);
        let split = window.split.as_ref().unwrap();
        assert_eq!(split.orientation, Some(Orientation::Vertical));
        assert!(split.percentage.is_none());
        assert!(split.child.is_none());
    }

    #[test]
    fn test_missing_windows_is_none_not_empty() {
        let layout: SessionLayout = serde_json::from_str(r#"{"session":"work"}"#).unwrap();
        assert!(layout.windows.is_none());
        assert!(layout.windows().is_empty());
    }

    #[test]
    fn test_missing_session_fails_to_parse() {
        let result: Result<SessionLayout, _> = serde_json::from_str(r#"{"windows":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_orientation_is_preserved() {
        let split: Split = serde_json::from_str(r#"{"type":"diagonal"}"#).unwrap();
        assert_eq!(
            split.orientation,
            Some(Orientation::Unrecognized("diagonal".to_string()))
        );
        assert!(!split.orientation.unwrap().is_recognized());
    }

    #[test]
    fn test_orientation_is_case_sensitive() {
        assert_eq!(
            Orientation::from("Vertical".to_string()),
            Orientation::Unrecognized("Vertical".to_string())
        );
    }

    #[test]
    fn test_nested_splits_and_pane_count() {
        let layout = SessionLayout::default_layout();
        let first = &layout.windows()[0];
        let orientations: Vec<_> = first
            .splits()
            .map(|s| s.orientation.clone().unwrap())
            .collect();
        assert_eq!(
            orientations,
            vec![Orientation::Vertical, Orientation::Horizontal]
        );
        assert_eq!(first.pane_count(), 3);
        assert_eq!(layout.windows()[1].pane_count(), 2);
        assert_eq!(layout.pane_count(), 5);
    }

    #[test]
    fn test_window_without_split_has_one_pane() {
        let window = WindowLayout {
            name: Some("solo".to_string()),
            ..Default::default()
        };
        assert_eq!(window.pane_count(), 1);
        assert_eq!(window.splits().count(), 0);
    }

    #[test]
    fn test_blank_process_means_default_shell() {
        let window = WindowLayout {
            name: Some("w".to_string()),
            process: Some("   ".to_string()),
            split: None,
        };
        assert_eq!(window.process(), None);
    }

    #[test]
    fn test_deep_chain_walks_without_recursion() {
        let mut split = Split {
            orientation: Some(Orientation::Horizontal),
            ..Default::default()
        };
        for _ in 0..9_999 {
            split = Split {
                orientation: Some(Orientation::Vertical),
                percentage: None,
                child: Some(Box::new(split)),
            };
        }
        let window = WindowLayout {
            name: Some("deep".to_string()),
            process: None,
            split: Some(split),
        };
        assert_eq!(window.pane_count(), 10_000);
    }

    #[test]
    fn test_default_layout_serializes_with_document_keys() {
        let json = serde_json::to_value(SessionLayout::default_layout()).unwrap();
        assert_eq!(json["session"], "default");
        assert_eq!(json["windows"][0]["split"]["type"], "vertical");
        assert_eq!(json["windows"][0]["split"]["split"]["type"], "horizontal");
        assert_eq!(json["windows"][0]["split"]["split"]["percentage"], 20.0);
        assert!(json["windows"][1].get("process").is_none());
    }
}
