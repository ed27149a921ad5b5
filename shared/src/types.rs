use serde::Serialize;
use std::str::FromStr;

// ============================================================================
// Source Types
// ============================================================================

/// One cell of an authored row: its text and the node it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<C> {
    pub text: String,
    pub node: C,
}

impl<C> Cell<C> {
    pub fn new(text: impl Into<String>, node: C) -> Self {
        Self {
            text: text.into(),
            node,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row<C> {
    pub cells: Vec<Cell<C>>,
}

impl<C> Row<C> {
    pub fn new(cells: Vec<Cell<C>>) -> Self {
        Self { cells }
    }

    /// Splits the row into its trimmed label and its content node.
    ///
    /// Returns `None` for rows with fewer than two cells. Cells after the
    /// second are ignored.
    pub fn into_parts(self) -> Option<(String, C)> {
        if self.cells.len() < 2 {
            return None;
        }
        let mut cells = self.cells.into_iter();
        let label = cells.next()?.text.trim().to_string();
        let content = cells.next()?.node;
        Some((label, content))
    }
}

// ============================================================================
// Item Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AccordionItem<C> {
    /// Position among built items, used to address messages.
    pub position: usize,
    /// One-based number of the source row this item was built from.
    pub number: usize,
    pub label: String,
    pub content: C,
}

impl<C> AccordionItem<C> {
    /// Label shown in the header, e.g. `"01 Shipping"`.
    pub fn display_label(&self) -> String {
        format!("{:02} {}", self.number, self.label)
    }

    pub fn panel_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.number - 1)
    }
}

/// Builds items from rows in source order, skipping rows that are too short.
pub fn collect_items<C>(rows: impl IntoIterator<Item = Row<C>>) -> Vec<AccordionItem<C>> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(source_index, row)| {
            row.into_parts()
                .map(|(label, content)| (source_index, label, content))
        })
        .enumerate()
        .map(|(position, (source_index, label, content))| AccordionItem {
            position,
            number: source_index + 1,
            label,
            content,
        })
        .collect()
}

// ============================================================================
// State Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    #[default]
    Closed,
    Open,
}

impl ItemState {
    pub fn from_open(open: bool) -> Self {
        if open {
            ItemState::Open
        } else {
            ItemState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ItemState::Open)
    }
}

/// Height applied to a content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelHeight {
    #[default]
    Collapsed,
    /// Explicit pixel height, used as a transition endpoint.
    Fixed(i32),
    /// Intrinsic sizing once an opening transition has settled.
    Auto,
}

impl PanelHeight {
    pub fn css_value(&self) -> String {
        match self {
            PanelHeight::Collapsed => "0".to_string(),
            PanelHeight::Fixed(px) => format!("{}px", px),
            PanelHeight::Auto => "auto".to_string(),
        }
    }
}

/// Keys that activate a header like a click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
}

impl FromStr for ActivationKey {
    type Err = ();

    /// Parses a `KeyboardEvent.key` value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enter" => Ok(ActivationKey::Enter),
            " " => Ok(ActivationKey::Space),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
