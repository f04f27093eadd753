// Page layout domain model - container / row / column tree
use super::card::Card;
use super::figure::Figure;
use crate::error::{DashboardError, Result};
use std::collections::HashSet;

pub const GRID_COLUMNS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Spans the whole row at every breakpoint.
    Full,
    /// Spans `n` of 12 grid columns from the `md` breakpoint up, full width below.
    Medium(u8),
}

impl ColumnWidth {
    pub fn span(&self) -> u8 {
        match self {
            ColumnWidth::Full => GRID_COLUMNS,
            ColumnWidth::Medium(n) => *n,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Heading(String),
    Card(Card),
    Graph { figure: Figure, height_px: u32 },
    Footer(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub width: ColumnWidth,
    pub node: Node,
}

impl Column {
    pub fn new(width: ColumnWidth, node: Node) -> Self {
        Self { width, node }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub columns: Vec<Column>,
    pub margin_bottom_px: Option<u32>,
}

impl Row {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            margin_bottom_px: None,
        }
    }

    pub fn with_margin_bottom(mut self, px: u32) -> Self {
        self.margin_bottom_px = Some(px);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub rows: Vec<Row>,
}

impl Page {
    pub fn new(title: &str, rows: Vec<Row>) -> Self {
        Self {
            title: title.to_string(),
            rows,
        }
    }

    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.nodes().filter_map(|node| match node {
            Node::Graph { figure, .. } => Some(figure),
            _ => None,
        })
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.nodes().filter_map(|node| match node {
            Node::Card(card) => Some(card),
            _ => None,
        })
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.rows
            .iter()
            .flat_map(|row| row.columns.iter().map(|col| &col.node))
    }

    /// Validates the grid and every card and figure the page contains.
    pub fn validate(&self) -> Result<()> {
        for (idx, row) in self.rows.iter().enumerate() {
            let mut total: u32 = 0;
            for column in &row.columns {
                let span = column.width.span();
                if span == 0 || span > GRID_COLUMNS {
                    return Err(DashboardError::InvalidLayout(format!(
                        "row {} has a column spanning {} of {} grid columns",
                        idx, span, GRID_COLUMNS
                    )));
                }
                total += span as u32;
            }
            if total > GRID_COLUMNS as u32 {
                return Err(DashboardError::InvalidLayout(format!(
                    "row {} spans {} grid columns, at most {} allowed",
                    idx, total, GRID_COLUMNS
                )));
            }
        }

        let mut ids = HashSet::new();
        for figure in self.figures() {
            figure.validate()?;
            if !ids.insert(figure.id.as_str()) {
                return Err(DashboardError::InvalidLayout(format!(
                    "duplicate figure id '{}'",
                    figure.id
                )));
            }
        }

        for card in self.cards() {
            card.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::ProgressColor;

    fn graph(id: &str) -> Node {
        Node::Graph {
            figure: Figure::gauge(id, "Gauge", 1.0, [0.0, 10.0], "red"),
            height_px: 400,
        }
    }

    #[test]
    fn test_figures_and_cards_in_document_order() {
        let card = Card::new("Header", "Headline", "Body", 40, ProgressColor::Info, "Note");
        let page = Page::new(
            "Test",
            vec![
                Row::new(vec![Column::new(ColumnWidth::Full, Node::Heading("Title".into()))]),
                Row::new(vec![
                    Column::new(ColumnWidth::Medium(6), graph("a")),
                    Column::new(ColumnWidth::Medium(6), Node::Card(card)),
                ]),
                Row::new(vec![Column::new(ColumnWidth::Medium(12), graph("b"))]),
            ],
        );

        let ids: Vec<&str> = page.figures().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(page.cards().count(), 1);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_overfull_row_is_rejected() {
        let page = Page::new(
            "Test",
            vec![Row::new(vec![
                Column::new(ColumnWidth::Medium(6), graph("a")),
                Column::new(ColumnWidth::Medium(7), graph("b")),
            ])],
        );
        assert!(matches!(page.validate(), Err(DashboardError::InvalidLayout(_))));
    }

    #[test]
    fn test_zero_width_column_is_rejected() {
        let page = Page::new(
            "Test",
            vec![Row::new(vec![Column::new(ColumnWidth::Medium(0), graph("a"))])],
        );
        assert!(page.validate().is_err());
    }

    #[test]
    fn test_duplicate_figure_ids_are_rejected() {
        let page = Page::new(
            "Test",
            vec![Row::new(vec![
                Column::new(ColumnWidth::Medium(6), graph("a")),
                Column::new(ColumnWidth::Medium(6), graph("a")),
            ])],
        );
        assert!(page.validate().is_err());
    }

    #[test]
    fn test_invalid_card_fails_page_validation() {
        let card = Card::new("Header", "Headline", "Body", 120, ProgressColor::Info, "Note");
        let page = Page::new(
            "Test",
            vec![Row::new(vec![Column::new(ColumnWidth::Full, Node::Card(card))])],
        );
        assert!(matches!(page.validate(), Err(DashboardError::InvalidCard { .. })));
    }
}
