use super::view_layout::Styles;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{List, ListItem, Paragraph},
};

/// One display line. Rows with an `item` index are selectable; the rest (group headers)
/// are decoration.
#[derive(Clone, Debug)]
pub struct Row {
    pub line: Line<'static>,
    pub item: Option<usize>,
}

impl Row {
    pub fn header(line: Line<'static>) -> Self {
        Self { line, item: None }
    }

    pub fn item(index: usize, line: Line<'static>) -> Self {
        Self {
            line,
            item: Some(index),
        }
    }
}

/// Scrolling window over a list of rows that keeps the selected item visible.
pub struct ListViewer {
    pub rows: Vec<Row>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub empty_message: String,
}

impl ListViewer {
    pub fn new(empty_message: String) -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            empty_message,
        }
    }

    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        if self.scroll_offset >= self.rows.len() {
            self.scroll_offset = 0;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub fn item_count(&self) -> usize {
        self.rows.iter().filter(|r| r.item.is_some()).count()
    }

    fn selected_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.item == Some(self.selected_index))
    }

    pub fn adjust_scroll_offset(&mut self, visible_count: usize) {
        if visible_count == 0 {
            return;
        }
        let Some(selected) = self.selected_row() else {
            return;
        };
        // Keep the group header above the first item of a group in view
        let top = if selected > 0 && self.rows[selected - 1].item.is_none() {
            selected - 1
        } else {
            selected
        };

        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if selected >= self.scroll_offset + visible_count {
            self.scroll_offset = selected + 1 - visible_count;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.item_count() == 0 {
            let empty = Paragraph::new(self.empty_message.clone()).style(Styles::dimmed());
            f.render_widget(empty, area);
            return;
        }

        let visible_count = area.height as usize;
        self.adjust_scroll_offset(visible_count);

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .skip(self.scroll_offset)
            .take(visible_count)
            .map(|row| {
                let item = ListItem::new(row.line.clone());
                if row.item == Some(self.selected_index) {
                    item.style(Styles::selected())
                } else {
                    item
                }
            })
            .collect();

        f.render_widget(List::new(items), area);
    }
}
