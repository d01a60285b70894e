use super::App;

impl App {
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = self
            .selected_index()
            .map_or(0, |idx| (idx + 1).min(self.entries.len() - 1));
        self.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let previous = self.selected_index().map_or(0, |idx| idx.saturating_sub(1));
        self.select(Some(previous));
    }

    pub fn select_first(&mut self) {
        if !self.entries.is_empty() {
            self.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.entries.len().checked_sub(1) {
            self.select(Some(last));
        }
    }

    /// Moves the highlight and reloads the preview when it actually changed.
    pub(crate) fn select(&mut self, index: Option<usize>) {
        let index = index.filter(|&idx| idx < self.entries.len());
        if index == self.selected_index() && self.preview.is_some() == index.is_some() {
            return;
        }
        self.list_state.select(index);
        self.load_preview();
    }
}
