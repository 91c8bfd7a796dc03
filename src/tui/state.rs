/// UI-side state: which row is highlighted and whether a fetch is in flight.
/// The article list itself lives in the presenter.
#[derive(Debug, Clone)]
pub struct FeedView {
    pub selected: usize,
    pub refreshing: bool,
}

impl FeedView {
    pub fn new() -> Self {
        Self {
            selected: 0,
            refreshing: false,
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Pull the selection back in range after the list length changed.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for FeedView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_next_stops_at_last_row() {
        let mut view = FeedView::new();
        view.select_next(3);
        view.select_next(3);
        assert_eq!(view.selected, 2);
        view.select_next(3);
        assert_eq!(view.selected, 2);
    }

    #[test]
    fn test_select_next_on_empty_list_stays_at_zero() {
        let mut view = FeedView::new();
        view.select_next(0);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_select_previous_stops_at_zero() {
        let mut view = FeedView::new();
        view.select_previous();
        assert_eq!(view.selected, 0);
        view.select_next(5);
        view.select_previous();
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_select_first_and_last() {
        let mut view = FeedView::new();
        view.select_last(7);
        assert_eq!(view.selected, 6);
        view.select_first();
        assert_eq!(view.selected, 0);
        view.select_last(0);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut view = FeedView::new();
        view.select_last(20);
        assert_eq!(view.selected, 19);
        view.clamp_selection(5);
        assert_eq!(view.selected, 4);
        view.clamp_selection(0);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_clamp_keeps_valid_selection() {
        let mut view = FeedView::new();
        view.select_next(10);
        view.select_next(10);
        view.clamp_selection(10);
        assert_eq!(view.selected, 2);
    }
}
