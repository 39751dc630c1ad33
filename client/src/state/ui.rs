#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: theme and the collapsible navigation drawer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub drawer_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: false, drawer_open: true }
    }
}

impl UiState {
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }
}
