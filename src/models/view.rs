use clap::ValueEnum;

/// The three panels of the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    #[default]
    Tasks,
    Insights,
    Settings,
}

/// Navigation rail order: Insights sits left of Tasks, Settings right.
const NAV_ORDER: [View; 3] = [View::Insights, View::Tasks, View::Settings];

/// Direction of a horizontal swipe on the navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

/// Pure UI navigation state: the visible panel plus the independent
/// add-task input flag. Transitions are idempotent where re-entry would
/// be a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub view: View,
    pub input_active: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub fn new() -> Self {
        Self {
            view: View::Tasks,
            input_active: false,
        }
    }

    /// Switch to a panel. Re-selecting the current panel is a no-op.
    pub fn select(&mut self, view: View) {
        if self.view == view {
            return;
        }
        self.view = view;
    }

    /// Primary action: on Tasks the add-task input toggles, on the other
    /// panels the corresponding overlay is (re)opened.
    pub fn activate(&mut self) {
        match self.view {
            View::Tasks => self.toggle_input(),
            View::Insights | View::Settings => {}
        }
    }

    /// Toggle the add-task input. Opening it dismisses any overlay panel.
    pub fn toggle_input(&mut self) {
        if self.input_active {
            self.input_active = false;
        } else {
            self.view = View::Tasks;
            self.input_active = true;
        }
    }

    /// Close overlays and return to the task list.
    pub fn close(&mut self) {
        self.view = View::Tasks;
    }

    /// Move one step along the navigation rail, clamped at the ends.
    pub fn swipe(&mut self, dir: Swipe) {
        let index = NAV_ORDER
            .iter()
            .position(|v| *v == self.view)
            .unwrap_or(1);

        let target = match dir {
            // finger moving right reveals the panel to the left
            Swipe::Right if index > 0 => NAV_ORDER[index - 1],
            Swipe::Left if index + 1 < NAV_ORDER.len() => NAV_ORDER[index + 1],
            _ => return,
        };

        self.select(target);
    }
}
