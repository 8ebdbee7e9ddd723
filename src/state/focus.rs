use crate::form::field::Field;

pub const SUBMIT_ID: &str = "submit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Input(Field),
    Submit,
}

impl FocusTarget {
    pub fn id(self) -> &'static str {
        match self {
            Self::Input(field) => field.name(),
            Self::Submit => SUBMIT_ID,
        }
    }
}

/// Focus ring over the four inputs and the submit button.
#[derive(Debug, Clone)]
pub struct FocusState {
    targets: Vec<FocusTarget>,
    index: usize,
}

impl Default for FocusState {
    fn default() -> Self {
        let mut targets: Vec<FocusTarget> = Field::ALL.into_iter().map(FocusTarget::Input).collect();
        targets.push(FocusTarget::Submit);
        Self { targets, index: 0 }
    }
}

impl FocusState {
    pub fn current(&self) -> FocusTarget {
        self.targets[self.index]
    }

    pub fn current_id(&self) -> &'static str {
        self.current().id()
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.targets.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.targets.len() - 1) % self.targets.len();
    }
}
