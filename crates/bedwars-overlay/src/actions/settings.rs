//! Settings form actions

#[derive(Debug, Clone)]
pub enum SettingsAction {
    /// Open the form with the current config
    Open,
    /// Character typed into the focused text field
    Char(char),
    Backspace,
    NextField,
    PrevField,
    /// Flip the focused toggle
    Toggle,
    /// Apply the edits and close
    Confirm,
    /// Discard the edits and close
    Cancel,
}
