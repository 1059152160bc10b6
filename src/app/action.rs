#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Show a transient message to the user.
    Notify(String),
    Quit,
}
