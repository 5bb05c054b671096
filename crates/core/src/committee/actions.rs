/// Actions dispatched to stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// The committee list on the server changed.
    CommitteesChanged,
    /// The signed-in advisor changed.
    UserChanged,
    /// An action with no dedicated variant, by name.
    Custom(String),
}

impl StoreAction {
    /// Upper snake case name of the action.
    pub fn action_type(&self) -> &str {
        match self {
            StoreAction::CommitteesChanged => "COMMITTEES_CHANGED",
            StoreAction::UserChanged => "USER_CHANGED",
            StoreAction::Custom(name) => name,
        }
    }
}
