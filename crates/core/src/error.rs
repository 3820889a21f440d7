/// Failure modes of a tool call.
///
/// `Shape` and `UserInput` are caller mistakes and are reported back as a
/// rejected tool result. `NotFound` means the tool name is not registered.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    Shape(String),

    #[error("{0}")]
    UserInput(String),
}

impl ToolError {
    pub fn user(message: impl Into<String>) -> Self {
        ToolError::UserInput(message.into())
    }

    pub fn shape(message: impl Into<String>) -> Self {
        ToolError::Shape(message.into())
    }

    /// True for errors caused by the arguments rather than the tool name.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ToolError::Shape(_) | ToolError::UserInput(_))
    }
}
