//! Modal messages

/// Modal message
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Close the modal
    Close,
    /// Type a character into the location prompt
    Input(char),
    /// Delete the last character
    Backspace,
    /// Clear the prompt
    ClearInput,
    /// Confirm the prompt
    Submit,
}
