use crate::shared::frame::Frame;

/// What the viewer asked for since the last poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayCommand {
    /// Print the current feedback color to the console.
    PrintFeedback,
    Quit,
}

/// Shows frames and reports viewer input.
pub trait DisplaySink {
    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Commands received since the last poll, in arrival order.
    /// Non-blocking; input that maps to no command is dropped.
    fn poll_commands(&mut self) -> Vec<DisplayCommand>;

    /// False once the viewer closes the window. Closing counts as a
    /// quit request.
    fn is_open(&self) -> bool;
}
