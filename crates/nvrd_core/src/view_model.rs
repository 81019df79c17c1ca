/// Everything the terminal needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReaderView {
    /// Lines inside the window, at most `height` of them.
    pub lines: Vec<String>,
    pub height: usize,
    pub cursor: usize,
    pub total: usize,
    /// Percentage of the chapter read, `100.0` when there is nothing to read.
    pub progress: f64,
    pub title: String,
    /// Loading, progress or error text replacing the position line.
    pub status: Option<String>,
    pub dirty: bool,
}
