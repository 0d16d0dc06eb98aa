// src/progress.rs
/// Lightweight progress reporting for long-running scrapes.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of chapters to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one chapter has been written out.
    fn chapter_done(&mut self, _book: &str, _chapter: u32) {}

    /// Called when one chapter was abandoned (fetch or extraction failed).
    fn chapter_failed(&mut self, _book: &str, _chapter: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
