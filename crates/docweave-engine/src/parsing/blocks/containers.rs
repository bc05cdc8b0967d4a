/// One open list level: the indentation its items use and their marker type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    pub indent: usize,
    pub ordered: bool,
}

/// Ancestry of currently open lists, used to turn raw indentation into a
/// logical nesting level.
#[derive(Debug, Default, Clone)]
pub struct ListStack(Vec<ListFrame>);

impl ListStack {
    /// Places an item at `indent` and returns its zero-based level.
    ///
    /// Frames indented at least as deep as the item are closed; the level is
    /// the number of frames left, then the item opens a frame of its own.
    /// Indentation `0, 2, 4, 2, 0` gives levels `0, 1, 2, 1, 0`.
    pub fn place(&mut self, indent: usize, ordered: bool) -> usize {
        while self.0.last().is_some_and(|f| f.indent >= indent) {
            self.0.pop();
        }
        let level = self.0.len();
        self.0.push(ListFrame { indent, ordered });
        level
    }

    pub fn reset(&mut self) {
        self.0.clear();
    }
}
