/// Ordered focus targets with wrap-around cycling in both directions.
#[derive(Debug, Clone)]
pub struct FocusRing<T> {
    targets: Vec<T>,
    index: usize,
}

impl<T: Copy + PartialEq> FocusRing<T> {
    /// `targets` must not be empty
    pub fn new(targets: Vec<T>) -> Self {
        assert!(!targets.is_empty(), "focus ring needs at least one target");
        Self { targets, index: 0 }
    }

    pub fn current(&self) -> T {
        self.targets[self.index]
    }

    pub fn is_focused(&self, target: T) -> bool {
        self.current() == target
    }

    pub fn next(&mut self) -> T {
        self.index = (self.index + 1) % self.targets.len();
        self.current()
    }

    pub fn previous(&mut self) -> T {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(self.targets.len() - 1);
        self.current()
    }
}
