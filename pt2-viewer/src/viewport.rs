/// Remembers the framebuffer size, to detect changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportTracker {
    width: u32,
    height: u32,
}

impl ViewportTracker {
    pub fn new(width: u32, height: u32) -> Self {
        ViewportTracker { width, height }
    }

    /// Returns the new size, if it differs from the last one.
    pub fn update(&mut self, width: u32, height: u32) -> Option<(u32, u32)> {
        if width == self.width && height == self.height {
            return None;
        }
        self.width = width;
        self.height = height;
        Some((width, height))
    }

    #[cfg(test)]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod test {
    use super::ViewportTracker;

    #[test]
    fn test_one_notification_per_change() {
        let mut tracker = ViewportTracker::new(800, 600);
        assert_eq!(tracker.update(800, 600), None);
        assert_eq!(tracker.update(1024, 600), Some((1024, 600)));
        assert_eq!(tracker.update(1024, 600), None);
        assert_eq!(tracker.update(1024, 700), Some((1024, 700)));
        assert_eq!(tracker.update(800, 600), Some((800, 600)));
        assert_eq!(tracker.update(800, 600), None);
        assert_eq!(tracker.size(), (800, 600));
    }
}
