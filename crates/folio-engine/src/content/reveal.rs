/// One-shot visibility latch behind the fade-in sections.
///
/// The first observation that is intersecting by at least `threshold` flips
/// the latch and disconnects it. Nothing flips it back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f32,
    visible: bool,
}

impl RevealLatch {
    pub const DEFAULT_THRESHOLD: f32 = 0.1;

    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Feed one observer entry. Returns true only on the call that reveals.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f32) -> bool {
        if self.visible || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
