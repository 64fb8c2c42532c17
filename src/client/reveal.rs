//! Visibility-driven reveals: card entrance animation and progress bars
//!
//! Callers report each element's visible ratio (already adjusted for the
//! observer's root margin). An element reacts the first time its ratio
//! reaches the threshold and is unobserved afterwards.

/// Visible ratio that triggers a card's entrance animation
pub const ANIMATE_THRESHOLD: f64 = 0.1;

/// Visible ratio that starts a progress bar fill
pub const PROGRESS_THRESHOLD: f64 = 0.3;

fn crosses(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio >= threshold
}

/// Inline transform while the pointer is over a card
pub const HOVER_LIFT: &str = "translateY(-10px)";
/// Inline transform after the pointer leaves
pub const HOVER_REST: &str = "translateY(0)";

/// Cards that gain the `animate` class once
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    animated: Vec<bool>,
    /// Inline transform set by hovering, if any
    transforms: Vec<Option<&'static str>>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            threshold: ANIMATE_THRESHOLD,
            animated: vec![false; count],
            transforms: vec![None; count],
        }
    }

    /// Returns true when this report revealed the element
    pub fn observe(&mut self, index: usize, ratio: f64) -> bool {
        match self.animated.get_mut(index) {
            Some(done) if !*done && crosses(ratio, self.threshold) => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_animated(&self, index: usize) -> bool {
        self.animated.get(index).copied().unwrap_or(false)
    }

    /// Pointer entered or left a card
    ///
    /// Animated cards are left alone. Returns true when the transform changed.
    pub fn hover(&mut self, index: usize, entered: bool) -> bool {
        if self.is_animated(index) {
            return false;
        }
        let Some(slot) = self.transforms.get_mut(index) else {
            return false;
        };
        *slot = Some(if entered { HOVER_LIFT } else { HOVER_REST });
        true
    }

    pub fn transform(&self, index: usize) -> Option<&'static str> {
        self.transforms.get(index).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    /// `data-width`; bars without one are never observed
    pub target_width: Option<String>,
    pub width: String,
    observed: bool,
}

impl ProgressBar {
    pub fn new(target_width: Option<&str>) -> Self {
        let target_width = target_width.filter(|w| !w.is_empty()).map(ToString::to_string);
        Self {
            observed: target_width.is_some(),
            target_width,
            width: "0".to_string(),
        }
    }

    pub const fn is_observed(&self) -> bool {
        self.observed
    }
}

#[derive(Debug, Clone)]
pub struct ProgressBars {
    bars: Vec<ProgressBar>,
}

impl ProgressBars {
    pub fn new<'a>(targets: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        Self {
            bars: targets.into_iter().map(ProgressBar::new).collect(),
        }
    }

    /// Fill the bar to its target on first sufficient visibility
    pub fn observe(&mut self, index: usize, ratio: f64) -> bool {
        let Some(bar) = self.bars.get_mut(index) else {
            return false;
        };
        if !bar.observed || !crosses(ratio, PROGRESS_THRESHOLD) {
            return false;
        }
        if let Some(target) = &bar.target_width {
            bar.width.clone_from(target);
        }
        bar.observed = false;
        true
    }

    pub fn bar(&self, index: usize) -> Option<&ProgressBar> {
        self.bars.get(index)
    }
}
