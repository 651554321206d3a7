pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";
pub(crate) const YELLOW_WARNING: &str = "\u{26a0}\u{fe0f}";
