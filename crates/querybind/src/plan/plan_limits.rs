/// Complexity limits a plan must satisfy to be executable. `0` disables a
/// limit.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PlanLimits {
    pub max_depth: usize,
    pub max_field_count: usize,
}
