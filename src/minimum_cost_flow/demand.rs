use num_traits::{CheckedAdd, NumAssign};

/// Net inflow required at each node.
///
/// Negative values are supplies, positive values are requirements. Nodes that
/// are never mentioned have a demand of zero. Entries keep the order in which
/// they were first set.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Demands<Flow> {
    entries: Vec<(String, Flow)>,
}

impl<Flow> Demands<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// `amount` units leave `source` and arrive at `sink`.
    pub fn transfer(source: &str, sink: &str, amount: Flow) -> Self {
        let mut demands = Self::new();
        demands.add(source, Flow::zero() - amount);
        demands.add(sink, amount);
        demands
    }

    pub fn set(&mut self, node: &str, demand: Flow) {
        match self.entries.iter_mut().find(|(name, _)| name == node) {
            Some((_, d)) => *d = demand,
            None => self.entries.push((node.to_string(), demand)),
        }
    }

    pub fn add(&mut self, node: &str, demand: Flow) {
        let current = self.get(node);
        self.set(node, current + demand);
    }

    pub fn get(&self, node: &str) -> Flow {
        self.entries.iter().find(|(name, _)| name == node).map_or(Flow::zero(), |&(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Flow)> + '_ {
        self.entries.iter().map(|(name, d)| (name.as_str(), *d))
    }
}

impl<Flow> Demands<Flow>
where
    Flow: NumAssign + Ord + Copy + CheckedAdd,
{
    /// Sum of all demands, `None` if it leaves the range of `Flow`.
    pub fn total(&self) -> Option<Flow> {
        self.entries.iter().try_fold(Flow::zero(), |sum, (_, d)| sum.checked_add(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_sums_to_zero() {
        let demands = Demands::transfer("N", "S", 80);
        assert_eq!(demands.get("N"), -80);
        assert_eq!(demands.get("S"), 80);
        assert_eq!(demands.get("A"), 0);
        assert_eq!(demands.total(), Some(0));
    }

    #[test]
    fn total_past_the_integer_range_is_none() {
        let mut demands = Demands::new();
        demands.set("a", i64::MAX);
        demands.set("b", 1);
        assert_eq!(demands.total(), None);
    }

    #[test]
    fn transfer_to_itself_cancels_out() {
        let demands = Demands::transfer("N", "N", 5);
        assert_eq!(demands.get("N"), 0);
    }
}
