//! Engine configuration.

/// What happens to market-order quantity the opposite side cannot fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarketResiduePolicy {
    /// Fill what is available and drop the rest. The drop is reported as
    /// `Disposition::Discarded`.
    #[default]
    Discard,

    /// Refuse the order outright, before any fill, when the opposite side
    /// holds less quantity than the order asks for.
    Reject,
}

/// Engine configuration
///
/// ## Example
///
/// ```
/// use auction_core::engine::{EngineConfig, MarketResiduePolicy};
///
/// let config = EngineConfig::default()
///     .market_residue(MarketResiduePolicy::Reject)
///     .order_capacity(50_000);
///
/// assert_eq!(config.market_residue, MarketResiduePolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub market_residue: MarketResiduePolicy,

    /// Slots pre-allocated per book side
    pub order_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            market_residue: MarketResiduePolicy::Discard,
            order_capacity: 1_024,
        }
    }
}

impl EngineConfig {
    pub fn market_residue(mut self, policy: MarketResiduePolicy) -> Self {
        self.market_residue = policy;
        self
    }

    pub fn order_capacity(mut self, capacity: usize) -> Self {
        self.order_capacity = capacity;
        self
    }
}
