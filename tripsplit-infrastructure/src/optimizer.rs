use tripsplit_application::SettlementOptimizer;
use tripsplit_domain::{MemberBalances, Settlement, SettlementCalculator};

/// Adapts the domain's greedy matcher to the application port.
#[derive(Default)]
pub struct GreedySettlementOptimizer;

impl SettlementOptimizer for GreedySettlementOptimizer {
    fn optimize(&self, balances: &MemberBalances) -> Vec<Settlement> {
        SettlementCalculator.calculate(balances)
    }
}
