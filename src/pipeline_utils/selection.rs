use crate::balance::RawBalance;
use crate::pipeline_utils::priority::{priority_of, Priority};
use itertools::Itertools;

/* a balance is kept only when:
 * - its chain is recognized (priority above the lowest rank)
 * - its amount is zero or negative
 * positive holdings are dropped; this mirrors the upstream wallet page as written
 */
fn is_eligible_with(priority: Priority, balance: &RawBalance) -> bool {
    !priority.is_lowest() && balance.amount <= 0.0
}

pub fn is_eligible(balance: &RawBalance) -> bool {
    is_eligible_with(priority_of(&balance.blockchain), balance)
}

// stable: equal priorities keep their input order
pub fn select_and_order(balances: &[RawBalance]) -> Vec<RawBalance> {
    let selected = balances
        .iter()
        .map(|balance| (priority_of(&balance.blockchain), balance))
        .filter(|(priority, balance)| is_eligible_with(*priority, balance))
        .sorted_by(|(lhs, _), (rhs, _)| rhs.cmp(lhs))
        .map(|(_, balance)| balance.clone())
        .collect::<Vec<_>>();

    tracing::debug!(
        "selected {:?} of {:?} balances",
        selected.len(),
        balances.len()
    );

    selected
}
