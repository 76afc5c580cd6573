#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure token exchange state machine resolving player/cell interactions.

use tokenfield_core::{ExchangeOutcome, TokenValue};

/// Token denomination that signifies victory when it appears on either side.
pub const WIN_TOKEN: TokenValue = TokenValue::new(16);

/// Resolved outcome of a single exchange between a cell and the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exchange {
    /// Token remaining in the cell after the exchange.
    pub cell: TokenValue,
    /// Token held by the player after the exchange.
    pub inventory: TokenValue,
    /// Which of the exchange cases applied.
    pub outcome: ExchangeOutcome,
    /// Whether either resulting side equals [`WIN_TOKEN`].
    ///
    /// Purely informational; callers surface it once and never treat it as a
    /// state transition.
    pub won: bool,
}

/// Resolves a cell/inventory token pair into its successor state.
///
/// Cases are evaluated in precedence order and exactly one applies: take,
/// drop, craft, mismatch, idle. The token sum is conserved whenever tokens
/// move and untouched otherwise.
#[must_use]
pub fn resolve(cell: TokenValue, inventory: TokenValue) -> Exchange {
    let (cell, inventory, outcome) = if !cell.is_empty() && inventory.is_empty() {
        (TokenValue::EMPTY, cell, ExchangeOutcome::Taken)
    } else if cell.is_empty() && !inventory.is_empty() {
        (inventory, TokenValue::EMPTY, ExchangeOutcome::Dropped)
    } else if cell == inventory && !cell.is_empty() {
        (
            cell.merged_with(inventory),
            TokenValue::EMPTY,
            ExchangeOutcome::Crafted,
        )
    } else if !cell.is_empty() {
        (cell, inventory, ExchangeOutcome::Mismatched)
    } else {
        (cell, inventory, ExchangeOutcome::Idle)
    };

    Exchange {
        cell,
        inventory,
        outcome,
        won: cell == WIN_TOKEN || inventory == WIN_TOKEN,
    }
}
