//! The fee ledger of the active round: the ordered participant sequence
//! and the pot all entrance payments flow into.

use cosmwasm_std::{Addr, Coin, Order, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

/// Participants of the active round, keyed by entry position.
/// The same address may appear multiple times (weighted chances).
const PLAYERS: Map<u32, Addr> = Map::new("players");
/// Number of entries in the active round
const PLAYERS_COUNT: Item<u32> = Item::new("players_count");
/// Sum of all fees collected in the active round
const POT: Item<Uint128> = Item::new("pot");

#[derive(Debug)]
pub struct DepositReceipt {
    /// The amount added to the pot by this entry
    pub paid: Uint128,
    /// Number of entries including this one
    pub players: u32,
    /// Pot balance including this payment
    pub pot: Uint128,
}

/// Validates the paid funds and appends one entry for `sender`.
///
/// All paid coins must be of the entrance fee denom and must sum up to at
/// least the entrance fee. The full paid amount goes into the pot, also
/// when it exceeds the fee.
pub fn deposit(
    storage: &mut dyn Storage,
    entrance_fee: &Coin,
    sender: &Addr,
    funds: &[Coin],
) -> Result<DepositReceipt, ContractError> {
    let mut paid = Uint128::zero();
    for coin in funds {
        if coin.denom != entrance_fee.denom {
            return Err(ContractError::WrongDenom);
        }
        paid += coin.amount;
    }
    if paid < entrance_fee.amount {
        return Err(ContractError::FeeTooLow);
    }

    let count = PLAYERS_COUNT.may_load(storage)?.unwrap_or_default();
    PLAYERS.save(storage, count, sender)?;
    PLAYERS_COUNT.save(storage, &(count + 1))?;

    let pot = POT.may_load(storage)?.unwrap_or_default() + paid;
    POT.save(storage, &pot)?;

    Ok(DepositReceipt {
        paid,
        players: count + 1,
        pot,
    })
}

pub fn players_count(storage: &dyn Storage) -> StdResult<u32> {
    Ok(PLAYERS_COUNT.may_load(storage)?.unwrap_or_default())
}

pub fn get_player(storage: &dyn Storage, index: u32) -> StdResult<Option<Addr>> {
    PLAYERS.may_load(storage, index)
}

/// All entries of the active round in entry order
pub fn all_players(storage: &dyn Storage) -> StdResult<Vec<Addr>> {
    PLAYERS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_pos, addr)| addr))
        .collect()
}

pub fn pot_balance(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(POT.may_load(storage)?.unwrap_or_default())
}

/// Atomically reads and zeroes the pot. Called once per round, at payout.
pub fn drain_pot(storage: &mut dyn Storage) -> StdResult<Uint128> {
    let pot = POT.may_load(storage)?.unwrap_or_default();
    POT.save(storage, &Uint128::zero())?;
    Ok(pot)
}

/// Clears the participant sequence. Called together with [`drain_pot`].
pub fn reset(storage: &mut dyn Storage) -> StdResult<()> {
    PLAYERS.clear(storage);
    PLAYERS_COUNT.save(storage, &0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use cosmwasm_std::coins;

    fn fee() -> Coin {
        Coin::new(10u128, "ujunox")
    }

    #[test]
    fn deposit_appends_in_order_and_grows_pot() {
        let mut deps = mock_dependencies();
        let alice = deps.api.addr_make("alice");
        let bob = deps.api.addr_make("bob");

        let receipt = deposit(&mut deps.storage, &fee(), &alice, &coins(10, "ujunox")).unwrap();
        assert_eq!(receipt.paid, Uint128::new(10));
        assert_eq!(receipt.players, 1);
        assert_eq!(receipt.pot, Uint128::new(10));

        // Overpaying is allowed and pooled in full
        let receipt = deposit(&mut deps.storage, &fee(), &bob, &coins(25, "ujunox")).unwrap();
        assert_eq!(receipt.paid, Uint128::new(25));
        assert_eq!(receipt.players, 2);
        assert_eq!(receipt.pot, Uint128::new(35));

        assert_eq!(
            all_players(&deps.storage).unwrap(),
            vec![alice.clone(), bob.clone()]
        );
        assert_eq!(get_player(&deps.storage, 0).unwrap(), Some(alice));
        assert_eq!(get_player(&deps.storage, 1).unwrap(), Some(bob));
        assert_eq!(get_player(&deps.storage, 2).unwrap(), None);
    }

    #[test]
    fn deposit_allows_repeated_entries_of_same_address() {
        let mut deps = mock_dependencies();
        let alice = deps.api.addr_make("alice");

        deposit(&mut deps.storage, &fee(), &alice, &coins(10, "ujunox")).unwrap();
        deposit(&mut deps.storage, &fee(), &alice, &coins(10, "ujunox")).unwrap();
        assert_eq!(players_count(&deps.storage).unwrap(), 2);
        assert_eq!(
            all_players(&deps.storage).unwrap(),
            vec![alice.clone(), alice]
        );
    }

    #[test]
    fn deposit_rejects_underpayment_without_state_change() {
        let mut deps = mock_dependencies();
        let alice = deps.api.addr_make("alice");

        let err = deposit(&mut deps.storage, &fee(), &alice, &coins(9, "ujunox")).unwrap_err();
        assert!(matches!(err, ContractError::FeeTooLow));
        // No funds at all is underpayment too
        let err = deposit(&mut deps.storage, &fee(), &alice, &[]).unwrap_err();
        assert!(matches!(err, ContractError::FeeTooLow));

        assert_eq!(players_count(&deps.storage).unwrap(), 0);
        assert_eq!(pot_balance(&deps.storage).unwrap(), Uint128::zero());
    }

    #[test]
    fn deposit_rejects_wrong_denom() {
        let mut deps = mock_dependencies();
        let alice = deps.api.addr_make("alice");

        let err = deposit(&mut deps.storage, &fee(), &alice, &coins(10, "bitcoin")).unwrap_err();
        assert!(matches!(err, ContractError::WrongDenom));
        let err = deposit(
            &mut deps.storage,
            &fee(),
            &alice,
            &[Coin::new(10u128, "ujunox"), Coin::new(1u128, "bitcoin")],
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::WrongDenom));
        assert_eq!(players_count(&deps.storage).unwrap(), 0);
    }

    #[test]
    fn drain_and_reset_clear_the_round() {
        let mut deps = mock_dependencies();
        let alice = deps.api.addr_make("alice");
        let bob = deps.api.addr_make("bob");

        deposit(&mut deps.storage, &fee(), &alice, &coins(10, "ujunox")).unwrap();
        deposit(&mut deps.storage, &fee(), &bob, &coins(10, "ujunox")).unwrap();

        let drained = drain_pot(&mut deps.storage).unwrap();
        assert_eq!(drained, Uint128::new(20));
        assert_eq!(pot_balance(&deps.storage).unwrap(), Uint128::zero());

        reset(&mut deps.storage).unwrap();
        assert_eq!(players_count(&deps.storage).unwrap(), 0);
        assert_eq!(all_players(&deps.storage).unwrap(), Vec::<Addr>::new());

        // The next round starts counting positions from zero again
        deposit(&mut deps.storage, &fee(), &bob, &coins(10, "ujunox")).unwrap();
        assert_eq!(get_player(&deps.storage, 0).unwrap(), Some(bob));
    }
}
