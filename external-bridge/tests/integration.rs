//! Integration tests for the external bridge using cw-multi-test.
//!
//! A `cw20-base` instance plays the locked token. Covers deposits with and
//! without fees, the receive hook, replay-guarded withdrawals, custody checks
//! and owner-only operations.

use bridge_common::msg::{
    FeeResponse, FeesResponse, IsProcessedResponse, OwnerResponse, SimulationResponse,
};
use bridge_common::TokenFee;
use cosmwasm_std::{to_json_binary, Addr, Binary, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, Cw20ReceiveMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use external_bridge::msg::{
    CustodyResponse, ExecuteMsg, InstantiateMsg, QueryMsg, ReceiveMsg, StatsResponse,
};

/// 1000 USDT at 6 decimals
const USER_BALANCE: u128 = 1_000_000_000;
/// 100 USDT at 6 decimals
const AMOUNT: u128 = 100_000_000;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        external_bridge::contract::execute,
        external_bridge::contract::instantiate,
        external_bridge::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

struct Suite {
    app: App,
    bridge: Addr,
    usdt: Addr,
    relay: Addr,
    user: Addr,
}

fn setup() -> Suite {
    let mut app = App::default();
    let deployer = Addr::unchecked("deployer");
    let relay = Addr::unchecked("relay");
    let user = Addr::unchecked("user");

    let cw20_code_id = app.store_code(contract_cw20());
    let usdt = app
        .instantiate_contract(
            cw20_code_id,
            deployer.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Tether USD".to_string(),
                symbol: "USDT".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::from(USER_BALANCE),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "usdt",
            None,
        )
        .unwrap();

    let bridge_code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code_id,
            deployer.clone(),
            &InstantiateMsg {
                owner: None,
                deposit_fees: vec![],
            },
            &[],
            "external-bridge",
            None,
        )
        .unwrap();

    // Hand the bridge to the relay, as a deployment would
    app.execute_contract(
        deployer,
        bridge.clone(),
        &ExecuteMsg::TransferOwnership {
            new_owner: relay.to_string(),
        },
        &[],
    )
    .unwrap();

    // User approves the bridge for everything it holds
    app.execute_contract(
        user.clone(),
        usdt.clone(),
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: bridge.to_string(),
            amount: Uint128::from(USER_BALANCE),
            expires: None,
        },
        &[],
    )
    .unwrap();

    Suite {
        app,
        bridge,
        usdt,
        relay,
        user,
    }
}

fn origin_tx_id(tag: &str) -> Binary {
    // Right-padded like an encoded bytes32 string
    let mut bytes = [0u8; 32];
    bytes[..tag.len()].copy_from_slice(tag.as_bytes());
    Binary::from(bytes.to_vec())
}

impl Suite {
    fn balance(&self, account: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.usdt,
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    fn custody(&self) -> Uint128 {
        let res: CustodyResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::Custody {
                    token: self.usdt.to_string(),
                },
            )
            .unwrap();
        res.amount
    }

    fn stats(&self) -> StatsResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.bridge, &QueryMsg::Stats {})
            .unwrap()
    }

    fn is_processed(&self, id: &Binary) -> bool {
        let res: IsProcessedResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::IsProcessed {
                    token: self.usdt.to_string(),
                    origin_tx_id: id.clone(),
                },
            )
            .unwrap();
        res.processed
    }

    fn start_deposit(&mut self, amount: u128) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            self.bridge.clone(),
            &ExecuteMsg::StartDeposit {
                token: self.usdt.to_string(),
                amount: Uint128::from(amount),
                recipient: self.user.to_string(),
            },
            &[],
        )
    }

    fn end_withdrawal(
        &mut self,
        sender: &Addr,
        amount: u128,
        recipient: &Addr,
        id: &Binary,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.bridge.clone(),
            &ExecuteMsg::EndWithdrawal {
                token: self.usdt.to_string(),
                amount: Uint128::from(amount),
                recipient: recipient.to_string(),
                origin_tx_id: id.clone(),
            },
            &[],
        )
    }

    fn change_deposit_fee(&mut self, sender: &Addr, fee_bps: u64) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.bridge.clone(),
            &ExecuteMsg::ChangeDepositFee {
                token: self.usdt.to_string(),
                fee_bps,
            },
            &[],
        )
    }

    /// Put tokens in custody without going through StartDeposit
    fn fund_custody(&mut self, amount: u128) {
        self.app
            .execute_contract(
                self.user.clone(),
                self.usdt.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: self.bridge.to_string(),
                    amount: Uint128::from(amount),
                },
                &[],
            )
            .unwrap();
    }
}

fn event_attr(res: &AppResponse, event: &str, key: &str) -> String {
    let ty = format!("wasm-{}", event);
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("missing {} in {} event", key, event))
}

// ============================================================================
// Deposit Tests
// ============================================================================

#[test]
fn test_deposit_locks_tokens_and_emits_event() {
    let mut suite = setup();

    let res = suite.start_deposit(AMOUNT).unwrap();

    assert_eq!(suite.balance(&suite.user), Uint128::from(USER_BALANCE - AMOUNT));
    assert_eq!(suite.custody(), Uint128::from(AMOUNT));
    assert_eq!(event_attr(&res, "deposit_started", "token"), suite.usdt.to_string());
    assert_eq!(event_attr(&res, "deposit_started", "sender"), suite.user.to_string());
    assert_eq!(
        event_attr(&res, "deposit_started", "recipient"),
        suite.user.to_string()
    );
    assert_eq!(event_attr(&res, "deposit_started", "amount"), AMOUNT.to_string());
    assert_eq!(event_attr(&res, "deposit_started", "fee"), "0");
    assert_eq!(suite.stats().deposits_started, 1);
}

#[test]
fn test_deposit_takes_fee() {
    let mut suite = setup();
    let relay = suite.relay.clone();

    // 1%, default is 0%
    suite.change_deposit_fee(&relay, 100).unwrap();

    let res = suite.start_deposit(AMOUNT).unwrap();

    let fee = AMOUNT * 100 / 10_000;
    assert_eq!(suite.balance(&suite.user), Uint128::from(USER_BALANCE - AMOUNT));
    assert_eq!(suite.custody(), Uint128::from(AMOUNT - fee));
    assert_eq!(suite.balance(&relay), Uint128::from(fee));
    assert_eq!(
        event_attr(&res, "deposit_started", "amount"),
        (AMOUNT - fee).to_string()
    );
    assert_eq!(event_attr(&res, "deposit_started", "fee"), fee.to_string());
}

#[test]
fn test_deposit_fee_on_small_amount_rounds_down() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    suite.change_deposit_fee(&relay, 100).unwrap();

    // 1% of 100 base units = 1, 1% of 99 = 0
    suite.start_deposit(100).unwrap();
    assert_eq!(suite.custody(), Uint128::from(99u128));
    assert_eq!(suite.balance(&relay), Uint128::from(1u128));

    let res = suite.start_deposit(99).unwrap();
    assert_eq!(event_attr(&res, "deposit_started", "amount"), "99");
    assert_eq!(suite.custody(), Uint128::from(198u128));
    assert_eq!(suite.balance(&relay), Uint128::from(1u128));
}

#[test]
fn test_deposit_via_receive_hook() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    suite.change_deposit_fee(&relay, 250).unwrap();

    let res = suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.usdt.clone(),
            &Cw20ExecuteMsg::Send {
                contract: suite.bridge.to_string(),
                amount: Uint128::from(AMOUNT),
                msg: to_json_binary(&ReceiveMsg::StartDeposit {
                    recipient: "native1recipient".to_string(),
                })
                .unwrap(),
            },
            &[],
        )
        .unwrap();

    let fee = AMOUNT * 250 / 10_000;
    assert_eq!(suite.custody(), Uint128::from(AMOUNT - fee));
    assert_eq!(suite.balance(&relay), Uint128::from(fee));
    assert_eq!(event_attr(&res, "deposit_started", "sender"), suite.user.to_string());
    assert_eq!(
        event_attr(&res, "deposit_started", "recipient"),
        "native1recipient"
    );
    assert_eq!(
        event_attr(&res, "deposit_started", "amount"),
        (AMOUNT - fee).to_string()
    );
}

#[test]
fn test_receive_from_non_token_rejected() {
    let mut suite = setup();
    let attacker = Addr::unchecked("attacker");

    // Hook called directly, nothing moves
    let res = suite.app.execute_contract(
        attacker.clone(),
        suite.bridge.clone(),
        &ExecuteMsg::Receive(Cw20ReceiveMsg {
            sender: attacker.to_string(),
            amount: Uint128::from(1_000_000u128),
            msg: to_json_binary(&ReceiveMsg::StartDeposit {
                recipient: "victim".to_string(),
            })
            .unwrap(),
        }),
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid token"),
        "Expected token rejection, got: {}",
        err_str
    );

    assert_eq!(suite.stats().deposits_started, 0);
    assert_eq!(suite.custody(), Uint128::zero());
}

#[test]
fn test_identical_deposits_lock_twice() {
    let mut suite = setup();

    suite.start_deposit(AMOUNT).unwrap();
    suite.start_deposit(AMOUNT).unwrap();

    assert_eq!(suite.custody(), Uint128::from(2 * AMOUNT));
    assert_eq!(
        suite.balance(&suite.user),
        Uint128::from(USER_BALANCE - 2 * AMOUNT)
    );
    assert_eq!(suite.stats().deposits_started, 2);
}

#[test]
fn test_deposit_zero_amount_rejected() {
    let mut suite = setup();

    let res = suite.start_deposit(0);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid amount"),
        "Expected invalid amount, got: {}",
        err_str
    );
}

#[test]
fn test_deposit_empty_recipient_rejected() {
    let mut suite = setup();

    let res = suite.app.execute_contract(
        suite.user.clone(),
        suite.bridge.clone(),
        &ExecuteMsg::StartDeposit {
            token: suite.usdt.to_string(),
            amount: Uint128::from(AMOUNT),
            recipient: "  ".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid address"), "got: {}", err_str);
}

#[test]
fn test_deposit_without_allowance_rolls_back() {
    let mut suite = setup();
    let stranger = Addr::unchecked("stranger");

    // Stranger holds tokens but never approved the bridge
    suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.usdt.clone(),
            &Cw20ExecuteMsg::Transfer {
                recipient: stranger.to_string(),
                amount: Uint128::from(AMOUNT),
            },
            &[],
        )
        .unwrap();

    let res = suite.app.execute_contract(
        stranger.clone(),
        suite.bridge.clone(),
        &ExecuteMsg::StartDeposit {
            token: suite.usdt.to_string(),
            amount: Uint128::from(AMOUNT),
            recipient: stranger.to_string(),
        },
        &[],
    );
    assert!(res.is_err());

    assert_eq!(suite.balance(&stranger), Uint128::from(AMOUNT));
    assert_eq!(suite.custody(), Uint128::zero());
    assert_eq!(suite.stats().deposits_started, 0);
}

#[test]
fn test_deposit_above_balance_fails() {
    let mut suite = setup();

    let res = suite.start_deposit(USER_BALANCE + 1);
    assert!(res.is_err());
    assert_eq!(suite.custody(), Uint128::zero());
}

// ============================================================================
// Withdrawal Tests
// ============================================================================

#[test]
fn test_end_withdrawal_sends_tokens_to_user() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    let user = suite.user.clone();
    let id = origin_tx_id("123");

    // Bridge needs funds for the withdrawal
    suite.fund_custody(AMOUNT);
    let before = suite.balance(&user);

    let res = suite.end_withdrawal(&relay, AMOUNT, &user, &id).unwrap();

    assert_eq!(suite.balance(&user), before + Uint128::from(AMOUNT));
    assert_eq!(suite.custody(), Uint128::zero());
    assert!(suite.is_processed(&id));
    assert_eq!(
        event_attr(&res, "withdrawal_completed", "origin_tx_id"),
        format!("0x{}", hex_encode(id.as_slice()))
    );
    assert_eq!(suite.stats().withdrawals_completed, 1);
}

#[test]
fn test_end_withdrawal_replay_rejected() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    let user = suite.user.clone();
    let id = origin_tx_id("123");

    suite.fund_custody(3 * AMOUNT);
    suite.end_withdrawal(&relay, AMOUNT, &user, &id).unwrap();

    // Identical resubmission
    let res = suite.end_withdrawal(&relay, AMOUNT, &user, &id);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("already processed"),
        "Expected replay rejection, got: {}",
        err_str
    );

    // Same key with other parameters
    let other = Addr::unchecked("other");
    let res = suite.end_withdrawal(&relay, 1, &other, &id);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("already processed"), "got: {}", err_str);

    assert_eq!(suite.custody(), Uint128::from(2 * AMOUNT));
    assert_eq!(suite.balance(&other), Uint128::zero());
    assert_eq!(suite.stats().withdrawals_completed, 1);
}

#[test]
fn test_end_withdrawal_insufficient_custody_leaves_key_unprocessed() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    let user = suite.user.clone();
    let id = origin_tx_id("456");

    suite.fund_custody(AMOUNT - 1);

    let res = suite.end_withdrawal(&relay, AMOUNT, &user, &id);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Insufficient custody"),
        "Expected insufficient custody, got: {}",
        err_str
    );
    assert!(!suite.is_processed(&id));

    // Relay retries once custody is there
    suite.fund_custody(1);
    suite.end_withdrawal(&relay, AMOUNT, &user, &id).unwrap();
    assert!(suite.is_processed(&id));
    assert_eq!(suite.custody(), Uint128::zero());
}

#[test]
fn test_end_withdrawal_rejects_bad_origin_tx_id() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    let user = suite.user.clone();
    suite.fund_custody(AMOUNT);

    let res = suite.end_withdrawal(&relay, AMOUNT, &user, &Binary::from(vec![1u8; 20]));
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid hash length"), "got: {}", err_str);
}

#[test]
fn test_end_withdrawal_zero_amount_rejected() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    let user = suite.user.clone();
    let id = origin_tx_id("zero");

    let res = suite.end_withdrawal(&relay, 0, &user, &id);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid amount"), "got: {}", err_str);
    assert!(!suite.is_processed(&id));
}

#[test]
fn test_deposit_then_release_round_trip() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    let user = suite.user.clone();
    suite.change_deposit_fee(&relay, 100).unwrap();

    let res = suite.start_deposit(AMOUNT).unwrap();
    let net: u128 = event_attr(&res, "deposit_started", "amount").parse().unwrap();

    // Later, a withdrawal of the same net amount comes back from the native chain
    suite
        .end_withdrawal(&relay, net, &user, &origin_tx_id("burn-1"))
        .unwrap();

    assert_eq!(suite.custody(), Uint128::zero());
    assert_eq!(
        suite.balance(&user),
        Uint128::from(USER_BALANCE - (AMOUNT - net))
    );
}

// ============================================================================
// Fee Configuration Tests
// ============================================================================

#[test]
fn test_fee_queries() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    suite.change_deposit_fee(&relay, 30).unwrap();

    let fee: FeeResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::DepositFee {
                token: suite.usdt.to_string(),
            },
        )
        .unwrap();
    assert_eq!(fee.fee_bps, 30);

    let fees: FeesResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::DepositFees {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(
        fees.fees,
        vec![TokenFee {
            token: suite.usdt.to_string(),
            fee_bps: 30
        }]
    );

    let sim: SimulationResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::SimulateDeposit {
                token: suite.usdt.to_string(),
                amount: Uint128::from(1_999u128),
            },
        )
        .unwrap();
    assert_eq!(sim.fee_bps, 30);
    assert_eq!(sim.fee, Uint128::from(5u128));
    assert_eq!(sim.net, Uint128::from(1_994u128));
}

#[test]
fn test_fee_change_applies_to_later_deposits_only() {
    let mut suite = setup();
    let relay = suite.relay.clone();

    suite.change_deposit_fee(&relay, 100).unwrap();
    let first = suite.start_deposit(AMOUNT).unwrap();

    suite.change_deposit_fee(&relay, 0).unwrap();
    let second = suite.start_deposit(AMOUNT).unwrap();

    assert_eq!(
        event_attr(&first, "deposit_started", "amount"),
        (AMOUNT - AMOUNT / 100).to_string()
    );
    assert_eq!(
        event_attr(&second, "deposit_started", "amount"),
        AMOUNT.to_string()
    );
}

#[test]
fn test_fee_above_max_rejected() {
    let mut suite = setup();
    let relay = suite.relay.clone();

    suite.change_deposit_fee(&relay, 10_000).unwrap();

    let res = suite.change_deposit_fee(&relay, 10_001);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid fee"), "got: {}", err_str);
}

#[test]
fn test_fee_change_emits_event() {
    let mut suite = setup();
    let relay = suite.relay.clone();

    suite.change_deposit_fee(&relay, 40).unwrap();
    let res = suite.change_deposit_fee(&relay, 75).unwrap();

    assert_eq!(event_attr(&res, "fee_changed", "direction"), "deposit");
    assert_eq!(event_attr(&res, "fee_changed", "old_fee_bps"), "40");
    assert_eq!(event_attr(&res, "fee_changed", "fee_bps"), "75");
}

// ============================================================================
// Access Control Tests
// ============================================================================

#[test]
fn test_protected_functions_reject_non_owner() {
    let mut suite = setup();
    let user = suite.user.clone();
    suite.fund_custody(AMOUNT);

    let res = suite.end_withdrawal(&user, 123, &user, &origin_tx_id("123"));
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);

    let res = suite.change_deposit_fee(&user, 1);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);

    let res = suite.app.execute_contract(
        user.clone(),
        suite.bridge.clone(),
        &ExecuteMsg::TransferOwnership {
            new_owner: user.to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);

    assert!(!suite.is_processed(&origin_tx_id("123")));
    assert_eq!(suite.custody(), Uint128::from(AMOUNT));
}

#[test]
fn test_transfer_ownership() {
    let mut suite = setup();
    let relay = suite.relay.clone();
    let new_relay = Addr::unchecked("new_relay");

    let res = suite
        .app
        .execute_contract(
            relay.clone(),
            suite.bridge.clone(),
            &ExecuteMsg::TransferOwnership {
                new_owner: new_relay.to_string(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(
        event_attr(&res, "ownership_transferred", "previous_owner"),
        relay.to_string()
    );

    let owner: OwnerResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.bridge, &QueryMsg::Owner {})
        .unwrap();
    assert_eq!(owner.owner, new_relay);

    // Old owner is locked out
    let res = suite.change_deposit_fee(&relay, 100);
    assert!(res.is_err());

    // New owner collects fees
    suite.change_deposit_fee(&new_relay, 100).unwrap();
    suite.start_deposit(AMOUNT).unwrap();
    assert_eq!(suite.balance(&new_relay), Uint128::from(AMOUNT / 100));
    assert_eq!(suite.balance(&relay), Uint128::zero());
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
