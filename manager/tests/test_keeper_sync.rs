//! Integration tests for genesis initialization and book-keeper rotation
//! using cw-multi-test.

mod helpers;

use cosmwasm_std::{Addr, Binary};
use cw_multi_test::Executor;

use helpers::{
    init_genesis, make_rotation_header, setup, sign_list, wire_keys, Keeper,
};
use manager::msg::{BookKeepersResponse, ExecuteMsg, QueryMsg, SyncHeightResponse};
use manager::ContractError;

fn query_book_keepers(app: &cw_multi_test::App, manager_addr: &Addr) -> BookKeepersResponse {
    app.wrap()
        .query_wasm_smart(manager_addr, &QueryMsg::BookKeepers {})
        .unwrap()
}

fn query_sync_height(app: &cw_multi_test::App, manager_addr: &Addr) -> u32 {
    let res: SyncHeightResponse = app
        .wrap()
        .query_wasm_smart(manager_addr, &QueryMsg::CurrentSyncHeight {})
        .unwrap();
    res.height
}

#[test]
fn genesis_installs_keeper_set() {
    let (mut app, manager_addr, _, _) = setup();
    let keepers: Vec<Keeper> = (1..=4).map(Keeper::new).collect();

    init_genesis(&mut app, &manager_addr, &keepers, 0);

    let res = query_book_keepers(&app, &manager_addr);
    assert_eq!(res.epoch_height, 0);
    assert_eq!(res.quorum, 3);
    let expected: Vec<Binary> = keepers
        .iter()
        .map(|k| Binary::from(k.identity().to_vec()))
        .collect();
    assert_eq!(res.keepers, expected);
}

#[test]
fn second_genesis_is_rejected() {
    let (mut app, manager_addr, _, _) = setup();
    let keepers: Vec<Keeper> = (1..=4).map(Keeper::new).collect();
    init_genesis(&mut app, &manager_addr, &keepers, 0);

    let err = app
        .execute_contract(
            Addr::unchecked("relayer"),
            manager_addr,
            &ExecuteMsg::InitGenesisBlock {
                raw_header: Binary::from(make_rotation_header(0, &keepers)),
                pub_key_list: Binary::from(wire_keys(&keepers)),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::AlreadyInitialized
    );
}

#[test]
fn genesis_commitment_mismatch_is_rejected() {
    let (mut app, manager_addr, _, _) = setup();
    let keepers: Vec<Keeper> = (1..=4).map(Keeper::new).collect();
    let others: Vec<Keeper> = (5..=8).map(Keeper::new).collect();

    // header commits to a different keeper set than the key list
    let err = app
        .execute_contract(
            Addr::unchecked("relayer"),
            manager_addr,
            &ExecuteMsg::InitGenesisBlock {
                raw_header: Binary::from(make_rotation_header(0, &others)),
                pub_key_list: Binary::from(wire_keys(&keepers)),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::CommitmentMismatch
    );
}

#[test]
fn genesis_with_ragged_key_list_is_rejected() {
    let (mut app, manager_addr, _, _) = setup();
    let keepers: Vec<Keeper> = (1..=4).map(Keeper::new).collect();
    let mut keys = wire_keys(&keepers);
    keys.pop();

    let err = app
        .execute_contract(
            Addr::unchecked("relayer"),
            manager_addr,
            &ExecuteMsg::InitGenesisBlock {
                raw_header: Binary::from(make_rotation_header(0, &keepers)),
                pub_key_list: Binary::from(keys),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidKeyList { len: 4 * 67 - 1 }
    );
}

#[test]
fn rotation_replaces_keeper_set() {
    let (mut app, manager_addr, _, _) = setup();
    let old: Vec<Keeper> = (1..=4).map(Keeper::new).collect();
    let new: Vec<Keeper> = (5..=8).map(Keeper::new).collect();
    init_genesis(&mut app, &manager_addr, &old, 0);

    let raw_header = make_rotation_header(10, &new);
    let signatures = sign_list(&[&old[0], &old[1], &old[2]], &raw_header);
    app.execute_contract(
        Addr::unchecked("relayer"),
        manager_addr.clone(),
        &ExecuteMsg::ChangeBookKeeper {
            raw_header: Binary::from(raw_header),
            pub_key_list: Binary::from(wire_keys(&new)),
            sign_list: Binary::from(signatures),
        },
        &[],
    )
    .unwrap();

    assert_eq!(query_sync_height(&app, &manager_addr), 10);
    let res = query_book_keepers(&app, &manager_addr);
    let expected: Vec<Binary> = new
        .iter()
        .map(|k| Binary::from(k.identity().to_vec()))
        .collect();
    assert_eq!(res.keepers, expected);
}

#[test]
fn stale_rotation_is_rejected_regardless_of_signatures() {
    let (mut app, manager_addr, _, _) = setup();
    let old: Vec<Keeper> = (1..=4).map(Keeper::new).collect();
    let new: Vec<Keeper> = (5..=8).map(Keeper::new).collect();
    init_genesis(&mut app, &manager_addr, &old, 20);

    // fully signed, but below the current epoch height
    let raw_header = make_rotation_header(19, &new);
    let signatures = sign_list(&[&old[0], &old[1], &old[2], &old[3]], &raw_header);
    let err = app
        .execute_contract(
            Addr::unchecked("relayer"),
            manager_addr,
            &ExecuteMsg::ChangeBookKeeper {
                raw_header: Binary::from(raw_header),
                pub_key_list: Binary::from(wire_keys(&new)),
                sign_list: Binary::from(signatures),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::StaleRotation {
            current: 20,
            got: 19
        }
    );
}

#[test]
fn rotation_below_quorum_is_rejected() {
    let (mut app, manager_addr, _, _) = setup();
    let old: Vec<Keeper> = (1..=4).map(Keeper::new).collect();
    let new: Vec<Keeper> = (5..=8).map(Keeper::new).collect();
    init_genesis(&mut app, &manager_addr, &old, 0);

    let raw_header = make_rotation_header(10, &new);
    let signatures = sign_list(&[&old[0], &old[1]], &raw_header);
    let err = app
        .execute_contract(
            Addr::unchecked("relayer"),
            manager_addr,
            &ExecuteMsg::ChangeBookKeeper {
                raw_header: Binary::from(raw_header),
                pub_key_list: Binary::from(wire_keys(&new)),
                sign_list: Binary::from(signatures),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::QuorumNotReached
    );
}

#[test]
fn rotation_signed_by_incoming_set_is_rejected() {
    let (mut app, manager_addr, _, _) = setup();
    let old: Vec<Keeper> = (1..=4).map(Keeper::new).collect();
    let new: Vec<Keeper> = (5..=8).map(Keeper::new).collect();
    init_genesis(&mut app, &manager_addr, &old, 0);

    // the incoming keepers cannot vote themselves in
    let raw_header = make_rotation_header(10, &new);
    let signatures = sign_list(&[&new[0], &new[1], &new[2]], &raw_header);
    let err = app
        .execute_contract(
            Addr::unchecked("relayer"),
            manager_addr,
            &ExecuteMsg::ChangeBookKeeper {
                raw_header: Binary::from(raw_header),
                pub_key_list: Binary::from(wire_keys(&new)),
                sign_list: Binary::from(signatures),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::QuorumNotReached
    );
}

#[test]
fn rotation_commitment_mismatch_is_rejected() {
    let (mut app, manager_addr, _, _) = setup();
    let old: Vec<Keeper> = (1..=4).map(Keeper::new).collect();
    let new: Vec<Keeper> = (5..=8).map(Keeper::new).collect();
    let others: Vec<Keeper> = (9..=12).map(Keeper::new).collect();
    init_genesis(&mut app, &manager_addr, &old, 0);

    // header commits to `others` but the key list carries `new`
    let raw_header = make_rotation_header(10, &others);
    let signatures = sign_list(&[&old[0], &old[1], &old[2]], &raw_header);
    let err = app
        .execute_contract(
            Addr::unchecked("relayer"),
            manager_addr,
            &ExecuteMsg::ChangeBookKeeper {
                raw_header: Binary::from(raw_header),
                pub_key_list: Binary::from(wire_keys(&new)),
                sign_list: Binary::from(signatures),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::CommitmentMismatch
    );
}

#[test]
fn rotation_before_genesis_is_rejected() {
    let (mut app, manager_addr, _, _) = setup();
    let keepers: Vec<Keeper> = (1..=4).map(Keeper::new).collect();

    let raw_header = make_rotation_header(10, &keepers);
    let signatures = sign_list(&[&keepers[0]], &raw_header);
    let err = app
        .execute_contract(
            Addr::unchecked("relayer"),
            manager_addr,
            &ExecuteMsg::ChangeBookKeeper {
                raw_header: Binary::from(raw_header),
                pub_key_list: Binary::from(wire_keys(&keepers)),
                sign_list: Binary::from(signatures),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NotInitialized
    );
}

#[test]
fn height_zero_rotation_acts_as_genesis() {
    let (mut app, manager_addr, _, _) = setup();
    let keepers: Vec<Keeper> = (1..=4).map(Keeper::new).collect();

    app.execute_contract(
        Addr::unchecked("relayer"),
        manager_addr.clone(),
        &ExecuteMsg::ChangeBookKeeper {
            raw_header: Binary::from(make_rotation_header(0, &keepers)),
            pub_key_list: Binary::from(wire_keys(&keepers)),
            sign_list: Binary::from(vec![]),
        },
        &[],
    )
    .unwrap();

    let res = query_book_keepers(&app, &manager_addr);
    assert_eq!(res.keepers.len(), 4);
    assert_eq!(res.epoch_height, 0);
}
