//! Shared harness for the manager integration tests: relay-chain keepers
//! with real recoverable signatures, header and proof builders, and a mock
//! handler contract recording the calls it receives.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};
use cw_storage_plus::Item;
use k256::ecdsa::SigningKey;

use common::codec;
use common::handler::{CrossChainMsg, HandlerExecuteMsg};
use manager::ccm::{encode_value, CrossChainRequest, CrossChainValue};
use manager::hash::{sha256, sha256d};
use manager::header::{encode_header, Header};
use manager::keepers::derive_book_keeper;
use manager::msg::{ExecuteMsg, InstantiateMsg};

/// Chain id the manager under test is instantiated with.
pub const THIS_CHAIN_ID: u64 = 4;

// ============================================================================
// Relay-chain keepers
// ============================================================================

/// A relay-chain consensus signer with a real secp256k1 key.
pub struct Keeper {
    key: SigningKey,
}

impl Keeper {
    pub fn new(seed: u8) -> Self {
        let mut bytes = [seed; 32];
        bytes[0] = 1; // keep the scalar in range
        Self {
            key: SigningKey::from_slice(&bytes).unwrap(),
        }
    }

    /// The 67-byte wire form: 3-byte algorithm prefix then the uncompressed
    /// 64-byte curve point.
    pub fn wire_key(&self) -> Vec<u8> {
        let point = self.key.verifying_key().to_encoded_point(false);
        let mut key = vec![0x12, 0x05, 0x04];
        key.extend_from_slice(&point.as_bytes()[1..]);
        key
    }

    /// SHA-256 identity of the 64-byte curve point.
    pub fn identity(&self) -> [u8; 32] {
        let point = self.key.verifying_key().to_encoded_point(false);
        sha256(&point.as_bytes()[1..])
    }

    /// One 65-byte signature entry over the raw header bytes.
    pub fn sign(&self, raw_header: &[u8]) -> Vec<u8> {
        let digest = sha256d(raw_header);
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(&digest).unwrap();
        let mut entry = signature.to_bytes().to_vec();
        entry.push(if recovery_id.to_byte() == 0 { 1 } else { 0 });
        entry
    }
}

/// Flat 67-byte-per-entry key list for a keeper set.
pub fn wire_keys(keepers: &[Keeper]) -> Vec<u8> {
    keepers.iter().flat_map(Keeper::wire_key).collect()
}

/// Concatenated signature entries from the given signers.
pub fn sign_list(signers: &[&Keeper], raw_header: &[u8]) -> Vec<u8> {
    signers.iter().flat_map(|k| k.sign(raw_header)).collect()
}

// ============================================================================
// Header and proof builders
// ============================================================================

/// Encode a header with the given verification-relevant fields.
pub fn make_header(
    height: u32,
    cross_states_root: [u8; 32],
    block_root: [u8; 32],
    next_book_keeper: [u8; 20],
) -> Vec<u8> {
    encode_header(&Header {
        version: 0,
        chain_id: 1,
        prev_block_hash: [0x10; 32],
        transaction_root: [0x20; 32],
        cross_states_root,
        block_root,
        timestamp: 1_600_000_000 + height,
        height,
        consensus_data: height as u64,
        consensus_payload: b"consensus".to_vec(),
        next_book_keeper,
    })
}

/// Header whose commitment matches `keepers`, suitable for genesis and
/// rotation.
pub fn make_rotation_header(height: u32, keepers: &[Keeper]) -> Vec<u8> {
    let commitment = derive_book_keeper(&wire_keys(keepers))
        .unwrap()
        .next_book_keeper;
    make_header(height, [0x30; 32], [0x40; 32], commitment)
}

/// Single-leaf inclusion proof: returns the proof and the root it commits
/// to.
pub fn leaf_proof(value: &[u8]) -> (Vec<u8>, [u8; 32]) {
    let mut proof = Vec::new();
    codec::write_var_bytes(&mut proof, value);
    (proof, manager::merkle::hash_leaf(value))
}

/// Wire-encoded cross-states leaf for an inbound transaction.
pub fn make_value_leaf(
    tx_hash: &[u8],
    from_chain_id: u64,
    to_chain_id: u64,
    to_contract: &[u8],
    method: &str,
    args: &[u8],
    from_contract: &[u8],
) -> Vec<u8> {
    encode_value(&CrossChainValue {
        tx_hash: tx_hash.to_vec(),
        from_chain_id,
        request: CrossChainRequest {
            to_chain_id,
            to_contract: to_contract.to_vec(),
            method: method.as_bytes().to_vec(),
            args: args.to_vec(),
            tx_hash: tx_hash.to_vec(),
            cross_chain_id: sha256(tx_hash).to_vec(),
            from_contract: from_contract.to_vec(),
        },
    })
}

// ============================================================================
// Mock handler contract
// ============================================================================

const LAST_CALL: Item<CrossChainMsg> = Item::new("last_call");

#[cw_serde]
pub struct MockInstantiateMsg {}

#[cw_serde]
pub enum MockQueryMsg {
    LastCall {},
}

fn mock_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: MockInstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn mock_execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: HandlerExecuteMsg,
) -> StdResult<Response> {
    let HandlerExecuteMsg::HandleCrossChain(call) = msg;
    if call.method == "fail" {
        return Err(StdError::generic_err("handler rejected the call"));
    }
    LAST_CALL.save(deps.storage, &call)?;
    Ok(Response::new())
}

fn mock_query(deps: Deps, _env: Env, msg: MockQueryMsg) -> StdResult<Binary> {
    match msg {
        MockQueryMsg::LastCall {} => to_json_binary(&LAST_CALL.may_load(deps.storage)?),
    }
}

pub fn contract_mock_handler() -> Box<dyn Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        mock_execute,
        mock_instantiate,
        mock_query,
    ))
}

// ============================================================================
// App setup
// ============================================================================

pub fn contract_manager() -> Box<dyn Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        manager::contract::execute,
        manager::contract::instantiate,
        manager::contract::query,
    ))
}

/// Instantiate the manager and a mock handler; returns the app, the
/// manager, the handler, and the admin account.
pub fn setup() -> (App, Addr, Addr, Addr) {
    let mut app = App::default();
    let admin = Addr::unchecked("admin");

    let manager_code = app.store_code(contract_manager());
    let manager_addr = app
        .instantiate_contract(
            manager_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                chain_id: THIS_CHAIN_ID,
            },
            &[],
            "relay-manager",
            Some(admin.to_string()),
        )
        .unwrap();

    let handler_code = app.store_code(contract_mock_handler());
    let handler_addr = app
        .instantiate_contract(
            handler_code,
            admin.clone(),
            &MockInstantiateMsg {},
            &[],
            "mock-handler",
            None,
        )
        .unwrap();

    (app, manager_addr, handler_addr, admin)
}

/// Run genesis initialization with the given keeper set at `height`.
pub fn init_genesis(app: &mut App, manager_addr: &Addr, keepers: &[Keeper], height: u32) {
    let raw_header = make_rotation_header(height, keepers);
    app.execute_contract(
        Addr::unchecked("relayer"),
        manager_addr.clone(),
        &ExecuteMsg::InitGenesisBlock {
            raw_header: Binary::from(raw_header),
            pub_key_list: Binary::from(wire_keys(keepers)),
        },
        &[],
    )
    .unwrap();
}
