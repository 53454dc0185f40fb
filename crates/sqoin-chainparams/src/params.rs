//! Per-network chain parameters.
//!
//! Each supported network is described by a [`NetworkParams`] value produced
//! by one of the four constructor functions. Construction is self-checking:
//! the genesis block is rebuilt from first principles every time, and the
//! fixed networks assert that its hash still matches the pinned identity
//! before the parameters are handed out.

use core::fmt;
use core::str::FromStr;
use std::net::SocketAddr;

use crate::block::Block;
use crate::checkpoints::Checkpoints;
use crate::deployments::{BitDeployment, Deployment, DEPLOYMENT_COUNT, NO_TIMEOUT};
use crate::error::{ChainError, ErrorCode};
use crate::genesis::{default_genesis_block, find_devnet_genesis_block};
use crate::hash::{hash_from_hex, hash_to_hex, is_zero_hash, Hash256, ZERO_HASH};

/// Base currency units per coin.
pub const COIN: u64 = 100_000_000;

const MAIN_GENESIS_HASH: &str = "a015e0b70aa530fb1254e8de51c8b93c1b54096fd826d3f298b38095f68dbf75";
const MAIN_GENESIS_MERKLE: &str =
    "ee083227e06144789ca020b95d86720b65a201e7e36550c6480f07bb63d7f817";
const TEST_GENESIS_HASH: &str = "cd253e29bb98899e0fb4c36efd7f10c2c732b7692f40b441f2040085c53bf4f0";
const TEST_GENESIS_MERKLE: &str =
    "4f6194cd111c9aa3ee0e9644ee9a091b46a4fcb8bf77dc53ba44fc9eefbf7ca7";

/// Height-zero checkpoint shared by every network, kept from the chain's
/// original deployment data.
const CHECKPOINT_0: &str = "000008ca1832a4baf228eb1553c03d3a2c8e02399550dd6ea8d65cec3ef23d2e";

const TEST_MIN_CHAIN_WORK: &str =
    "000000000000000000000000000000000000000000000000003be69c34b1244f";
const TEST_ASSUME_VALID: &str =
    "0000000004a7878409189b7a8f75b3815d9b8c45ee8f79955a6c727d83bddb04";

// ~uint256(0) >> 20 for the retargeting networks, ~uint256(0) >> 1 elsewhere.
const POW_LIMIT_RETARGET: &str =
    "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
const POW_LIMIT_PERMISSIVE: &str =
    "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

const ALERT_KEY_TESTNETS: &str = "04517d8a699cb43d3938d7b24faaff7cda448ca4ea267723ba614784de661949bf632d6304316b244646dea079735b9a6fc4af804efb4752075b9fe2245e14e412";

const SPORK_ADDRESS_MAIN: &str = "jmMWigMfFVgfSzGKSeLhysB8kiA4fP5CkD";
const SPORK_ADDRESS_DEV: &str = "yjPtiKh2uwk3bDutTEA2q9mCtXyiZRWn55";
const SPORK_ADDRESS_REGTEST: &str = "yj949n1UH6fDhw6HtVE5VMj2iSTaSWBMcW";

/// The four chain flavours a node can run against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Test,
    Dev,
    Regtest,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Dev => "dev",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Test),
            "dev" => Ok(Network::Dev),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ChainError::new(
                ErrorCode::ChainErrUnknownNetwork,
                "expected main, test, dev or regtest",
            )),
        }
    }
}

/// Snapshot of historical transaction volume, used to estimate verification
/// progress while syncing.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainTxData {
    /// UNIX timestamp of the measurement.
    pub time: i64,
    /// Total transactions in the chain up to `time`.
    pub tx_count: u64,
    /// Estimated transactions per second after `time`.
    pub tx_rate: f64,
}

/// Complete description of one network.
///
/// Fields are public and plain data; the constructors are the only places
/// that populate them, and everything downstream reads them directly.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkParams {
    // identity
    pub network: Network,
    /// First four bytes of every p2p message on this network.
    pub message_start: [u8; 4],
    pub default_port: u16,
    /// Set only on devnets, where it also feeds the genesis coinbase.
    pub devnet_name: Option<String>,

    // genesis
    pub genesis: Block,
    pub genesis_hash: Hash256,
    /// Block at height 1 on devnets, mined at construction time.
    pub devnet_genesis: Option<Block>,
    pub devnet_genesis_hash: Option<Hash256>,

    // consensus rules
    pub subsidy_halving_interval: u32,
    pub bip34_height: u32,
    pub bip34_hash: Hash256,
    pub bip65_height: u32,
    pub bip66_height: u32,
    pub dip0001_height: u32,
    pub pow_limit: Hash256,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    /// Heights at which the two legacy difficulty filters hand over.
    pub pow_kgw_height: u32,
    pub pow_dgw_height: u32,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: [BitDeployment; DEPLOYMENT_COUNT],
    pub min_chain_work: Hash256,
    pub assume_valid: Hash256,

    // masternodes and governance
    pub masternode_payments_start_block: u32,
    pub masternode_payments_increase_block: u32,
    pub masternode_payments_increase_period: u32,
    pub instant_send_confirmations_required: u32,
    pub instant_send_keep_lock: u32,
    pub budget_payments_start_block: u32,
    pub budget_payments_cycle_blocks: u32,
    pub budget_payments_window_blocks: u32,
    pub superblock_start_block: u32,
    pub superblock_start_hash: Hash256,
    pub superblock_cycle: u32,
    pub governance_min_quorum: u32,
    pub governance_filter_elements: u32,
    pub masternode_minimum_confirmations: u32,

    // address and key encoding
    pub pubkey_address_prefix: u8,
    pub script_address_prefix: u8,
    pub secret_key_prefix: u8,
    pub ext_public_key_prefix: [u8; 4],
    pub ext_secret_key_prefix: [u8; 4],
    /// BIP44 coin type for hierarchical key derivation.
    pub ext_coin_type: u32,

    // operational
    pub checkpoints: Checkpoints,
    pub chain_tx_data: ChainTxData,
    pub dns_seeds: Vec<String>,
    pub fixed_seeds: Vec<SocketAddr>,
    /// Key allowed to sign network-wide alert messages; empty disables alerts.
    pub alert_key: Vec<u8>,
    pub spork_address: &'static str,
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub allow_multiple_addresses_from_group: bool,
    pub allow_multiple_ports: bool,
    pub pool_max_transactions: u32,
    pub fulfilled_request_expire_time: i64,
    pub prune_after_height: u64,
}

impl NetworkParams {
    /// Schedule for one versionbits deployment.
    pub fn deployment(&self, d: Deployment) -> &BitDeployment {
        &self.deployments[d.index()]
    }

    /// Signalling window for `d`, falling back to the network-wide window.
    pub fn deployment_window_size(&self, d: Deployment) -> u32 {
        self.deployments[d.index()]
            .window_size
            .unwrap_or(self.miner_confirmation_window)
    }

    /// Activation threshold for `d`, falling back to the network-wide
    /// threshold.
    pub fn deployment_threshold(&self, d: Deployment) -> u32 {
        self.deployments[d.index()]
            .threshold
            .unwrap_or(self.rule_change_activation_threshold)
    }

    /// Blocks between difficulty retargets under the original schedule.
    pub fn difficulty_adjustment_interval(&self) -> u32 {
        (self.pow_target_timespan / self.pow_target_spacing) as u32
    }
}

fn pinned_hash(hex: &str) -> Hash256 {
    hash_from_hex(hex).expect("pinned hash hex")
}

fn checkpoint_genesis() -> Checkpoints {
    Checkpoints::from_entries(vec![(0, pinned_hash(CHECKPOINT_0))])
        .expect("genesis checkpoint table")
}

/// Cross-field sanity checks shared by every constructor.
fn validate(params: &NetworkParams) {
    assert!(
        params.superblock_start_block > params.budget_payments_start_block,
        "superblocks must start after budget payments on {}",
        params.network
    );
    let mut bits_seen: u32 = 0;
    for dep in &params.deployments {
        assert!(dep.bit <= 28, "versionbit {} out of range", dep.bit);
        assert_eq!(
            bits_seen & (1u32 << dep.bit),
            0,
            "versionbit {} reused",
            dep.bit
        );
        bits_seen |= 1u32 << dep.bit;
        assert!(
            dep.timeout >= dep.start_time,
            "deployment timeout precedes its start time"
        );
    }
    assert_eq!(
        is_zero_hash(&params.min_chain_work),
        is_zero_hash(&params.assume_valid),
        "minimum chain work and assumed-valid block must be set together"
    );
}

/// Parameters for the production network.
pub fn main_params() -> NetworkParams {
    let genesis = default_genesis_block(1_532_004_360, 1_782_883, 0x1e0ffff0, 1, 20 * COIN);
    let genesis_hash = genesis.hash();
    assert_eq!(
        hash_to_hex(&genesis_hash),
        MAIN_GENESIS_HASH,
        "main genesis hash diverged from its pinned identity"
    );
    assert_eq!(
        hash_to_hex(&genesis.header.merkle_root),
        MAIN_GENESIS_MERKLE,
        "main genesis merkle root diverged from its pinned identity"
    );

    let params = NetworkParams {
        network: Network::Main,
        message_start: [0xf5, 0xe1, 0xb7, 0xda],
        default_port: 7233,
        devnet_name: None,

        genesis,
        genesis_hash,
        devnet_genesis: None,
        devnet_genesis_hash: None,

        subsidy_halving_interval: 1_051_200,
        // BIP34 is enforced from the start; the hash is left unset upstream.
        bip34_height: 101,
        bip34_hash: ZERO_HASH,
        bip65_height: 0,
        bip66_height: 0,
        dip0001_height: 2000,
        pow_limit: pinned_hash(POW_LIMIT_RETARGET),
        pow_target_timespan: 24 * 60 * 60,
        pow_target_spacing: 2 * 60,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        pow_kgw_height: 15_200,
        pow_dgw_height: 34_140,
        // 75% of the 144-block window
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: [
            BitDeployment::new(28, 1_536_056_513, 1_536_056_514),
            BitDeployment::new(0, 1_536_056_513, 1_536_056_514),
            BitDeployment::new(1, 1_536_056_513, 1_536_056_514),
            BitDeployment::new(2, 1_536_056_513, 1_536_056_514),
        ],
        min_chain_work: ZERO_HASH,
        assume_valid: ZERO_HASH,

        masternode_payments_start_block: 1_051_200,
        masternode_payments_increase_block: 350,
        masternode_payments_increase_period: 10,
        instant_send_confirmations_required: 2,
        instant_send_keep_lock: 6,
        budget_payments_start_block: 1000,
        budget_payments_cycle_blocks: 50,
        budget_payments_window_blocks: 10,
        // one superblock cycle every ten blocks, starting two halvings in
        superblock_start_block: 2 * 1_051_200,
        superblock_start_hash: ZERO_HASH,
        superblock_cycle: 10,
        governance_min_quorum: 1,
        governance_filter_elements: 100,
        masternode_minimum_confirmations: 1,

        pubkey_address_prefix: 106,
        script_address_prefix: 19,
        secret_key_prefix: 115,
        ext_public_key_prefix: [0x04, 0x35, 0x87, 0xcf],
        ext_secret_key_prefix: [0x04, 0x35, 0x83, 0x94],
        ext_coin_type: 1,

        checkpoints: checkpoint_genesis(),
        chain_tx_data: ChainTxData {
            time: 0,
            tx_count: 0,
            tx_rate: 0.0,
        },
        dns_seeds: vec![
            "dns1.sqoin.us".to_string(),
            "dns2.sqoin.us".to_string(),
            "dns3.sqoin.us".to_string(),
        ],
        fixed_seeds: Vec::new(),
        alert_key: Vec::new(),
        spork_address: SPORK_ADDRESS_MAIN,
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        allow_multiple_addresses_from_group: false,
        allow_multiple_ports: false,
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 5 * 60,
        prune_after_height: 1000,
    };
    validate(&params);
    params
}

/// Parameters for the public test network.
pub fn test_params() -> NetworkParams {
    let genesis = default_genesis_block(1_536_156_416, 3_031_416, 0x1e0ffff0, 1, 30 * COIN);
    let genesis_hash = genesis.hash();
    assert_eq!(
        hash_to_hex(&genesis_hash),
        TEST_GENESIS_HASH,
        "test genesis hash diverged from its pinned identity"
    );
    assert_eq!(
        hash_to_hex(&genesis.header.merkle_root),
        TEST_GENESIS_MERKLE,
        "test genesis merkle root diverged from its pinned identity"
    );

    let params = NetworkParams {
        network: Network::Test,
        message_start: [0xca, 0xe4, 0xa5, 0xf1],
        default_port: 7288,
        devnet_name: None,

        genesis,
        genesis_hash,
        devnet_genesis: None,
        devnet_genesis_hash: None,

        subsidy_halving_interval: 210_240,
        bip34_height: 76,
        bip34_hash: ZERO_HASH,
        bip65_height: 2431,
        bip66_height: 2075,
        dip0001_height: 5500,
        pow_limit: pinned_hash(POW_LIMIT_RETARGET),
        pow_target_timespan: 24 * 60 * 60,
        pow_target_spacing: 60 * 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        pow_kgw_height: 4001,
        pow_dgw_height: 4001,
        // 75% of the 2016-block window
        rule_change_activation_threshold: 1512,
        miner_confirmation_window: 2016,
        deployments: [
            BitDeployment::new(28, 1_199_145_601, 1_230_767_999),
            BitDeployment::new(0, 1_506_556_800, 1_538_092_800),
            BitDeployment::with_window(1, 1_505_692_800, 1_537_228_800, 100, 50),
            BitDeployment::with_window(2, 1_517_792_400, 1_549_328_400, 100, 50),
        ],
        min_chain_work: pinned_hash(TEST_MIN_CHAIN_WORK),
        assume_valid: pinned_hash(TEST_ASSUME_VALID),

        masternode_payments_start_block: 4010,
        masternode_payments_increase_block: 4030,
        masternode_payments_increase_period: 10,
        instant_send_confirmations_required: 2,
        instant_send_keep_lock: 6,
        budget_payments_start_block: 4100,
        budget_payments_cycle_blocks: 50,
        budget_payments_window_blocks: 10,
        // superblocks can be issued hourly on testnet
        superblock_start_block: 4200,
        superblock_start_hash: ZERO_HASH,
        superblock_cycle: 24,
        governance_min_quorum: 1,
        governance_filter_elements: 500,
        masternode_minimum_confirmations: 1,

        pubkey_address_prefix: 106,
        script_address_prefix: 19,
        secret_key_prefix: 115,
        ext_public_key_prefix: [0x04, 0x35, 0x87, 0xcf],
        ext_secret_key_prefix: [0x04, 0x35, 0x83, 0x94],
        ext_coin_type: 1,

        checkpoints: checkpoint_genesis(),
        chain_tx_data: ChainTxData {
            time: 0,
            tx_count: 0,
            tx_rate: 0.0,
        },
        dns_seeds: vec!["dns1.testnet.sqoin.us".to_string()],
        fixed_seeds: Vec::new(),
        alert_key: hex::decode(ALERT_KEY_TESTNETS).expect("alert key hex"),
        spork_address: SPORK_ADDRESS_MAIN,
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        allow_multiple_addresses_from_group: false,
        allow_multiple_ports: false,
        pool_max_transactions: 3,
        // fulfilled requests expire in 5 minutes
        fulfilled_request_expire_time: 5 * 60,
        prune_after_height: 1000,
    };
    validate(&params);
    params
}

/// Parameters for an ephemeral developer network named `devnet_name`.
///
/// Devnets share a permissive base genesis and are told apart by a second
/// block mined here at construction time, which commits to the devnet name.
/// Fails only if no nonce satisfies the (trivial) devnet target.
pub fn dev_params(devnet_name: &str) -> Result<NetworkParams, ChainError> {
    let genesis = default_genesis_block(1_417_713_337, 1_096_447, 0x207fffff, 1, 50 * COIN);
    let genesis_hash = genesis.hash();
    let devnet_genesis = find_devnet_genesis_block(&genesis, devnet_name, 50 * COIN)?;
    let devnet_genesis_hash = devnet_genesis.hash();
    let devnet_genesis_time = i64::from(devnet_genesis.header.time);

    let params = NetworkParams {
        network: Network::Dev,
        message_start: [0xe2, 0xca, 0xff, 0xce],
        default_port: 19_999,
        devnet_name: Some(devnet_name.to_string()),

        genesis,
        genesis_hash,
        devnet_genesis: Some(devnet_genesis),
        devnet_genesis_hash: Some(devnet_genesis_hash),

        subsidy_halving_interval: 210_240,
        // activated immediately on devnet
        bip34_height: 1,
        bip34_hash: ZERO_HASH,
        bip65_height: 1,
        bip66_height: 1,
        dip0001_height: 2,
        pow_limit: pinned_hash(POW_LIMIT_PERMISSIVE),
        pow_target_timespan: 24 * 60 * 60,
        pow_target_spacing: 2 * 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        pow_kgw_height: 4001,
        pow_dgw_height: 4001,
        rule_change_activation_threshold: 1512,
        miner_confirmation_window: 2016,
        deployments: [
            BitDeployment::new(28, 1_199_145_601, 1_230_767_999),
            BitDeployment::new(0, 1_506_556_800, 1_538_092_800),
            BitDeployment::with_window(1, 1_505_692_800, 1_537_228_800, 100, 50),
            BitDeployment::with_window(2, 1_517_792_400, 1_549_328_400, 100, 50),
        ],
        min_chain_work: ZERO_HASH,
        assume_valid: ZERO_HASH,

        masternode_payments_start_block: 4010,
        masternode_payments_increase_block: 4030,
        masternode_payments_increase_period: 10,
        instant_send_confirmations_required: 2,
        instant_send_keep_lock: 6,
        budget_payments_start_block: 4100,
        budget_payments_cycle_blocks: 50,
        budget_payments_window_blocks: 10,
        superblock_start_block: 4200,
        superblock_start_hash: ZERO_HASH,
        superblock_cycle: 24,
        governance_min_quorum: 1,
        governance_filter_elements: 500,
        masternode_minimum_confirmations: 1,

        pubkey_address_prefix: 106,
        script_address_prefix: 19,
        secret_key_prefix: 239,
        ext_public_key_prefix: [0x04, 0x35, 0x87, 0xcf],
        ext_secret_key_prefix: [0x04, 0x35, 0x83, 0x94],
        ext_coin_type: 1,

        checkpoints: Checkpoints::from_entries(vec![
            (0, pinned_hash(CHECKPOINT_0)),
            (1, devnet_genesis_hash),
        ])
        .expect("devnet checkpoint table"),
        chain_tx_data: ChainTxData {
            time: devnet_genesis_time,
            tx_count: 2,
            tx_rate: 0.01,
        },
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        alert_key: hex::decode(ALERT_KEY_TESTNETS).expect("alert key hex"),
        spork_address: SPORK_ADDRESS_DEV,
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        allow_multiple_addresses_from_group: true,
        allow_multiple_ports: true,
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 5 * 60,
        prune_after_height: 1000,
    };
    validate(&params);
    Ok(params)
}

/// Parameters for local regression testing.
pub fn regtest_params() -> NetworkParams {
    let genesis = default_genesis_block(1_417_713_337, 1_096_447, 0x207fffff, 1, 50 * COIN);
    let genesis_hash = genesis.hash();

    let params = NetworkParams {
        network: Network::Regtest,
        message_start: [0xfc, 0xc1, 0xb7, 0xdc],
        default_port: 19_994,
        devnet_name: None,

        genesis,
        genesis_hash,
        devnet_genesis: None,
        devnet_genesis_hash: None,

        subsidy_halving_interval: 150,
        // BIP34 stays inactive on regtest
        bip34_height: 100_000_000,
        bip34_hash: ZERO_HASH,
        bip65_height: 1351,
        bip66_height: 1251,
        dip0001_height: 2000,
        pow_limit: pinned_hash(POW_LIMIT_PERMISSIVE),
        pow_target_timespan: 24 * 60 * 60,
        // two and a half minutes
        pow_target_spacing: 150,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        pow_kgw_height: 15_200,
        pow_dgw_height: 34_140,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: [
            BitDeployment::new(28, 0, NO_TIMEOUT),
            BitDeployment::new(0, 0, NO_TIMEOUT),
            BitDeployment::new(1, 0, NO_TIMEOUT),
            BitDeployment::new(2, 0, NO_TIMEOUT),
        ],
        min_chain_work: ZERO_HASH,
        assume_valid: ZERO_HASH,

        masternode_payments_start_block: 240,
        masternode_payments_increase_block: 350,
        masternode_payments_increase_period: 10,
        instant_send_confirmations_required: 2,
        instant_send_keep_lock: 6,
        budget_payments_start_block: 1000,
        budget_payments_cycle_blocks: 50,
        budget_payments_window_blocks: 10,
        superblock_start_block: 1500,
        superblock_start_hash: ZERO_HASH,
        superblock_cycle: 10,
        governance_min_quorum: 1,
        governance_filter_elements: 100,
        masternode_minimum_confirmations: 1,

        pubkey_address_prefix: 140,
        script_address_prefix: 19,
        secret_key_prefix: 239,
        ext_public_key_prefix: [0x04, 0x35, 0x87, 0xcf],
        ext_secret_key_prefix: [0x04, 0x35, 0x83, 0x94],
        ext_coin_type: 1,

        checkpoints: checkpoint_genesis(),
        chain_tx_data: ChainTxData {
            time: 0,
            tx_count: 0,
            tx_rate: 0.0,
        },
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        alert_key: Vec::new(),
        spork_address: SPORK_ADDRESS_REGTEST,
        mining_requires_peers: false,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        allow_multiple_addresses_from_group: true,
        allow_multiple_ports: true,
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 5 * 60,
        prune_after_height: 1000,
    };
    validate(&params);
    params
}

/// Regtest parameters with the versionbits schedule left open for tests to
/// rewrite, mirroring the command-line overrides regression suites rely on.
#[derive(Clone, Debug)]
pub struct RegtestParams {
    params: NetworkParams,
}

impl RegtestParams {
    pub fn new() -> RegtestParams {
        RegtestParams {
            params: regtest_params(),
        }
    }

    /// Overrides the activation window of one deployment. No cross-checks
    /// are applied; tests are free to schedule deployments in the past.
    pub fn update_deployment_window(&mut self, d: Deployment, start_time: i64, timeout: i64) {
        let dep = &mut self.params.deployments[d.index()];
        dep.start_time = start_time;
        dep.timeout = timeout;
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    pub fn into_params(self) -> NetworkParams {
        self.params
    }
}

impl Default for RegtestParams {
    fn default() -> Self {
        RegtestParams::new()
    }
}
