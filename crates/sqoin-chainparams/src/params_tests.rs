use core::str::FromStr;

use crate::checkpoints::Checkpoints;
use crate::deployments::{Deployment, NO_TIMEOUT};
use crate::error::ErrorCode;
use crate::hash::{hash_to_hex, is_zero_hash, ZERO_HASH};
use crate::params::{
    dev_params, main_params, regtest_params, test_params, ChainTxData, Network, NetworkParams,
    RegtestParams, COIN,
};

const CHECKPOINT_0: &str = "000008ca1832a4baf228eb1553c03d3a2c8e02399550dd6ea8d65cec3ef23d2e";

fn networks() -> Vec<NetworkParams> {
    vec![
        main_params(),
        test_params(),
        dev_params("devnet").expect("devnet"),
        regtest_params(),
    ]
}

#[test]
fn network_identity_bytes() {
    let main = main_params();
    assert_eq!(main.network, Network::Main);
    assert_eq!(main.message_start, [0xf5, 0xe1, 0xb7, 0xda]);
    assert_eq!(main.default_port, 7233);

    let test = test_params();
    assert_eq!(test.network, Network::Test);
    assert_eq!(test.message_start, [0xca, 0xe4, 0xa5, 0xf1]);
    assert_eq!(test.default_port, 7288);

    let dev = dev_params("devnet").expect("devnet");
    assert_eq!(dev.network, Network::Dev);
    assert_eq!(dev.message_start, [0xe2, 0xca, 0xff, 0xce]);
    assert_eq!(dev.default_port, 19_999);

    let regtest = regtest_params();
    assert_eq!(regtest.network, Network::Regtest);
    assert_eq!(regtest.message_start, [0xfc, 0xc1, 0xb7, 0xdc]);
    assert_eq!(regtest.default_port, 19_994);
}

#[test]
fn message_starts_are_distinct() {
    let nets = networks();
    for i in 0..nets.len() {
        for j in i + 1..nets.len() {
            assert_ne!(nets[i].message_start, nets[j].message_start);
        }
    }
}

#[test]
fn genesis_hashes_match_pinned_identities() {
    assert_eq!(
        hash_to_hex(&main_params().genesis_hash),
        "a015e0b70aa530fb1254e8de51c8b93c1b54096fd826d3f298b38095f68dbf75"
    );
    assert_eq!(
        hash_to_hex(&test_params().genesis_hash),
        "cd253e29bb98899e0fb4c36efd7f10c2c732b7692f40b441f2040085c53bf4f0"
    );
    // dev and regtest share the permissive base genesis
    let dev = dev_params("devnet").expect("devnet");
    let regtest = regtest_params();
    assert_eq!(dev.genesis_hash, regtest.genesis_hash);
    assert_eq!(
        hash_to_hex(&regtest.genesis_hash),
        "352e09fd884cef12f39f91fe08475f15841d29ec006d6f081c74ac78a6ccf367"
    );
}

#[test]
fn genesis_blocks_are_internally_consistent() {
    for params in networks() {
        assert_eq!(params.genesis.hash(), params.genesis_hash);
        assert_eq!(params.genesis.txs.len(), 1);
        assert_eq!(
            params.genesis.header.merkle_root,
            params.genesis.txs[0].txid()
        );
        assert!(is_zero_hash(&params.genesis.header.prev_block_hash));
    }
}

#[test]
fn subsidy_and_reward_schedule() {
    assert_eq!(main_params().subsidy_halving_interval, 1_051_200);
    assert_eq!(test_params().subsidy_halving_interval, 210_240);
    assert_eq!(regtest_params().subsidy_halving_interval, 150);

    assert_eq!(main_params().genesis.txs[0].outputs[0].value, 20 * COIN);
    assert_eq!(test_params().genesis.txs[0].outputs[0].value, 30 * COIN);
    assert_eq!(regtest_params().genesis.txs[0].outputs[0].value, 50 * COIN);
}

#[test]
fn deployment_schedules() {
    let main = main_params();
    for d in Deployment::ALL {
        let dep = main.deployment(d);
        assert_eq!(dep.start_time, 1_536_056_513);
        assert_eq!(dep.timeout, 1_536_056_514);
    }
    assert_eq!(main.deployment(Deployment::TestDummy).bit, 28);
    assert_eq!(main.deployment(Deployment::Csv).bit, 0);
    assert_eq!(main.deployment(Deployment::Dip0001).bit, 1);
    assert_eq!(main.deployment(Deployment::Bip147).bit, 2);

    let regtest = regtest_params();
    for d in Deployment::ALL {
        let dep = regtest.deployment(d);
        assert_eq!(dep.start_time, 0);
        assert_eq!(dep.timeout, NO_TIMEOUT);
    }

    // the dev schedule mirrors the public test network
    let dev = dev_params("devnet").expect("devnet");
    assert_eq!(dev.deployments, test_params().deployments);
}

#[test]
fn deployment_window_falls_back_to_network_default() {
    let test = test_params();
    assert_eq!(test.deployment_window_size(Deployment::Dip0001), 100);
    assert_eq!(test.deployment_threshold(Deployment::Dip0001), 50);
    assert_eq!(test.deployment_window_size(Deployment::Csv), 2016);
    assert_eq!(test.deployment_threshold(Deployment::Csv), 1512);

    let main = main_params();
    for d in Deployment::ALL {
        assert_eq!(main.deployment_window_size(d), 144);
        assert_eq!(main.deployment_threshold(d), 108);
    }
}

#[test]
fn difficulty_adjustment_intervals() {
    assert_eq!(main_params().difficulty_adjustment_interval(), 720);
    assert_eq!(test_params().difficulty_adjustment_interval(), 24);
    assert_eq!(regtest_params().difficulty_adjustment_interval(), 576);
}

#[test]
fn pow_limits_and_flags() {
    let main = main_params();
    assert!(!main.pow_allow_min_difficulty_blocks);
    assert!(!main.pow_no_retargeting);
    assert_eq!(
        hash_to_hex(&main.pow_limit),
        "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    );
    assert_eq!(main.pow_kgw_height, 15_200);
    assert_eq!(main.pow_dgw_height, 34_140);

    let test = test_params();
    assert!(test.pow_allow_min_difficulty_blocks);
    assert!(!test.pow_no_retargeting);
    assert_eq!(test.pow_limit, main.pow_limit);
    assert_eq!(test.pow_kgw_height, 4001);
    assert_eq!(test.pow_dgw_height, 4001);

    let regtest = regtest_params();
    assert!(regtest.pow_allow_min_difficulty_blocks);
    assert!(regtest.pow_no_retargeting);
    assert_eq!(
        hash_to_hex(&regtest.pow_limit),
        "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    );
    assert_eq!(dev_params("devnet").expect("devnet").pow_limit, regtest.pow_limit);
}

#[test]
fn chain_work_anchors() {
    let test = test_params();
    assert_eq!(
        hash_to_hex(&test.min_chain_work),
        "000000000000000000000000000000000000000000000000003be69c34b1244f"
    );
    assert_eq!(
        hash_to_hex(&test.assume_valid),
        "0000000004a7878409189b7a8f75b3815d9b8c45ee8f79955a6c727d83bddb04"
    );
    for params in [main_params(), regtest_params()] {
        assert!(is_zero_hash(&params.min_chain_work));
        assert!(is_zero_hash(&params.assume_valid));
    }
}

#[test]
fn governance_numbers() {
    let main = main_params();
    assert_eq!(main.masternode_payments_start_block, 1_051_200);
    assert_eq!(main.budget_payments_start_block, 1000);
    assert_eq!(main.superblock_start_block, 2 * 1_051_200);
    assert_eq!(main.superblock_cycle, 10);
    assert_eq!(main.governance_filter_elements, 100);

    let test = test_params();
    assert_eq!(test.masternode_payments_start_block, 4010);
    assert_eq!(test.masternode_payments_increase_block, 4030);
    assert_eq!(test.budget_payments_start_block, 4100);
    assert_eq!(test.superblock_start_block, 4200);
    assert_eq!(test.superblock_cycle, 24);
    assert_eq!(test.governance_filter_elements, 500);

    let regtest = regtest_params();
    assert_eq!(regtest.masternode_payments_start_block, 240);
    assert_eq!(regtest.superblock_start_block, 1500);

    for params in networks() {
        assert_eq!(params.instant_send_confirmations_required, 2);
        assert_eq!(params.instant_send_keep_lock, 6);
        assert_eq!(params.budget_payments_cycle_blocks, 50);
        assert_eq!(params.budget_payments_window_blocks, 10);
        assert_eq!(params.governance_min_quorum, 1);
        assert_eq!(params.masternode_minimum_confirmations, 1);
        assert_eq!(params.pool_max_transactions, 3);
        assert_eq!(params.fulfilled_request_expire_time, 5 * 60);
        assert!(params.superblock_start_block > params.budget_payments_start_block);
        assert!(is_zero_hash(&params.superblock_start_hash));
    }
}

#[test]
fn address_encoding_prefixes() {
    let main = main_params();
    assert_eq!(main.pubkey_address_prefix, 106);
    assert_eq!(main.secret_key_prefix, 115);
    assert_eq!(test_params().secret_key_prefix, 115);

    let dev = dev_params("devnet").expect("devnet");
    assert_eq!(dev.pubkey_address_prefix, 106);
    assert_eq!(dev.secret_key_prefix, 239);

    let regtest = regtest_params();
    assert_eq!(regtest.pubkey_address_prefix, 140);
    assert_eq!(regtest.secret_key_prefix, 239);

    for params in networks() {
        assert_eq!(params.script_address_prefix, 19);
        assert_eq!(params.ext_public_key_prefix, [0x04, 0x35, 0x87, 0xcf]);
        assert_eq!(params.ext_secret_key_prefix, [0x04, 0x35, 0x83, 0x94]);
        assert_eq!(params.ext_coin_type, 1);
    }
}

#[test]
fn seeds_and_alert_keys() {
    let main = main_params();
    assert_eq!(
        main.dns_seeds,
        ["dns1.sqoin.us", "dns2.sqoin.us", "dns3.sqoin.us"]
    );
    assert!(main.alert_key.is_empty());

    let test = test_params();
    assert_eq!(test.dns_seeds, ["dns1.testnet.sqoin.us"]);
    assert_eq!(test.alert_key.len(), 65);
    assert_eq!(test.alert_key[0], 0x04);

    let dev = dev_params("devnet").expect("devnet");
    assert!(dev.dns_seeds.is_empty());
    assert_eq!(dev.alert_key, test.alert_key);

    let regtest = regtest_params();
    assert!(regtest.dns_seeds.is_empty());
    assert!(regtest.alert_key.is_empty());

    for params in networks() {
        assert!(params.fixed_seeds.is_empty());
        assert_eq!(params.prune_after_height, 1000);
    }
}

#[test]
fn spork_addresses() {
    let main = main_params();
    assert_eq!(main.spork_address, "jmMWigMfFVgfSzGKSeLhysB8kiA4fP5CkD");
    assert_eq!(test_params().spork_address, main.spork_address);
    assert_eq!(
        dev_params("devnet").expect("devnet").spork_address,
        "yjPtiKh2uwk3bDutTEA2q9mCtXyiZRWn55"
    );
    assert_eq!(
        regtest_params().spork_address,
        "yj949n1UH6fDhw6HtVE5VMj2iSTaSWBMcW"
    );
}

#[test]
fn behaviour_flags() {
    let main = main_params();
    assert!(main.mining_requires_peers);
    assert!(!main.default_consistency_checks);
    assert!(main.require_standard);
    assert!(!main.mine_blocks_on_demand);
    assert!(!main.allow_multiple_addresses_from_group);
    assert!(!main.allow_multiple_ports);

    assert!(!test_params().require_standard);

    let dev = dev_params("devnet").expect("devnet");
    assert!(dev.mining_requires_peers);
    assert!(!dev.mine_blocks_on_demand);
    assert!(dev.allow_multiple_addresses_from_group);
    assert!(dev.allow_multiple_ports);

    let regtest = regtest_params();
    assert!(!regtest.mining_requires_peers);
    assert!(regtest.default_consistency_checks);
    assert!(!regtest.require_standard);
    assert!(regtest.mine_blocks_on_demand);
    assert!(regtest.allow_multiple_addresses_from_group);
    assert!(regtest.allow_multiple_ports);
}

#[test]
fn checkpoint_tables() {
    for params in networks() {
        let entries = params.checkpoints.entries();
        assert!(!entries.is_empty());
        for w in entries.windows(2) {
            assert!(w[0].0 < w[1].0);
        }
        assert_eq!(
            hash_to_hex(params.checkpoints.hash_at(0).expect("height 0")),
            CHECKPOINT_0
        );
    }
    assert_eq!(main_params().checkpoints.len(), 1);
}

#[test]
fn devnet_is_mined_and_checkpointed() {
    let dev = dev_params("mynet").expect("devnet");
    assert_eq!(dev.devnet_name.as_deref(), Some("mynet"));

    let devnet = dev.devnet_genesis.as_ref().expect("devnet genesis");
    let devnet_hash = dev.devnet_genesis_hash.expect("devnet genesis hash");
    assert_eq!(devnet.hash(), devnet_hash);
    assert_eq!(devnet.header.prev_block_hash, dev.genesis_hash);
    assert_eq!(devnet.header.time, dev.genesis.header.time + 1);
    assert_eq!(devnet.header.bits, dev.genesis.header.bits);

    assert_eq!(dev.checkpoints.hash_at(1), Some(&devnet_hash));
    assert_eq!(dev.checkpoints.len(), 2);

    assert_eq!(
        dev.chain_tx_data,
        ChainTxData {
            time: i64::from(devnet.header.time),
            tx_count: 2,
            tx_rate: 0.01,
        }
    );

    // fixed networks carry no devnet block
    for params in [main_params(), test_params(), regtest_params()] {
        assert!(params.devnet_name.is_none());
        assert!(params.devnet_genesis.is_none());
        assert!(params.devnet_genesis_hash.is_none());
    }
}

#[test]
#[should_panic(expected = "devnet name must not be empty")]
fn dev_params_rejects_empty_name() {
    let _ = dev_params("");
}

#[test]
fn network_names_round_trip() {
    for net in [Network::Main, Network::Test, Network::Dev, Network::Regtest] {
        assert_eq!(Network::from_str(net.as_str()).expect("parse"), net);
    }
    assert_eq!(Network::Main.to_string(), "main");

    let err = Network::from_str("bogus").unwrap_err();
    assert_eq!(err.code, ErrorCode::ChainErrUnknownNetwork);
    let err = Network::from_str("MAIN").unwrap_err();
    assert_eq!(err.code, ErrorCode::ChainErrUnknownNetwork);
}

#[test]
fn regtest_deployment_window_rewrite() {
    let mut regtest = RegtestParams::new();
    regtest.update_deployment_window(Deployment::Csv, 11, 22);

    let mut want = regtest_params();
    want.deployments[Deployment::Csv.index()].start_time = 11;
    want.deployments[Deployment::Csv.index()].timeout = 22;
    assert_eq!(regtest.params(), &want);

    // scheduling in the past is allowed here
    regtest.update_deployment_window(Deployment::Bip147, -1, -1);
    assert_eq!(
        regtest.params().deployment(Deployment::Bip147).start_time,
        -1
    );

    let owned = regtest.into_params();
    assert_eq!(owned.deployment(Deployment::Bip147).timeout, -1);
    assert_eq!(owned.network, Network::Regtest);
}

#[test]
fn checkpoints_reject_unsorted_heights() {
    let err = Checkpoints::from_entries(vec![(5, ZERO_HASH), (5, ZERO_HASH)]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ChainErrBadCheckpoints);

    let err = Checkpoints::from_entries(vec![(9, ZERO_HASH), (3, ZERO_HASH)]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ChainErrBadCheckpoints);

    let empty = Checkpoints::from_entries(Vec::new()).expect("empty");
    assert!(empty.is_empty());
    assert_eq!(empty.last(), None);
}
