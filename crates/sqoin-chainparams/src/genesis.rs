use log::debug;

use crate::block::{Block, BlockHeader};
use crate::error::{ChainError, ErrorCode};
use crate::hash::{Hash256, ZERO_HASH};
use crate::merkle::merkle_root_txids;
use crate::pow::hash_meets_target;
use crate::script::{Script, OP_CHECKSIG, OP_RETURN};
use crate::tx::Transaction;

/// Headline embedded in the primary coinbase, dating the chain's origin.
pub const GENESIS_ORIGIN: &str =
    "Wired 09/Jan/2014 The Grand Experiment Goes Live: Overstock.com Is Now Accepting Bitcoins";

/// Uncompressed key paid by the primary genesis output. The output cannot
/// actually be spent; no prior block exists to give it spendable history.
const GENESIS_OUTPUT_KEY: &str =
    "040184710fa689ad5023690c80f3a49c8f13f8d45b8c857fbcbc8bc4a8e4d3eb4b10f4d4604fa08dce601aaf0f470216fe1b51850b4acf21b179c45070ac7b03a9";

/// Block version that marks a devnet-chained genesis.
pub const DEVNET_GENESIS_VERSION: i32 = 4;

/// Builds a primary genesis block from explicit parts. The merkle root is
/// always recomputed from the coinbase; the previous-block hash is null.
pub fn build_genesis_block(
    origin: &str,
    output_script: Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: u64,
) -> Block {
    let script_sig = Script::new()
        .push_int(486604799)
        .push_scriptnum(4)
        .push_data(origin.as_bytes());
    let tx = Transaction::coinbase(script_sig, reward, output_script);
    assemble(version, ZERO_HASH, tx, time, bits, nonce)
}

/// Primary genesis with the chain's fixed origin headline and output key.
pub fn default_genesis_block(time: u32, nonce: u32, bits: u32, version: i32, reward: u64) -> Block {
    let key = hex::decode(GENESIS_OUTPUT_KEY).expect("genesis output key hex");
    let output_script = Script::new().push_data(&key).push_opcode(OP_CHECKSIG);
    build_genesis_block(GENESIS_ORIGIN, output_script, time, nonce, bits, version, reward)
}

/// Builds a devnet genesis chained to a prior genesis hash. The coinbase
/// carries a height placeholder plus the devnet name; the output is a bare
/// OP_RETURN discard.
pub fn build_devnet_genesis_block(
    prev_block_hash: Hash256,
    devnet_name: &str,
    time: u32,
    nonce: u32,
    bits: u32,
    reward: u64,
) -> Block {
    assert!(!devnet_name.is_empty(), "devnet name must not be empty");

    let script_sig = Script::new().push_int(1).push_data(devnet_name.as_bytes());
    let output_script = Script::new().push_opcode(OP_RETURN);
    let tx = Transaction::coinbase(script_sig, reward, output_script);
    assemble(
        DEVNET_GENESIS_VERSION,
        prev_block_hash,
        tx,
        time,
        bits,
        nonce,
    )
}

/// Searches the 32-bit nonce space for a devnet genesis whose hash meets
/// the target carried over from the prior genesis. Timestamp policy is
/// fixed: one second after the prior block.
///
/// The devnet difficulty is intentionally low, so the scan is expected to
/// succeed within a handful of iterations; running out of nonces means the
/// difficulty constants are wrong for the hash function and startup must
/// not continue.
pub fn find_devnet_genesis_block(
    prev: &Block,
    devnet_name: &str,
    reward: u64,
) -> Result<Block, ChainError> {
    let bits = prev.header.bits;
    let mut block = build_devnet_genesis_block(
        prev.hash(),
        devnet_name,
        prev.header.time + 1,
        0,
        bits,
        reward,
    );

    for nonce in 0..u32::MAX {
        block.header.nonce = nonce;
        if hash_meets_target(&block.hash(), bits) {
            debug!("devnet genesis for {devnet_name} found at nonce {nonce}");
            return Ok(block);
        }
    }

    Err(ChainError::new(
        ErrorCode::ChainErrNonceExhausted,
        "no devnet genesis nonce meets the target",
    ))
}

fn assemble(
    version: i32,
    prev_block_hash: Hash256,
    tx: Transaction,
    time: u32,
    bits: u32,
    nonce: u32,
) -> Block {
    let merkle_root = merkle_root_txids(&[tx.txid()]);
    Block {
        header: BlockHeader {
            version,
            prev_block_hash,
            merkle_root,
            time,
            bits,
            nonce,
        },
        txs: vec![tx],
    }
}
