pub mod block;
pub mod checkpoints;
pub mod deployments;
pub mod error;
pub mod genesis;
pub mod hash;
pub mod merkle;
pub mod params;
pub mod pow;
pub mod registry;
pub mod script;
pub mod tx;

pub use block::{block_hash, Block, BlockHeader, BLOCK_HEADER_BYTES};
pub use checkpoints::Checkpoints;
pub use deployments::{BitDeployment, Deployment, DEPLOYMENT_COUNT, NO_TIMEOUT};
pub use error::{ChainError, ErrorCode};
pub use genesis::{
    build_devnet_genesis_block, build_genesis_block, default_genesis_block,
    find_devnet_genesis_block,
};
pub use hash::{hash_from_hex, hash_to_hex, sha256d, Hash256, ZERO_HASH};
pub use merkle::merkle_root_txids;
pub use params::{
    dev_params, main_params, regtest_params, test_params, ChainTxData, Network, NetworkParams,
    RegtestParams, COIN,
};
pub use pow::{expand_compact, hash_meets_target};
pub use registry::{ChainContext, Registry, DEFAULT_DEVNET_NAME};
pub use script::Script;
pub use tx::{OutPoint, Transaction, TxIn, TxOut};


#[cfg(test)]
mod params_tests;
