//! Network selection.
//!
//! A [`Registry`] owns one shared parameter set per network and hands out
//! [`ChainContext`] handles bound to a single network. Callers keep the
//! registry (or a context cloned from it) explicitly; nothing here touches
//! process-global state, so two registries with different devnet names can
//! coexist in one process.

use std::ops::Deref;
use std::sync::Arc;

use log::debug;
use once_cell::sync::OnceCell;

use crate::error::ChainError;
use crate::params::{
    dev_params, main_params, regtest_params, test_params, Network, NetworkParams,
};

/// Devnet name used when the caller does not supply one.
pub const DEFAULT_DEVNET_NAME: &str = "devnet";

/// Shared parameter sets for every supported network.
///
/// The fixed networks are built eagerly, which also runs their genesis
/// self-checks up front. The devnet is mined on first request and cached
/// for the life of the registry.
pub struct Registry {
    main: Arc<NetworkParams>,
    test: Arc<NetworkParams>,
    regtest: Arc<NetworkParams>,
    dev: OnceCell<Arc<NetworkParams>>,
    devnet_name: String,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::with_devnet_name(DEFAULT_DEVNET_NAME)
    }

    pub fn with_devnet_name(devnet_name: &str) -> Registry {
        Registry {
            main: Arc::new(main_params()),
            test: Arc::new(test_params()),
            regtest: Arc::new(regtest_params()),
            dev: OnceCell::new(),
            devnet_name: devnet_name.to_string(),
        }
    }

    /// Parameters for `network`. The first devnet request mines the devnet
    /// genesis; concurrent callers block until one of them wins and all
    /// receive the same cached value.
    pub fn get(&self, network: Network) -> Result<Arc<NetworkParams>, ChainError> {
        match network {
            Network::Main => Ok(self.main.clone()),
            Network::Test => Ok(self.test.clone()),
            Network::Regtest => Ok(self.regtest.clone()),
            Network::Dev => self
                .dev
                .get_or_try_init(|| dev_params(&self.devnet_name).map(Arc::new))
                .cloned(),
        }
    }

    /// Parameters for the network named `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<NetworkParams>, ChainError> {
        self.get(name.parse()?)
    }

    /// Binds the named network into a [`ChainContext`].
    pub fn select(&self, name: &str) -> Result<ChainContext, ChainError> {
        let context = ChainContext::new(self.lookup(name)?);
        debug!("selected {} network", context.network());
        Ok(context)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

/// Handle to the parameters of one selected network.
///
/// Cheap to clone and pass across threads; derefs to [`NetworkParams`] so
/// call sites read naturally.
#[derive(Clone, Debug)]
pub struct ChainContext {
    params: Arc<NetworkParams>,
}

impl ChainContext {
    pub fn new(params: Arc<NetworkParams>) -> ChainContext {
        ChainContext { params }
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    pub fn network(&self) -> Network {
        self.params.network
    }
}

impl Deref for ChainContext {
    type Target = NetworkParams;

    fn deref(&self) -> &Self::Target {
        &self.params
    }
}
