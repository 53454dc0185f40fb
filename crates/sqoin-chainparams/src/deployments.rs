pub const DEPLOYMENT_COUNT: usize = 4;

/// Timeout paired with a zero start time to keep a deployment's signaling
/// window open indefinitely (regtest).
pub const NO_TIMEOUT: i64 = 999_999_999_999;

/// The soft-fork deployments this chain knows about. Closed set; schedule
/// arrays are indexed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deployment {
    TestDummy,
    Csv,
    Dip0001,
    Bip147,
}

impl Deployment {
    pub const ALL: [Deployment; DEPLOYMENT_COUNT] = [
        Deployment::TestDummy,
        Deployment::Csv,
        Deployment::Dip0001,
        Deployment::Bip147,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Deployment::TestDummy => "TESTDUMMY",
            Deployment::Csv => "CSV",
            Deployment::Dip0001 => "DIP0001",
            Deployment::Bip147 => "BIP147",
        }
    }
}

/// One version-bit signaling rule: which bit to watch and when the window
/// is open. Window size and threshold are only set where a network
/// overrides the set-wide defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitDeployment {
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
    pub window_size: Option<u32>,
    pub threshold: Option<u32>,
}

impl BitDeployment {
    pub fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        Self {
            bit,
            start_time,
            timeout,
            window_size: None,
            threshold: None,
        }
    }

    pub fn with_window(bit: u8, start_time: i64, timeout: i64, window_size: u32, threshold: u32) -> Self {
        Self {
            bit,
            start_time,
            timeout,
            window_size: Some(window_size),
            threshold: Some(threshold),
        }
    }
}
