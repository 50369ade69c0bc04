pub const BASE_TX_SERVICE_URL: &str = "https://safe-transaction-base.safe.global";
pub const SEPOLIA_TX_SERVICE_URL: &str = "https://safe-transaction-sepolia.safe.global";

/// Shown next to pending proposals in co-signer wallets.
pub const PROPOSAL_ORIGIN: &str = "Patchwork Management";
