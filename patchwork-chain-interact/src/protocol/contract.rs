use alloy::sol;

sol!(
    // Patchwork Protocol governance surface
    struct FeeConfig {
        uint256 mintBp;
        uint256 patchBp;
        uint256 assignBp;
    }

    function proposeProtocolFeeConfig(FeeConfig memory config) external;
    function addBanker(address addr) external;
    function removeBanker(address addr) external;
    function withdraw(string memory scopeName, uint256 amount) external;

    // Safe wallet surface
    function nonce() public view returns (uint256 nonce);
    function getThreshold() external view returns (uint256 threshold);
    function getOwners() external view returns (address[] memory owners);

    function getTransactionHash(
        address to,
        uint256 value,
        bytes calldata data,
        uint8 operation,
        uint256 safeTxGas,
        uint256 baseGas,
        uint256 gasPrice,
        address gasToken,
        address refundReceiver,
        uint256 _nonce
    ) public view returns (bytes32);

    // EIP-712 payload the Safe commits to; field order must match the
    // deployed contract exactly
    struct SafeTx {
        address to;
        uint256 value;
        bytes data;
        uint8 operation;
        uint256 safeTxGas;
        uint256 baseGas;
        uint256 gasPrice;
        address gasToken;
        address refundReceiver;
        uint256 nonce;
    }
);
