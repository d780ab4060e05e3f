//! Contract ABI definitions for Safe v1.4.1 and the custody module

use alloy::sol;

sol! {
    /// Owner management surface of the Safe (OwnerManager)
    interface IOwnerManager {
        /// Replaces `oldOwner` with `newOwner` in the owner linked list
        function swapOwner(address prevOwner, address oldOwner, address newOwner) external;

        /// Adds a new owner at the head of the list and updates the threshold
        function addOwnerWithThreshold(address owner, uint256 _threshold) external;

        /// Unlinks an owner and updates the threshold
        function removeOwner(address prevOwner, address owner, uint256 _threshold) external;

        /// Updates the number of required confirmations
        function changeThreshold(uint256 _threshold) external;
    }

    /// Module management surface of the Safe (ModuleManager)
    interface IModuleManager {
        /// Executes a transaction on behalf of the Safe (callable by enabled modules)
        function execTransactionFromModule(
            address to,
            uint256 value,
            bytes memory data,
            uint8 operation
        ) external returns (bool success);

        /// Authorizes a module to execute transactions via the Safe
        function enableModule(address module) external;
    }

    /// Guard management surface of the Safe (GuardManager)
    interface IGuardManager {
        /// Installs a transaction guard checked before and after every execution
        function setGuard(address guard) external;
    }

    /// Maintenance surface of the custody module
    interface ICustodyModule {
        /// Applies a batch of 32-byte whitelist entries (removal markers
        /// followed by additions)
        function updateWhitelist(bytes[] memory entries) external;

        /// Sets the truncated name hash identifying the wallet
        function setNameHash(bytes32 nameHash) external;
    }

    /// MultiSend contract for batching multiple calls
    interface IMultiSend {
        /// Executes the packed transactions atomically
        /// @param transactions Packed encoding:
        ///        operation (1 byte) | to (20 bytes) | value (32 bytes) | data length (32 bytes) | data
        function multiSend(bytes memory transactions) external payable;
    }

    /// Safe setup call used to initialize a freshly deployed proxy
    interface ISafeSetup {
        function setup(
            address[] calldata _owners,
            uint256 _threshold,
            address to,
            bytes calldata data,
            address fallbackHandler,
            address paymentToken,
            uint256 payment,
            address payable paymentReceiver
        ) external;
    }
}

/// EIP-712 type hash for SafeTx struct
/// keccak256("SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)")
pub const SAFE_TX_TYPEHASH: [u8; 32] = [
    0xbb, 0x83, 0x10, 0xd4, 0x86, 0x36, 0x8d, 0xb6, 0xbd, 0x6f, 0x84, 0x94, 0x02, 0xfd, 0xd7, 0x3a,
    0xd5, 0x3d, 0x31, 0x6b, 0x5a, 0x4b, 0x26, 0x44, 0xad, 0x6e, 0xfe, 0x0f, 0x94, 0x12, 0x86, 0xd8,
];

/// EIP-712 domain type hash for Safe
/// keccak256("EIP712Domain(uint256 chainId,address verifyingContract)")
pub const DOMAIN_SEPARATOR_TYPEHASH: [u8; 32] = [
    0x47, 0xe7, 0x95, 0x34, 0xa2, 0x45, 0x95, 0x2e, 0x8b, 0x16, 0x89, 0x3a, 0x33, 0x6b, 0x85, 0xa3,
    0xd9, 0xea, 0x9f, 0xa8, 0xc5, 0x73, 0xf3, 0xd8, 0x03, 0xaf, 0xb9, 0x2a, 0x79, 0x46, 0x92, 0x18,
];

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{hex, keccak256};
    use alloy::sol_types::SolCall;

    #[test]
    fn test_safe_tx_typehash() {
        let computed = keccak256(
            "SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)"
        );
        assert_eq!(computed.as_slice(), &SAFE_TX_TYPEHASH);
    }

    #[test]
    fn test_domain_separator_typehash() {
        let computed = keccak256("EIP712Domain(uint256 chainId,address verifyingContract)");
        assert_eq!(computed.as_slice(), &DOMAIN_SEPARATOR_TYPEHASH);
    }

    #[test]
    fn test_selectors_match_deployed_contracts() {
        // These must stay byte-identical to the deployed Safe v1.4.1
        // selectors; any drift is an external compatibility break.
        assert_eq!(IOwnerManager::swapOwnerCall::SELECTOR, hex!("e318b52b"));
        assert_eq!(
            IOwnerManager::addOwnerWithThresholdCall::SELECTOR,
            hex!("0d582f13")
        );
        assert_eq!(IOwnerManager::removeOwnerCall::SELECTOR, hex!("f8dc5dd9"));
        assert_eq!(
            IOwnerManager::changeThresholdCall::SELECTOR,
            hex!("694e80c3")
        );
        assert_eq!(
            IModuleManager::execTransactionFromModuleCall::SELECTOR,
            hex!("468721a7")
        );
        assert_eq!(IModuleManager::enableModuleCall::SELECTOR, hex!("610b5925"));
        assert_eq!(IGuardManager::setGuardCall::SELECTOR, hex!("e19a9dd9"));
        assert_eq!(IMultiSend::multiSendCall::SELECTOR, hex!("8d80ff0a"));
        assert_eq!(ISafeSetup::setupCall::SELECTOR, hex!("b63e800d"));
    }
}
