//! Solidity ABI surface of the delegate contracts an EOA can point its code at.

use alloy_sol_types::sol;

sol! {
    /// Compact delegate: one packed blob of `operation || to || value || len || data` entries.
    interface IEOAMultiSend {
        function execute(bytes calls) external payable;
    }

    /// Safe-style multisend, the shape packed batches are read back from.
    interface IMultiSend {
        function multiSend(bytes transactions) external payable;
    }

    /// Structured delegate: calls passed as an ABI-encoded array and executed natively.
    interface IBatchCallAndSponsor {
        struct Call {
            address to;
            uint256 value;
            bytes data;
        }

        function execute(Call[] calls) external payable;
    }
}
