pub const EVM_BRIDGE_ABI: &str = r#"[
  {
    "type": "event",
    "name": "LockedForSolana",
    "inputs": [
      { "name": "actionId", "type": "uint64", "indexed": true },
      { "name": "tokenName", "type": "string", "indexed": false },
      { "name": "tokenSymbol", "type": "string", "indexed": false },
      { "name": "tokenUri", "type": "string", "indexed": false },
      { "name": "recipient", "type": "bytes32", "indexed": false }
    ]
  },
  {
    "type": "function",
    "name": "releaseFromSolana",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "nonce", "type": "uint64" },
      { "name": "mint", "type": "bytes32" },
      { "name": "solanaOwner", "type": "bytes32" },
      { "name": "recipient", "type": "address" }
    ],
    "outputs": []
  }
]"#;
