//! # Genesis Wire Format
//!
//! The genesis block built by `chain-params`, serialized by `shared-types`
//! and hashed by `shared-crypto`, must match bytes computed independently.

#[cfg(test)]
mod tests {
    use chain_params::genesis::{
        empty_utxo_root, genesis_output_script, GENESIS_MESSAGE, GENESIS_STATE_ROOT,
    };
    use chain_params::{Network, NetworkProfile};
    use shared_crypto::{keccak256, merkle_root, sha256d};
    use shared_types::{serialize, Hash256};

    #[test]
    fn test_header_hash_is_sha256d_of_serialized_header() {
        for network in Network::ALL {
            let profile = NetworkProfile::build(network).unwrap();
            let bytes = serialize(&profile.genesis.header);
            assert_eq!(
                Hash256::from_bytes(sha256d(&bytes)),
                profile.genesis.block_hash()
            );
        }
    }

    #[test]
    fn test_merkle_root_from_serialized_coinbase() {
        let profile = NetworkProfile::build(Network::Main).unwrap();
        let txid = sha256d(&serialize(&profile.genesis.txdata[0]));
        assert_eq!(merkle_root(&[txid]), *profile.genesis.header.merkle_root.as_bytes());
    }

    #[test]
    fn test_coinbase_bytes() {
        let profile = NetworkProfile::build(Network::Main).unwrap();
        let tx = serialize(&profile.genesis.txdata[0]);

        let script_sig = format!(
            "0004bf91221d010431{}",
            hex::encode(GENESIS_MESSAGE.as_bytes())
        );
        let expected = format!(
            "01000000\
             01\
             {null_hash}ffffffff\
             {sig_len:02x}{script_sig}\
             ffffffff\
             01\
             00f2052a01000000\
             43{script_pubkey}\
             00000000",
            null_hash = "00".repeat(32),
            sig_len = script_sig.len() / 2,
            script_sig = script_sig,
            script_pubkey = hex::encode(genesis_output_script().as_bytes()),
        );
        assert_eq!(hex::encode(tx), expected);
    }

    #[test]
    fn test_state_commitments() {
        let profile = NetworkProfile::build(Network::Regtest).unwrap();
        let header = &profile.genesis.header;

        assert_eq!(header.hash_state_root, GENESIS_STATE_ROOT);
        assert_eq!(header.hash_utxo_root, empty_utxo_root());
        assert_eq!(*header.hash_utxo_root.as_bytes(), keccak256(&[0x80]));
    }

    #[test]
    fn test_checkpoint_zero_matches_built_genesis() {
        for network in Network::ALL {
            let profile = NetworkProfile::build(network).unwrap();
            assert!(profile
                .checkpoint_data
                .check(0, &profile.genesis.block_hash())
                .is_ok());
            assert!(profile
                .checkpoint_data
                .check(0, &Hash256::ZERO)
                .is_err());
        }
    }
}
