//! # Registry Flows
//!
//! Selection, re-selection, override and startup flows as a node would run
//! them, including readers on other threads while the active profile changes.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use chain_params::{
        ChainParamsError, DeploymentPos, Network, NetworkProfile, ParamsRegistry,
    };
    use node_runtime::{NodeConfig, NodeContainer};

    // =============================================================================
    // SELECTION
    // =============================================================================

    #[test]
    fn test_select_each_network_by_id() {
        let registry = ParamsRegistry::new();
        for id in ["main", "test", "regtest", "unittest"] {
            registry.select_network(id).unwrap();
            assert_eq!(registry.current().network.as_str(), id);
        }
    }

    #[test]
    fn test_failed_selection_keeps_prior_profile() {
        let registry = ParamsRegistry::new();
        let main = registry.select_network("main").unwrap();

        for bad in ["", "Main", "mainnet", "testnet", "bogus"] {
            let err = registry.select_network(bad).unwrap_err();
            assert_eq!(err, ChainParamsError::UnknownNetwork(bad.to_string()));
            assert!(!err.is_fatal());
        }

        assert!(Arc::ptr_eq(&main, &registry.current()));
    }

    #[test]
    fn test_profiles_are_distinct_per_network() {
        let profiles: Vec<NetworkProfile> = Network::ALL
            .iter()
            .map(|&n| NetworkProfile::build(n).unwrap())
            .collect();

        // Main, test and regtest never share wire magic or port.
        for (i, a) in profiles[..3].iter().enumerate() {
            for b in &profiles[i + 1..3] {
                assert_ne!(a.message_start, b.message_start);
                assert_ne!(a.default_port, b.default_port);
                assert_ne!(a.bech32_hrp, b.bech32_hrp);
            }
        }
    }

    // =============================================================================
    // DEPLOYMENT OVERRIDE
    // =============================================================================

    #[test]
    fn test_override_then_reselect_restores_table() {
        let registry = ParamsRegistry::with_network(Network::Regtest).unwrap();
        let original = registry.current().consensus.deployments;

        registry.override_deployment_window(DeploymentPos::Segwit, 500, 600);
        assert_ne!(registry.current().consensus.deployments, original);

        // A fresh selection rebuilds from the literals.
        registry.select_network("regtest").unwrap();
        assert_eq!(registry.current().consensus.deployments, original);
    }

    #[test]
    fn test_override_replaces_window_verbatim() {
        let registry = ParamsRegistry::with_network(Network::Main).unwrap();
        registry.override_deployment_window(DeploymentPos::TestDummy, 0, 10);

        let profile = registry.current();
        let consensus = &profile.consensus;
        let dummy = consensus.deployment(DeploymentPos::TestDummy);
        assert_eq!((dummy.start_time, dummy.timeout), (0, 10));
        assert!(consensus.check_deployments().is_ok());
    }

    #[test]
    fn test_readers_see_consistent_snapshots_during_override() {
        let registry = Arc::new(ParamsRegistry::with_network(Network::Regtest).unwrap());

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let profile = registry.current();
                        let csv = profile.consensus.deployment(DeploymentPos::Csv);
                        // Either the original window or the override, never a mix.
                        assert!(
                            (csv.start_time, csv.timeout) == (0, 999_999_999_999)
                                || (csv.start_time, csv.timeout) == (42, 43)
                        );
                        assert_eq!(profile.network, Network::Regtest);
                    }
                })
            })
            .collect();

        for _ in 0..50 {
            registry.override_deployment_window(DeploymentPos::Csv, 42, 43);
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }

    // =============================================================================
    // STARTUP
    // =============================================================================

    #[test]
    fn test_container_and_registry_agree() {
        let registry = Arc::new(ParamsRegistry::new());
        let mut config = NodeConfig::default();
        config.chain.network = "test".into();

        let container = NodeContainer::with_registry(config, Arc::clone(&registry));
        let started = container.start().unwrap();

        assert!(Arc::ptr_eq(&started, &registry.current()));
        // The test network reuses the production genesis block.
        let main = NetworkProfile::build(Network::Main).unwrap();
        assert_eq!(started.genesis_hash(), main.genesis_hash());
    }
}
