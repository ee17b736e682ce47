//! Integration tests for layerset

mod manifest_tests {
    use layerset::layer::{fetch_layers, LayerFetcher};
    use layerset::{LayersetResult, ManifestConfig, ResolvedLayer, VersionSelector};
    use std::cell::RefCell;
    use std::path::Path;
    use tempfile::TempDir;

    /// Fetcher double that records clone order instead of touching git
    struct RecordingFetcher {
        cloned: RefCell<Vec<String>>,
    }

    impl RecordingFetcher {
        fn new() -> Self {
            Self {
                cloned: RefCell::new(Vec::new()),
            }
        }
    }

    impl LayerFetcher for RecordingFetcher {
        fn clone_and_checkout(&self, layer: &ResolvedLayer) -> LayersetResult<()> {
            self.cloned.borrow_mut().push(layer.name.clone());
            Ok(())
        }
    }

    #[test]
    fn builtin_webos_manifest_end_to_end() {
        let manifest = ManifestConfig::builtin().unwrap().resolve().unwrap();

        assert_eq!(manifest.distribution, "webos");
        assert_eq!(manifest.machines, vec!["qemux86", "qemuarm"]);

        let search: Vec<&str> = manifest
            .search_order()
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(
            search,
            vec![
                "meta-webos",
                "meta-webos-backports",
                "meta-oe",
                "meta-networking",
                "meta",
            ]
        );

        let tooling: Vec<&str> = manifest
            .tooling_layers()
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(tooling, vec!["bitbake"]);

        // Spot-check the parsed selectors
        assert_eq!(
            manifest.layer("bitbake").unwrap().selector,
            VersionSelector::BranchAtCommit {
                branch: "1.18".to_string(),
                commit: "0f7b6a0".to_string(),
            }
        );
        assert_eq!(
            manifest.layer("meta-networking").unwrap().selector,
            VersionSelector::Default
        );
        assert_eq!(
            manifest.layer("meta-webos").unwrap().selector,
            VersionSelector::Commit("f43220d".to_string())
        );
    }

    #[test]
    fn build_tree_manifest_drives_fetch() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("layers.toml"),
            r#"
distribution = "webos"
machines = ["qemux86"]

[[layers]]
name = "bitbake"
priority = -1
url = "git://example.org/bitbake.git"
submission = "branch=1.18"

[[layers]]
name = "meta-local"
priority = 7

[[layers]]
name = "meta-webos"
priority = 10
url = "git://example.org/meta-webos.git"
submission = "commit=f43220d"
working_dir = "webos/meta-webos"
"#,
        )
        .unwrap();

        let manifest = ManifestConfig::load(temp.path()).unwrap().resolve().unwrap();

        // Tooling entries are excluded from search order but still fetched
        let fetcher = RecordingFetcher::new();
        fetch_layers(&manifest, &fetcher).unwrap();
        assert_eq!(*fetcher.cloned.borrow(), vec!["bitbake", "meta-webos"]);

        assert_eq!(
            manifest.file_search_path(),
            vec![Path::new("webos/meta-webos"), Path::new("meta-local")]
        );
    }

    #[test]
    fn invalid_tree_manifest_never_yields_a_partial_result() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("layers.toml"),
            r#"
distribution = "webos"
machines = ["qemux86"]

[[layers]]
name = "meta"
priority = 5
url = "git://example.org/oe-core.git"

[[layers]]
name = "meta"
priority = 6
url = "git://example.org/oe-core.git"
"#,
        )
        .unwrap();

        let config = ManifestConfig::load(temp.path()).unwrap();
        assert!(config.resolve().is_err());
    }
}
