use proptest::prelude::*;
use samship_core::{DeployParameters, Environment, EnvironmentConfig, Manifest};
use serde_json::json;
use std::collections::BTreeMap;

/// Values without `=` so a key/value split is unambiguous; spaces allowed.
fn value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ._:/-]{1,24}"
}

fn environment() -> impl Strategy<Value = Environment> {
    prop::sample::select(Environment::ALL.to_vec())
}

fn documents() -> impl Strategy<Value = (Manifest, EnvironmentConfig)> {
    (value(), value(), value(), value(), any::<u32>(), any::<u16>()).prop_map(
        |(name, version, runtime, handler, memory, timeout)| {
            let manifest = Manifest::from_value(json!({
                "application": { "name": name, "version": version, "runtime": runtime },
                "resources": { "handler": handler }
            }));
            let env_config = EnvironmentConfig::from_value(json!({
                "resources": { "lambda": { "memorySize": memory, "timeoutSeconds": timeout } }
            }));
            (manifest, env_config)
        },
    )
}

proptest! {
    #[test]
    fn build_is_deterministic((manifest, env_config) in documents(), env in environment()) {
        let first = DeployParameters::build(&manifest, &env_config, env).unwrap();
        let second = DeployParameters::build(&manifest, &env_config, env).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn overrides_reconstruct_entries((manifest, env_config) in documents(), env in environment()) {
        let params = DeployParameters::build(&manifest, &env_config, env).unwrap();

        let parsed: BTreeMap<String, String> = params
            .to_overrides()
            .iter()
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap();
                (k.to_owned(), v.to_owned())
            })
            .collect();
        let expected: BTreeMap<String, String> = params
            .entries()
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect();

        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn environment_is_echoed((manifest, env_config) in documents(), env in environment()) {
        let params = DeployParameters::build(&manifest, &env_config, env).unwrap();
        let expected = format!("Environment={env}");
        prop_assert!(params.to_overrides().contains(&expected));
    }
}
