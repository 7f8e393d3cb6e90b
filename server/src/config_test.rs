use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse().unwrap());
    assert_eq!(cfg.site_root, None);
}

#[test]
fn reads_port_host_and_site_root() {
    let cfg = config_from(&[("PORT", "8080"), ("HOST", "127.0.0.1"), ("SITE_ROOT", "/srv/site")]).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("SITE_ROOT", "")]).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn rejects_malformed_port() {
    for bad in ["abc", "0", "70000", "-1"] {
        assert_eq!(
            config_from(&[("PORT", bad)]).unwrap_err(),
            ConfigError::InvalidPort { value: bad.to_owned() }
        );
    }
}

#[test]
fn rejects_malformed_host() {
    let err = config_from(&[("HOST", "localhost")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost { value: "localhost".to_owned() });
}

#[test]
fn accepts_ipv6_host() {
    let cfg = config_from(&[("HOST", "::1"), ("PORT", "4000")]).unwrap();
    assert_eq!(cfg.addr, "[::1]:4000".parse().unwrap());
}
