use std::collections::HashMap;

use super::*;

fn site_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_follow_leptos_options() {
    let cfg = SiteConfig::from_vars(vars(&[]), site_addr(), Path::new("target/site")).unwrap();
    assert_eq!(cfg.addr, site_addr());
    assert_eq!(cfg.public_dir, PathBuf::from("target/site"));
}

#[test]
fn overrides_apply() {
    let cfg = SiteConfig::from_vars(
        vars(&[("BIND_ADDR", "0.0.0.0"), ("PORT", "8080"), ("PUBLIC_DIR", "/srv/stompilot")]),
        site_addr(),
        Path::new("target/site"),
    )
    .unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/stompilot"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = SiteConfig::from_vars(vars(&[("PORT", "  "), ("PUBLIC_DIR", "")]), site_addr(), Path::new("site")).unwrap();
    assert_eq!(cfg.addr.port(), 3000);
    assert_eq!(cfg.public_dir, PathBuf::from("site"));
}

#[test]
fn invalid_port_is_rejected() {
    let err = SiteConfig::from_vars(vars(&[("PORT", "http")]), site_addr(), Path::new("site")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = SiteConfig::from_vars(vars(&[("PORT", "70000")]), site_addr(), Path::new("site")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = SiteConfig::from_vars(vars(&[("BIND_ADDR", "localhost")]), site_addr(), Path::new("site")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
}
