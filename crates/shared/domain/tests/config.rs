use numerus_domain::config::{ApiConfig, ServerConfig};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8080);
    assert_eq!(server.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    let cfg = ApiConfig::default();
    assert_eq!(cfg.server.port, 8080);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 9090 }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.server.socket_addr().to_string(), "127.0.0.1:9090");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);

    let cfg: ApiConfig =
        serde_json::from_value(json!({ "server": { "port": 3000 } })).expect("config deserialize");
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.server.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
}

#[test]
fn clones_share_until_mutated() {
    let original = ApiConfig::default();
    let mut copy = original.clone();
    copy.server.port = 1234;

    assert_eq!(original.server.port, 8080);
    assert_eq!(copy.server.port, 1234);
}
