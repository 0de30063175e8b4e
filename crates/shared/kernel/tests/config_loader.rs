use numerus_kernel::config::{ConfigError, load_config};
use numerus_kernel::domain::config::ApiConfig;
use serial_test::serial;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use tempfile::tempdir;

fn port_env_set() -> bool {
    std::env::var_os("PORT").is_some() || std::env::var_os("NUMERUS__SERVER__PORT").is_some()
}

#[test]
#[serial]
fn missing_file_yields_defaults() -> Result<(), ConfigError> {
    if port_env_set() {
        return Ok(());
    }
    let dir = tempdir().expect("tempdir");

    let config: ApiConfig = load_config(Some(dir.path().join("absent")))?;

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    Ok(())
}

#[test]
#[serial]
fn reads_toml_file() -> Result<(), ConfigError> {
    if port_env_set() {
        return Ok(());
    }
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\naddress = \"127.0.0.1\"\nport = 9100\n").expect("write config");

    let config: ApiConfig = load_config(Some(&path))?;

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.server.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    Ok(())
}

#[test]
#[serial]
fn malformed_value_is_reported() {
    if port_env_set() {
        return;
    }
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = \"not a port\"\n").expect("write config");

    let err = load_config::<ApiConfig>(Some(&path)).expect_err("port must be numeric");
    assert!(err.to_string().starts_with("Config error (Failed to deserialize config)"));
}
