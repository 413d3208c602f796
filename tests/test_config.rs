use std::path::PathBuf;

use simple_http_server::config::{Config, ResolveMode};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.listen_addr, "127.0.0.1:80");
    assert_eq!(cfg.document_root, PathBuf::from("server_root"));
    assert_eq!(cfg.buffer_size, 512);
    assert_eq!(cfg.resolve_mode, ResolveMode::IndexOnly);
}

#[test]
fn test_config_from_yaml_full() {
    let yaml = r#"
listen_addr: "0.0.0.0:8080"
document_root: /srv/www
buffer_size: 1024
resolve_mode: document_root
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.document_root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.buffer_size, 1024);
    assert_eq!(cfg.resolve_mode, ResolveMode::DocumentRoot);
}

#[test]
fn test_config_from_yaml_partial_keeps_defaults() {
    let cfg = Config::from_yaml("listen_addr: \"127.0.0.1:8000\"\n").unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:8000");
    assert_eq!(cfg.buffer_size, 512);
    assert_eq!(cfg.resolve_mode, ResolveMode::IndexOnly);
}

#[test]
fn test_config_rejects_zero_buffer() {
    assert!(Config::from_yaml("buffer_size: 0\n").is_err());
}

#[test]
fn test_config_rejects_unknown_mode() {
    assert!(Config::from_yaml("resolve_mode: everything\n").is_err());
}

#[test]
fn test_config_missing_file_is_error() {
    assert!(Config::from_file("/definitely/not/here.yaml").is_err());
}

#[test]
fn test_config_env_overrides() {
    unsafe {
        std::env::remove_var("SERVER_CONFIG");
        std::env::set_var("LISTEN", "0.0.0.0:3000");
        std::env::set_var("SERVER_ROOT", "public");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.document_root, PathBuf::from("public"));
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("SERVER_ROOT");
    }
}
