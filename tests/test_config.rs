use raku_lite::config::Config;

// Environment mutation is process-global, so defaults and overrides are
// exercised in a single test to keep it race-free under the parallel
// test runner.
#[test]
fn test_config_defaults_and_env_overrides() {
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("MOUNT_PREFIX");
        std::env::remove_var("MOUNT_DIR");
        std::env::remove_var("REGISTRY_PATH");
    }

    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.mount_prefix, "/");
    assert_eq!(cfg.mount_dir, "./public");
    assert_eq!(cfg.registry_path, "./registry/universal.json");

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
        std::env::set_var("MOUNT_PREFIX", "/assets");
        std::env::set_var("MOUNT_DIR", "./static");
        std::env::set_var("REGISTRY_PATH", "./data/registry.json");
    }

    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.mount_prefix, "/assets");
    assert_eq!(cfg.mount_dir, "./static");
    assert_eq!(cfg.registry_path, "./data/registry.json");

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("MOUNT_PREFIX");
        std::env::remove_var("MOUNT_DIR");
        std::env::remove_var("REGISTRY_PATH");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config {
        listen_addr: "127.0.0.1:9999".to_string(),
        mount_prefix: "/".to_string(),
        mount_dir: "./public".to_string(),
        registry_path: "./registry/universal.json".to_string(),
    };
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.mount_dir, cfg2.mount_dir);
}
