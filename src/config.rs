#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub mount_prefix: String,
    pub mount_dir: String,
    pub registry_path: String,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let mount_prefix =
            std::env::var("MOUNT_PREFIX")
                .unwrap_or_else(|_| "/".to_string());
        let mount_dir =
            std::env::var("MOUNT_DIR")
                .unwrap_or_else(|_| "./public".to_string());
        let registry_path =
            std::env::var("REGISTRY_PATH")
                .unwrap_or_else(|_| "./registry/universal.json".to_string());

        Self {
            listen_addr,
            mount_prefix,
            mount_dir,
            registry_path,
        }
    }
}
