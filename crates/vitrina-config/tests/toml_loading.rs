//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use vitrina_config::VitrinaConfig;

#[test]
fn loads_gemini_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "toml-key"
base_url = "http://localhost:9000/v1"
model = "gemini-test"
timeout_secs = 5
"#,
        )?;

        let config: VitrinaConfig = Figment::from(Serialized::defaults(VitrinaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "toml-key");
        assert_eq!(config.gemini.model, "gemini-test");
        assert_eq!(config.gemini.timeout_secs, 5);
        assert_eq!(
            config.gemini.endpoint(),
            "http://localhost:9000/v1/models/gemini-test:generateContent"
        );
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[supabase]
url = "https://abcd.supabase.co"
key = "toml-supabase"

[server]
port = 8080
"#,
        )?;

        let config: VitrinaConfig = Figment::from(Serialized::defaults(VitrinaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.supabase.is_configured());
        assert_eq!(config.supabase.rpc_function, "exec_sql");
        assert_eq!(config.supabase.timeout_secs, 30);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "vitrina.toml",
            r#"
[server]
public_dir = "static"
"#,
        )?;

        let config = VitrinaConfig::load().expect("config loads");
        assert_eq!(config.server.public_dir, "static");
        Ok(())
    });
}
