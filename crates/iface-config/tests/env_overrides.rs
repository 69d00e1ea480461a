//! Integration tests for `IFACEMAKER_*` environment overrides.

use figment::{
    Figment, Jail,
    providers::{Env, Serialized},
};
use iface_config::{ConfigError, IfaceConfig};

#[test]
fn env_sets_header_comment() {
    Jail::expect_with(|jail| {
        jail.set_env("IFACEMAKER_GENERATE__HEADER_COMMENT", "Custom header");
        jail.set_env("IFACEMAKER_GENERATE__COPY_DOCS", "false");

        let config: IfaceConfig = Figment::from(Serialized::defaults(IfaceConfig::default()))
            .merge(Env::prefixed("IFACEMAKER_").split("__"))
            .extract()?;

        assert_eq!(config.generate.header_comment, "Custom header");
        assert!(!config.generate.copy_docs);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        let config_home = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", config_home.display());
        jail.create_file(
            ".ifacemaker.toml",
            r"
[generate]
include_private = false
",
        )?;
        jail.set_env("IFACEMAKER_GENERATE__INCLUDE_PRIVATE", "true");

        let config = IfaceConfig::load().expect("config loads");
        assert!(config.generate.include_private);
        Ok(())
    });
}

#[test]
fn empty_header_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("IFACEMAKER_GENERATE__HEADER_COMMENT", "");

        let figment = Figment::from(Serialized::defaults(IfaceConfig::default()))
            .merge(Env::prefixed("IFACEMAKER_").split("__"));
        let err = IfaceConfig::from_figment(figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }), "err: {err}");
        Ok(())
    });
}
