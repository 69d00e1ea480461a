use std::path::PathBuf;

use clap::{ArgAction, Parser};
use iface_config::GenerateConfig;

use crate::generate::Settings;

/// Top-level CLI parser for the `ifacemaker` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ifacemaker",
    version,
    about = "Generate a Go interface from the methods of a struct"
)]
pub struct Cli {
    /// Go source file to read; repeatable, glob patterns accepted
    #[arg(short, long = "file", value_name = "PATH", required = true)]
    pub files: Vec<String>,

    /// Struct whose methods form the interface
    #[arg(short, long = "struct", value_name = "NAME")]
    pub struct_name: String,

    /// Name of the generated interface
    #[arg(short, long = "iface", value_name = "NAME")]
    pub iface: String,

    /// Package of the generated file (defaults to the source package)
    #[arg(short, long = "pkg", value_name = "NAME")]
    pub package: Option<String>,

    /// Header comment written at the top of the file
    #[arg(short, long)]
    pub comment: Option<String>,

    /// Doc comment of the interface; `\n` starts a new line
    #[arg(short = 'y', long = "iface-comment", value_name = "TEXT")]
    pub iface_comment: Option<String>,

    /// Copy method docs into the interface
    #[arg(short, long, action = ArgAction::Set, value_name = "BOOL")]
    pub doc: Option<bool>,

    /// Use the struct doc as the interface doc when --iface-comment is absent
    #[arg(short = 'D', long = "type-doc")]
    pub type_doc: bool,

    /// Include methods that are not exported
    #[arg(short = 'P', long)]
    pub private: bool,

    /// Output file (stdout when absent)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge flags over the configured defaults.
    #[must_use]
    pub fn settings(&self, config: &GenerateConfig) -> Settings {
        Settings {
            patterns: self.files.clone(),
            struct_name: self.struct_name.clone(),
            interface_name: self.iface.clone(),
            package: self.package.clone(),
            header: self
                .comment
                .clone()
                .unwrap_or_else(|| config.header_comment.clone()),
            interface_doc: self
                .iface_comment
                .as_deref()
                .map(expand_newlines)
                .unwrap_or_default(),
            copy_docs: self.doc.unwrap_or(config.copy_docs),
            copy_type_doc: self.type_doc || config.copy_type_doc,
            include_private: self.private || config.include_private,
            output: self.output.clone(),
        }
    }
}

/// Shells pass `\n` through literally; turn it into a line break.
fn expand_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("cli should parse")
    }

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_parse() {
        let cli = parse(&[
            "ifacemaker", "-f", "a.go", "-f", "b/*.go", "-s", "Person", "-i", "Namer", "-p",
            "api", "-y", "Namer names\\nthings", "-d", "false", "-D", "-P", "-o", "out.go",
        ]);
        assert_eq!(cli.files, vec!["a.go", "b/*.go"]);
        assert_eq!(cli.struct_name, "Person");
        assert_eq!(cli.iface, "Namer");
        assert_eq!(cli.package.as_deref(), Some("api"));
        assert_eq!(cli.doc, Some(false));
        assert!(cli.type_doc);
        assert!(cli.private);
        assert_eq!(cli.output, Some(PathBuf::from("out.go")));
    }

    #[test]
    fn file_struct_and_iface_are_required() {
        assert!(Cli::try_parse_from(["ifacemaker", "-s", "A", "-i", "B"]).is_err());
        assert!(Cli::try_parse_from(["ifacemaker", "-f", "a.go", "-i", "B"]).is_err());
        assert!(Cli::try_parse_from(["ifacemaker", "-f", "a.go", "-s", "A"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from([
            "ifacemaker", "-f", "a.go", "-s", "A", "-i", "B", "-q", "-v",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn config_supplies_unset_values() {
        let cli = parse(&["ifacemaker", "-f", "a.go", "-s", "A", "-i", "B"]);
        let config = GenerateConfig {
            header_comment: "from config".to_string(),
            copy_docs: false,
            copy_type_doc: true,
            include_private: true,
        };
        let settings = cli.settings(&config);
        assert_eq!(settings.header, "from config");
        assert!(!settings.copy_docs);
        assert!(settings.copy_type_doc);
        assert!(settings.include_private);
        assert_eq!(settings.interface_doc, "");
        assert_eq!(settings.package, None);
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&[
            "ifacemaker", "-f", "a.go", "-s", "A", "-i", "B", "-c", "custom", "-d", "true", "-y",
            "B does\\nthings",
        ]);
        let config = GenerateConfig {
            copy_docs: false,
            ..GenerateConfig::default()
        };
        let settings = cli.settings(&config);
        assert_eq!(settings.header, "custom");
        assert!(settings.copy_docs);
        assert_eq!(settings.interface_doc, "B does\nthings");
    }
}
