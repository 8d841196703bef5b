use std::path::PathBuf;

use crate::{cli::Cli, ext::LabelExt};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Root name given up front. Blank names count as not given.
    pub root_name: Option<String>,
    pub seed: Option<PathBuf>,
    pub color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root_name: cli
                .root_name
                .as_deref()
                .and_then(str::as_label)
                .map(str::to_string),
            seed: cli.seed,
            color: !cli.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(&["foldertree"], None)]
    #[case(&["foldertree", "--root-name", "  "], None)]
    #[case(&["foldertree", "--root-name", " docs "], Some("docs"))]
    fn root_name_is_normalised(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let config: RuntimeConfig = Cli::try_parse_from(args).unwrap().into();
        assert_eq!(config.root_name.as_deref(), expected);
    }

    #[test]
    fn no_color_flag_disables_color() {
        let config: RuntimeConfig = Cli::try_parse_from(["foldertree", "--no-color"])
            .unwrap()
            .into();
        assert!(!config.color);
    }
}
