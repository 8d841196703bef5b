use std::io::{self, BufRead, Write};

use snafu::Snafu;
use snafu::prelude::*;
use supports_color::Stream;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::folder::FolderTree;
use crate::seed::{Seed, SeedError};
use crate::shell::{Shell, ShellError, prompt_root_name};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);
        Self::configure_color(app_config.color);

        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        let tree = Self::initial_tree(&app_config, &mut input, &mut output).await?;

        let mut shell = Shell::new(tree, input, output);
        shell.run().context(ShellSnafu)?;

        let tree = shell.into_tree();
        info!(
            "Session ended: '{}' holds {} files",
            tree.root().name(),
            tree.root().count_files()
        );
        Ok(())
    }

    fn configure_color(requested: bool) {
        let supported = supports_color::on(Stream::Stdout).is_some();
        debug!("Color requested: {requested}, supported: {supported}");
        colored::control::set_override(requested && supported);
    }

    /// The root name comes from the command line, then the seed file, then
    /// an interactive prompt.
    async fn initial_tree<R: BufRead, W: Write>(
        app_config: &RuntimeConfig,
        input: &mut R,
        output: &mut W,
    ) -> Result<FolderTree, ApplicationError> {
        if let Some(path) = &app_config.seed {
            let seed = Seed::read(path).await.context(SeedSnafu)?;
            let root_name = match (&app_config.root_name, seed.root_name()) {
                (Some(name), _) => Some(name.clone()),
                (None, Some(_)) => None,
                (None, None) => Some(prompt_root_name(input, output).context(ShellSnafu)?),
            };
            return seed.build(root_name.as_deref()).context(SeedSnafu);
        }

        let root_name = match &app_config.root_name {
            Some(name) => name.clone(),
            None => prompt_root_name(input, output).context(ShellSnafu)?,
        };
        Ok(FolderTree::new(root_name))
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the seed"))]
    SeedError { source: SeedError },
    #[snafu(display("Critical failure encountered in the interactive shell"))]
    ShellError { source: ShellError },
}
