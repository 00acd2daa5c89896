use std::path::Path;

use anyhow::{Context, Result};
use hashdeploy::application::DeployOptions;
use hashdeploy::domain::ports::{AutoConfirm, Confirmation};
use hashdeploy::infrastructure::{ConsoleEventSink, LinePrompt};
use hashdeploy::presentation::create_deploy_use_case;

use crate::commands::load_config;
use crate::ui::views::deploy::{render_outcome, render_pending};

pub fn cmd_deploy(config: Option<&Path>, yes: bool, strict: bool) -> Result<()> {
    let loaded = load_config(config)?;
    loaded.config.require_credentials()?;

    let options = DeployOptions::new().with_strict(strict || loaded.config.strict_manifest);
    let use_case = create_deploy_use_case(&loaded.config, &loaded.path, options)?;

    let mut prompt: Box<dyn Confirmation> = if yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(LinePrompt::stdio())
    };
    let events = ConsoleEventSink::stdout();

    let outcome = use_case
        .run(prompt.as_mut(), &events, |changes| {
            println!("{}", render_pending(changes));
        })
        .with_context(|| format!("Deployment error (config file: {})", loaded.path.display()))?;

    println!("{}", render_outcome(&outcome));
    Ok(())
}
