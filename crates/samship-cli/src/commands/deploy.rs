use samship_cloud::{DeployRequest, SamClient};
use samship_core::{
    BuildInfo, DeployParameters, Environment, EnvironmentConfig, Manifest, SamshipConfig,
};
use std::path::{Path, PathBuf};

/// Inputs resolved from the command line.
pub struct DeployOptions {
    pub artifact_path: PathBuf,
    pub environment: Environment,
    pub confirm_changeset: bool,
    pub dry_run: bool,
}

/// Execute the full deploy pipeline.
///
/// Steps run strictly in order and the first error ends the run; nothing
/// already done (e.g. a completed build) is rolled back.
pub async fn deploy(options: &DeployOptions) -> anyhow::Result<()> {
    let project_dir = Path::new(".");
    let environment = options.environment;

    // Load configuration
    let config = SamshipConfig::load(project_dir)?;
    tracing::debug!(
        binary = %config.sam.binary,
        template = %config.sam.template.display(),
        environments_dir = %config.paths.environments_dir.display(),
        "resolved sam settings"
    );
    let manifest = Manifest::load(&options.artifact_path)?;
    let env_config = EnvironmentConfig::load(&config.paths.environments_dir, environment)?;

    manifest.validate()?;
    println!("Manifest validated");

    let parameters = DeployParameters::build(&manifest, &env_config, environment)?;

    println!("Deploy configuration:");
    println!("{parameters}");
    print_build_info(&manifest.build_info());

    let client = SamClient::new(config.sam.binary.as_str());
    let request = DeployRequest {
        environment,
        parameters: &parameters,
        confirm_changeset: options.confirm_changeset,
    };

    if options.dry_run {
        println!();
        println!("Dry run: the following commands would be executed:");
        for command in client.plan(&config.sam.template, &request)? {
            println!("  {command}");
        }
        return Ok(());
    }

    // Build
    println!("Running sam build...");
    client.build(&config.sam.template).await?;
    println!("Build complete");

    // Deploy
    println!("Deploying to {environment}...");
    let output = client.deploy(&request).await?;
    println!("Deploy complete");

    println!();
    println!(
        "Deployed {} v{} to {environment}",
        parameters.app_name, parameters.app_version
    );
    println!("Outputs:");
    print!("{output}");

    Ok(())
}

fn print_build_info(info: &BuildInfo) {
    if let Some(timestamp) = &info.timestamp {
        println!("  Packaged:    {timestamp}");
    }
    if let Some(node_version) = &info.node_version {
        println!("  Built with:  node {node_version}");
    }
    if let Some(build_env) = &info.environment {
        println!("  Build mode:  {build_env}");
    }
    if let Some(main) = &info.main_artifact {
        println!("  Entry file:  {main}");
    }
}
