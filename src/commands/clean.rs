use crate::{
    CleanArgs,
    build::{Builder, base_path_from_config},
    config::{CONFIG_FILE_NAME, SpyglassConfig},
};

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    // Determine the config file path
    let config_path = args
        .config_file
        .clone()
        .unwrap_or_else(|| CONFIG_FILE_NAME.into());
    let config_path = if config_path.is_relative() {
        std::env::current_dir()?.join(&config_path)
    } else {
        config_path
    };

    let config = SpyglassConfig::load_from_arg(Some(config_path.as_path()))?;

    // Get the base path for resolving relative paths
    let base_path = base_path_from_config(&config_path);
    let site_path = Builder::new(config, base_path).output_dir();

    if !site_path.exists() {
        println!("Nothing to clean at {}", site_path.display());
        return Ok(());
    }

    if args.dry_run {
        println!("Would delete {}", site_path.display());
    } else {
        tokio::fs::remove_dir_all(&site_path).await?;
        println!("Deleted {}", site_path.display());
    }

    Ok(())
}
