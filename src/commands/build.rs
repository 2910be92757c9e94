use crate::{
    BuildArgs,
    build::{Builder, base_path_from_config},
    config::{CONFIG_FILE_NAME, SpyglassConfig},
};

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
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

    // Rendering is CPU-bound; keep it off the async workers
    let result =
        tokio::task::spawn_blocking(move || Builder::new(config, base_path).build()).await??;

    println!(
        "Built site to {} ({} documents, {} static files, {} with side navigation)",
        result.output_dir.display(),
        result.documents,
        result.static_files,
        result.sidenav_pages
    );

    Ok(())
}
