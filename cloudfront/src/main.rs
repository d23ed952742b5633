use cloudfront_patch::{client::AwsCliClient, patcher::DistributionPatcher};
use cloudfront_patch_core::{config::PatchConfig, util::init_tracing};

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> anyhow::Result<()> {
    init_tracing();

    let prefix = std::env::current_dir()?;
    let config = PatchConfig::try_load(&prefix)?;
    let client = AwsCliClient::from_config(&config);

    let patcher = DistributionPatcher::new(client, config);
    patcher.run(&mut std::io::stdout().lock()).await?;
    Ok(())
}
