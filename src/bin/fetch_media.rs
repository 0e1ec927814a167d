//! Downloads every media asset referenced by `assets/content.ron` into
//! the local assets tree, so the application can embed or load them.
//! Safe to re-run; existing files are skipped unless `--force` is given.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use southside_showcase::SiteContent;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs as tokio_fs;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

const CONTENT_RON_PATH: &str = "assets/content.ron";

const MEDIA_DIR: &str = "assets/media";

const USER_AGENT: &str = "southside-showcase";

const DOWNLOAD_CONCURRENCY: usize = 8;

#[derive(Parser, Debug)]
#[command(
    name = "fetch_media",
    about = "Download the media assets referenced by assets/content.ron"
)]
struct Args {
    /// Re-download assets that already exist locally
    #[arg(long)]
    force: bool,
}

fn repo_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(path)
}

/// Fetches `url` into `output_path`. Returns `false` when the file was
/// already present and `force` is off.
async fn download_url_to_path(
    client: &reqwest::Client,
    url: &str,
    output_path: &Path,
    force: bool,
) -> color_eyre::Result<bool> {
    if !force && tokio_fs::try_exists(output_path).await.unwrap_or(false) {
        return Ok(false);
    }

    if let Some(parent) = output_path.parent() {
        tokio_fs::create_dir_all(parent).await?;
    }

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(color_eyre::eyre::eyre!(
            "Failed to fetch {}: {}",
            url,
            response.status()
        ));
    }

    let bytes = response.bytes().await?;
    tokio_fs::write(output_path, &bytes).await?;

    Ok(true)
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let args = Args::parse();

    let content_text = fs::read_to_string(repo_path(CONTENT_RON_PATH))?;
    let content: SiteContent = ron::from_str(&content_text)?;

    let media: Vec<(String, String)> = content
        .media()
        .into_iter()
        .map(|asset| (asset.url.clone(), asset.path.clone()))
        .collect();
    println!("{} media assets referenced", media.len());

    fs::create_dir_all(repo_path(MEDIA_DIR))?;

    let client = reqwest::Client::new();
    let semaphore = Arc::new(Semaphore::new(DOWNLOAD_CONCURRENCY));
    let progress = ProgressBar::new(media.len() as u64)
        .with_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);

    let mut join_set: JoinSet<color_eyre::Result<bool>> = JoinSet::new();

    for (url, path) in media {
        let client = client.clone();
        let semaphore = semaphore.clone();
        let progress = progress.clone();
        let force = args.force;

        join_set.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|err| color_eyre::eyre::eyre!(err))?;

            let output_path = repo_path(&path);
            let fetched = download_url_to_path(&client, &url, &output_path, force).await?;

            progress.set_message(path);
            progress.inc(1);
            Ok(fetched)
        });
    }

    let mut fetched = 0usize;
    let mut skipped = 0usize;
    while let Some(result) = join_set.join_next().await {
        if result?? {
            fetched += 1;
        } else {
            skipped += 1;
        }
    }

    progress.finish_and_clear();
    println!("Downloaded {fetched} assets ({skipped} already present)");

    Ok(())
}
