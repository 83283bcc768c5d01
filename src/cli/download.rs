use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error::Result, info, spotify::PosterSource, success, utils};

/// Fetches the poster for `url` and writes it into `out_dir`.
///
/// The file is named `{track}_poster.jpg`, with path separators in the track
/// name replaced so it never escapes `out_dir`. An existing file of the same
/// name is overwritten. Returns the path that was written.
pub async fn download(source: &dyn PosterSource, url: &str, out_dir: &Path) -> Result<PathBuf> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching album poster...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let poster = source.fetch_poster(url).await;
    pb.finish_and_clear();
    let poster = poster?;

    info!("Found poster for \"{}\" ({} bytes)", poster.name, poster.bytes.len());

    let path = out_dir.join(utils::poster_file_name(&poster.name));
    async_fs::write(&path, &poster.bytes).await?;

    success!("Poster saved to {}", path.display());
    Ok(path)
}
