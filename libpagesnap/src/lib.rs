use crate::download::{download_file, fetch_page, get_file_name, DownloadItem};
pub use crate::errors::SnapError;
use crate::link::{get_iframe_links, get_static_resource_links};
use reqwest::Client;
use std::path::Path;
use tokio::fs;
use url::Url;

mod download;
mod errors;
mod link;

const INDEX_FILE_NAME: &str = "index.html";

// Some pages reject requests that don't carry a browser user agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/85.0.4183.121 Safari/537.36";

/// Snapshots a single page into `dest_dir` : the page's static resources are
/// downloaded next to it, the page's references to them are rewritten to the
/// downloaded file names and the result is saved as `index.html`. Every
/// iframe document of the page gets the same treatment, one level deep.
#[tracing::instrument]
pub async fn init_snapshot(link: &str, dest_dir: &str) -> Result<(), SnapError> {
    let page_url = if let Ok(u) = Url::parse(link) {
        u
    } else {
        return Err(SnapError::InvalidUrl(link.to_string()));
    };

    if let Err(e) = fs::create_dir_all(dest_dir).await {
        tracing::error!("Failed to create destination directory\nError : {}", e);
        return Err(SnapError::ErrorCreatingDestinationDirectory(e.to_string()));
    };

    let client = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .build()
        .unwrap();

    let mut html = fetch_page(&page_url, &client).await?;

    // Iframe sources are taken from the page as served, before any rewriting.
    let iframe_links = get_iframe_links(&html, &page_url);

    let dest_dir = Path::new(dest_dir);
    localize_static_resources(&mut html, &page_url, dest_dir, &client).await;

    let index_path = dest_dir.join(INDEX_FILE_NAME);
    if let Err(e) = fs::write(&index_path, &html).await {
        tracing::error!(
            "Error writing to file : {}\nError : {} | {}",
            index_path.display(),
            e,
            e.kind()
        );
        return Err(SnapError::FileOperationError {
            file_name: index_path.to_string_lossy().to_string(),
            message: format!("{} | {}", e, e.kind()),
        });
    }
    tracing::debug!("Page saved @ {}", index_path.display());

    for (raw_link, iframe_url) in iframe_links {
        if let Err(e) = save_iframe_content(&iframe_url, dest_dir, &client).await {
            tracing::warn!(
                "Skipping iframe {} ({}). Continuing snapshot...\nError : {}",
                raw_link,
                iframe_url,
                e
            );
        }
    }

    Ok(())
}

/// Downloads every static resource referenced by the page into `dest_dir`
/// and rewrites the references in `html` to the downloaded file names.
/// References whose download fails are left as they are.
#[tracing::instrument(skip(html, client))]
pub async fn localize_static_resources(
    html: &mut String,
    page_url: &Url,
    dest_dir: &Path,
    client: &Client,
) {
    let mut raw_links: Vec<String> = Vec::new();
    let mut res_f_names: Vec<String> = Vec::new();

    for (raw_link, full_link) in get_static_resource_links(html, page_url) {
        match download_file(
            DownloadItem {
                link: full_link,
                destination_dir: dest_dir.to_path_buf(),
            },
            client,
        )
        .await
        {
            Ok(f_path) => {
                // The rewritten reference is the bare file name. The file
                // sits next to the page that refers to it.
                if let Some(f_name) = f_path.file_name() {
                    raw_links.push(raw_link);
                    res_f_names.push(f_name.to_string_lossy().to_string());
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Keeping original reference {}. Continuing snapshot...\nError : {}",
                    raw_link,
                    e
                );
            }
        }
    }

    if raw_links.is_empty() {
        return;
    }

    let ac = aho_corasick::AhoCorasick::new(&raw_links);
    let rewritten = ac.replace_all(html, &res_f_names);
    *html = rewritten;
}

/// Fetches an iframe's document, localizes its static resources and saves
/// the rewritten HTML as `iframe_<name>.html` under `dest_dir`. Iframes
/// nested inside the fetched document are not descended into.
#[tracing::instrument(skip(client))]
pub async fn save_iframe_content(
    iframe_url: &Url,
    dest_dir: &Path,
    client: &Client,
) -> Result<(), SnapError> {
    let mut html = fetch_page(iframe_url, client).await?;

    localize_static_resources(&mut html, iframe_url, dest_dir, client).await;

    let f_name = format!(
        "iframe_{}.html",
        get_file_name(iframe_url).unwrap_or_default()
    );
    let iframe_path = dest_dir.join(f_name);
    if let Err(e) = fs::write(&iframe_path, &html).await {
        tracing::error!(
            "Error writing to file : {}\nError : {} | {}",
            iframe_path.display(),
            e,
            e.kind()
        );
        return Err(SnapError::FileOperationError {
            file_name: iframe_path.to_string_lossy().to_string(),
            message: format!("{} | {}", e, e.kind()),
        });
    }
    tracing::debug!("Iframe content saved @ {}", iframe_path.display());
    Ok(())
}
