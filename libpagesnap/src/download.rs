use crate::errors::SnapError;
use reqwest::Client;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use url::Url;

#[derive(Debug)]
pub struct DownloadItem {
    pub link: Url,
    pub destination_dir: PathBuf,
}

/// Takes care of downloading a single static file. The returned path is the
/// path to the downloaded file, named after the final segment of the url
/// path. An existing file of the same name is overwritten.
#[tracing::instrument(skip(client))]
pub async fn download_file(
    mut dld_item: DownloadItem,
    client: &Client,
) -> Result<PathBuf, SnapError> {
    let f_name = match get_file_name(&dld_item.link) {
        Some(name) => name,
        None => {
            tracing::warn!("No file name in the path of {}", dld_item.link);
            return Err(SnapError::UnnameableResource(dld_item.link.to_string()));
        }
    };

    let mut response = match client.get(dld_item.link.as_str()).send().await {
        Err(e) => {
            tracing::error!("Error downloading file from {}", dld_item.link);
            tracing::error!("{}", e);
            return Err(SnapError::NetworkError(e.to_string()));
        }
        Ok(r) => {
            if !r.status().is_success() {
                tracing::error!(
                    "Error status code received : {} |{}|",
                    r.status(),
                    dld_item.link
                );
                return Err(SnapError::ErrorStatusCode {
                    status_code: r.status().to_string(),
                    url: dld_item.link.to_string(),
                });
            }
            r
        }
    };

    dld_item.destination_dir.push(&f_name);

    let mut dest_file = match OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(dld_item.destination_dir.as_path())
        .await
    {
        Err(e) => {
            tracing::error!(
                "Error opening/creating file {}",
                dld_item.destination_dir.display()
            );
            tracing::error!("{} | {}", e, e.kind());
            return Err(SnapError::FileOperationError {
                file_name: dld_item.destination_dir.to_string_lossy().to_string(),
                message: format!("{} | {}", e, e.kind()),
            });
        }
        Ok(f) => f,
    };

    while let Some(chunk) = match response.chunk().await {
        Err(e) => {
            tracing::error!(
                "Error downloading resource from {}",
                dld_item.link
            );
            tracing::error!("{}", e);
            return Err(SnapError::NetworkError(e.to_string()));
        }
        Ok(bytes) => bytes,
    } {
        if let Err(e) = dest_file.write_all(&chunk).await {
            tracing::error!(
                "Error writing to destination file {}",
                dld_item.destination_dir.display()
            );
            tracing::error!("{} | {}", e, e.kind());
            return Err(SnapError::FileOperationError {
                file_name: dld_item.destination_dir.to_string_lossy().to_string(),
                message: format!("{} | {}", e, e.kind()),
            });
        };
    }

    tracing::debug!(
        "Download completed for {}, file @ {}",
        &dld_item.link,
        dld_item.destination_dir.display()
    );
    Ok(dld_item.destination_dir)
}

/// Fetches a document's content into memory.
#[tracing::instrument(skip(client))]
pub async fn fetch_page(link: &Url, client: &Client) -> Result<String, SnapError> {
    let response = match client.get(link.as_str()).send().await {
        Err(e) => {
            tracing::error!("Error fetching page {}", link);
            tracing::error!("{}", e);
            return Err(SnapError::NetworkError(e.to_string()));
        }
        Ok(r) => {
            if !r.status().is_success() {
                tracing::error!("Error status code received : {} |{}|", r.status(), link);
                return Err(SnapError::ErrorStatusCode {
                    status_code: r.status().to_string(),
                    url: link.to_string(),
                });
            }
            r
        }
    };
    match response.text().await {
        Ok(html) => Ok(html),
        Err(e) => {
            tracing::error!("Error reading page content from {}", link);
            tracing::error!("{}", e);
            Err(SnapError::NetworkError(e.to_string()))
        }
    }
}

/// Derives a local file name from the final segment of a url's path. Query
/// strings never contribute to the name. Urls whose path ends in a slash or
/// that cannot be a base have no final segment and yield nothing.
pub(crate) fn get_file_name(link: &Url) -> Option<String> {
    let f_name = link.path_segments()?.last()?;
    if f_name.is_empty() {
        return None;
    }
    Some(f_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_last_path_segment() {
        let link = Url::parse("https://example.com/a/b/style.css").unwrap();
        assert_eq!(get_file_name(&link), Some("style.css".to_string()));
    }

    #[test]
    fn test_query_string_is_not_part_of_the_name() {
        let link = Url::parse("https://example.com/app.js?v=123").unwrap();
        assert_eq!(get_file_name(&link), Some("app.js".to_string()));
    }

    #[test]
    fn test_url_without_path_has_no_name() {
        let link = Url::parse("https://example.com").unwrap();
        assert_eq!(get_file_name(&link), None);
    }

    #[test]
    fn test_query_only_url_has_no_name() {
        let link = Url::parse("https://example.com/?page=2").unwrap();
        assert_eq!(get_file_name(&link), None);
    }

    #[test]
    fn test_trailing_slash_has_no_name() {
        let link = Url::parse("https://example.com/assets/").unwrap();
        assert_eq!(get_file_name(&link), None);
    }
}
