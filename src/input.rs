use std::path::Path;

pub async fn load_urls(path: &Path) -> crate::Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
