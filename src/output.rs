use std::path::Path;

use tracing::info;

use crate::extractor::ExtractionResult;

/// Writes the batch report as a JSON array, to `dest` when given
/// (creating parent directories), otherwise to stdout.
pub async fn write_results(
    results: &[ExtractionResult],
    dest: Option<&Path>,
    pretty: bool,
) -> crate::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };

    match dest {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
            tokio::fs::write(path, json).await?;
            info!("Saved {} result(s) to {}", results.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_output_round_trips() {
        let path = std::env::temp_dir()
            .join("contact_crawler_output_test")
            .join("report.json");

        let results = vec![ExtractionResult::fetch_failure(
            "https://down.example",
            "timed out",
        )];
        write_results(&results, Some(&path), true).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        let parsed: Vec<ExtractionResult> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].url, "https://down.example");
        assert_eq!(parsed[0].notes, vec!["fetch failed: timed out"]);
    }
}
