use std::io::Write;
use std::path::Path;
use ns_core::Result;
use ns_inference::{narration, ReportBuilder, SpeechSynthesizer};
use ns_scrappers::ArticleFetcher;

pub async fn news<W: Write>(fetcher: &ArticleFetcher, company: &str, out: &mut W) -> Result<()> {
    let articles = fetcher.fetch_news(company).await;
    let body = serde_json::json!({ "company": company, "articles": articles });
    writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    Ok(())
}

/// Prints the report and, when `audio` is set, writes the Hindi narration there.
///
/// A failed narration is reported on `out` and does not fail the command.
pub async fn analyze<W: Write>(
    fetcher: &ArticleFetcher,
    reports: &ReportBuilder,
    speech: &SpeechSynthesizer,
    company: &str,
    audio: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let articles = fetcher.fetch_news(company).await;
    if articles.is_empty() {
        writeln!(out, "No articles found!")?;
        return Ok(());
    }

    writeln!(out, "Found {} articles for {}", articles.len(), company)?;
    let report = reports.build_report(company, &articles).await;
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;

    let Some(path) = audio else {
        return Ok(());
    };
    tracing::info!("🔊 Generating Hindi narration for {}", company);
    match speech.synthesize(&narration(&report)).await {
        Ok(audio) => {
            tokio::fs::write(path, &audio.bytes).await?;
            writeln!(out, "Hindi TTS audio ({}) written to {}", audio.content_type, path.display())?;
        }
        Err(e) => {
            tracing::error!("❌ Narration failed: {}", e);
            writeln!(out, "Error generating audio: {}", e)?;
        }
    }
    Ok(())
}
