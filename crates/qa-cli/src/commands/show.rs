use std::path::Path;

use crate::cli::RecordTarget;
use crate::commands::common::{format_form_lines, open_form, summarize_form};
use crate::error::CliError;

pub async fn run_show(
    target: &RecordTarget,
    as_json: bool,
    save_preview: Option<&Path>,
    base_url: Option<&str>,
) -> Result<(), CliError> {
    let controller = open_form(target, base_url).await?;
    let view = controller.view();

    if let Some(path) = save_preview {
        let preview = view.preview.as_ref().ok_or(CliError::NoPreview)?;
        tokio::fs::write(path, preview.decode()?).await?;
        tracing::info!("Saved preview of {} to {}", preview.alt_text(), path.display());
    }

    let summary = summarize_form(view);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in format_form_lines(&summary) {
            println!("{line}");
        }
    }

    Ok(())
}
