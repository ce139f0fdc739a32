use qa_core::form::{FormView, MemoryFormView, TextField};

use crate::cli::EditArgs;
use crate::commands::common::{open_form, print_alerts, read_selected_file};
use crate::error::CliError;

pub async fn run_edit(args: &EditArgs, base_url: Option<&str>) -> Result<(), CliError> {
    // Read local inputs first so a bad path fails before any request.
    let content = resolve_content(args).await?;
    let attachment = match args.attach.as_deref() {
        Some(path) => Some(read_selected_file(path).await?),
        None => None,
    };

    let mut controller = open_form(&args.target, base_url).await?;
    apply_field_edits(controller.view_mut(), args, content.as_deref());

    if args.remove_attachment {
        controller.remove_attachment_clicked();
    }
    if let Some(file) = attachment {
        controller.view_mut().selected_file = Some(file);
        controller.file_selection_changed();
    }

    let outcome = controller.submit().await;
    print_alerts(controller.view_mut());
    let redirect_url = outcome?;

    println!("{redirect_url}");
    Ok(())
}

pub async fn resolve_content(args: &EditArgs) -> Result<Option<String>, CliError> {
    if let Some(path) = args.content_file.as_deref() {
        return Ok(Some(tokio::fs::read_to_string(path).await?));
    }
    Ok(args.content.clone())
}

/// Type the requested changes into the loaded form.
pub fn apply_field_edits(view: &mut MemoryFormView, args: &EditArgs, content: Option<&str>) {
    let edits = [
        (TextField::Writer, args.writer.as_deref()),
        (TextField::Email, args.email.as_deref()),
        (TextField::Title, args.title.as_deref()),
        (TextField::Password, args.password.as_deref()),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            view.set_text(field, value);
        }
    }

    if let Some(html) = content {
        view.set_editor_html(html);
    }
    if let Some(hidden) = args.hidden {
        view.set_hidden_checked(hidden);
    }
}
