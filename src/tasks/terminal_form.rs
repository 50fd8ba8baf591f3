//! Terminal shell for the tracking form

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::{
    backend::Backend,
    form::{FormEvent, TrackingForm},
};

/// Map one input line to the events it triggers in the current phase
fn line_events(line: &str, tracking: bool) -> Vec<FormEvent> {
    if tracking {
        vec![FormEvent::Stop]
    } else if line.is_empty() {
        vec![FormEvent::Submit]
    } else {
        vec![FormEvent::Input(line.to_string()), FormEvent::Submit]
    }
}

/// Drive the form from `input` lines, printing the rendered view after each line.
/// Returns the form once input is exhausted.
pub async fn terminal_form_task<B, R, W>(
    mut form: TrackingForm<B>,
    input: R,
    mut output: W,
) -> std::io::Result<TrackingForm<B>>
where
    B: Backend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Starting terminal form task");

    output.write_all(format!("{}\n\n", form.view()).as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end_matches('\r');
        for event in line_events(line, form.is_tracking()) {
            debug!("Terminal form event: {:?}", event);
            form.handle(event).await;
        }
        output.write_all(format!("{}\n\n", form.view()).as_bytes()).await?;
        output.flush().await?;
    }

    info!("Terminal input closed");
    Ok(form)
}
