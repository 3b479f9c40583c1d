use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use nutrigene_tools::api::{ProgressCallback, ProgressEvent};
use std::sync::Arc;
use std::time::Duration;

pub(crate) struct ProgressBarBuilder {
    style_template: &'static str,
    message: String,
    enable_tick: bool,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            style_template: "{spinner:.green} {msg}",
            message: message.into(),
            enable_tick: false,
        }
    }

    pub(crate) fn with_template(mut self, template: &'static str) -> Self {
        self.style_template = template;
        self
    }

    pub(crate) fn with_tick(mut self) -> Self {
        self.enable_tick = true;
        self
    }

    pub(crate) fn build(self) -> Result<ProgressBar> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template(self.style_template)?);
        pb.set_message(self.message);

        if self.enable_tick {
            pb.enable_steady_tick(Duration::from_millis(120));
        }

        Ok(pb)
    }
}

/// Feeds library progress events into a spinner.
pub(crate) fn spinner_callback(pb: ProgressBar) -> ProgressCallback {
    Arc::new(move |event: ProgressEvent| match event {
        ProgressEvent::Started { task } => pb.set_message(task),
        ProgressEvent::Progress { task, current, .. } => {
            pb.set_message(format!("{}: {} lines", task, current))
        }
        ProgressEvent::Message { message, .. } => pb.set_message(message),
        ProgressEvent::Completed { task } => pb.finish_with_message(format!("{} done", task)),
    })
}
