use crate::domain::model::{
    ContactForm, LayoutForm, QuickStat, Region, ReportField, ReportList, Severity,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Request methods the backend accepts; all three endpoints are POST-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

/// The shared API helper: one JSON request/response exchange.
///
/// Implementations fail on network errors, non-success statuses and bodies
/// that are not JSON. They never retry.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value>;
}

/// Writes a status line into the page's message region.
pub trait MessageSink: Send + Sync {
    fn show_message(&self, text: &str, severity: Severity);
}

pub trait ContactView: MessageSink {
    fn read_form(&self) -> ContactForm;
    fn reset_form(&self);
}

pub trait PlannerView: MessageSink {
    fn read_form(&self) -> LayoutForm;
    fn set_visible(&self, region: Region, visible: bool);
    fn set_image_source(&self, src: &str);
    fn set_report_text(&self, field: ReportField, text: &str);
    /// Clears the list and appends one item per entry.
    fn replace_list(&self, list: ReportList, items: &[String]);
    fn set_stat(&self, stat: QuickStat, text: &str);
}
