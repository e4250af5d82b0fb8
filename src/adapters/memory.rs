//! In-memory view-models standing in for the page.
//!
//! Both views are cheap to clone and share their state, so a caller can hand
//! one to a controller and keep another to inspect what was rendered.

use crate::domain::model::{
    ContactForm, LayoutForm, PlannerField, QuickStat, Region, ReportField, ReportList, Severity,
};
use crate::domain::ports::{ContactView, MessageSink, PlannerView};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
struct ContactState {
    form: ContactForm,
    messages: Vec<Message>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryContactView {
    state: Arc<Mutex<ContactState>>,
}

impl MemoryContactView {
    pub fn new(form: ContactForm) -> Self {
        Self {
            state: Arc::new(Mutex::new(ContactState {
                form,
                messages: Vec::new(),
            })),
        }
    }

    pub fn set_form(&self, form: ContactForm) {
        lock(&self.state).form = form;
    }

    pub fn form(&self) -> ContactForm {
        lock(&self.state).form.clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        lock(&self.state).messages.clone()
    }

    pub fn last_message(&self) -> Option<Message> {
        lock(&self.state).messages.last().cloned()
    }
}

impl MessageSink for MemoryContactView {
    fn show_message(&self, text: &str, severity: Severity) {
        lock(&self.state).messages.push(Message {
            text: text.to_string(),
            severity,
        });
    }
}

impl ContactView for MemoryContactView {
    fn read_form(&self) -> ContactForm {
        self.form()
    }

    fn reset_form(&self) {
        lock(&self.state).form = ContactForm::default();
    }
}

/// Everything the planner page shows at one moment.
#[derive(Debug, Clone)]
pub struct PlannerSnapshot {
    pub form: LayoutForm,
    pub visible: HashMap<Region, bool>,
    /// Every visibility change in the order it happened.
    pub visibility_log: Vec<(Region, bool)>,
    pub image_source: Option<String>,
    pub report: HashMap<ReportField, String>,
    pub amenities: Vec<String>,
    pub recommendations: Vec<String>,
    pub stats: HashMap<QuickStat, String>,
    pub messages: Vec<Message>,
}

impl PlannerSnapshot {
    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.get(&region).copied().unwrap_or(false)
    }

    pub fn report_text(&self, field: ReportField) -> Option<&str> {
        self.report.get(&field).map(String::as_str)
    }

    pub fn stat(&self, stat: QuickStat) -> Option<&str> {
        self.stats.get(&stat).map(String::as_str)
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for PlannerSnapshot {
    fn default() -> Self {
        // Initial page: placeholder shown, everything else hidden.
        let visible = HashMap::from([
            (Region::Loading, false),
            (Region::Output, false),
            (Region::Placeholder, true),
            (Region::QuickStats, false),
        ]);

        Self {
            form: LayoutForm::default(),
            visible,
            visibility_log: Vec::new(),
            image_source: None,
            report: HashMap::new(),
            amenities: Vec::new(),
            recommendations: Vec::new(),
            stats: HashMap::new(),
            messages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPlannerView {
    state: Arc<Mutex<PlannerSnapshot>>,
}

impl MemoryPlannerView {
    pub fn new(form: LayoutForm) -> Self {
        let view = Self::default();
        lock(&view.state).form = form;
        view
    }

    pub fn set_field(&self, field: PlannerField, value: impl Into<String>) {
        lock(&self.state).form.set(field, value);
    }

    pub fn snapshot(&self) -> PlannerSnapshot {
        lock(&self.state).clone()
    }
}

impl MessageSink for MemoryPlannerView {
    fn show_message(&self, text: &str, severity: Severity) {
        lock(&self.state).messages.push(Message {
            text: text.to_string(),
            severity,
        });
    }
}

impl PlannerView for MemoryPlannerView {
    fn read_form(&self) -> LayoutForm {
        lock(&self.state).form.clone()
    }

    fn set_visible(&self, region: Region, visible: bool) {
        let mut state = lock(&self.state);
        state.visible.insert(region, visible);
        state.visibility_log.push((region, visible));
    }

    fn set_image_source(&self, src: &str) {
        lock(&self.state).image_source = Some(src.to_string());
    }

    fn set_report_text(&self, field: ReportField, text: &str) {
        lock(&self.state).report.insert(field, text.to_string());
    }

    fn replace_list(&self, list: ReportList, items: &[String]) {
        let mut state = lock(&self.state);
        let target = match list {
            ReportList::Amenities => &mut state.amenities,
            ReportList::Recommendations => &mut state.recommendations,
        };
        target.clear();
        target.extend(items.iter().cloned());
    }

    fn set_stat(&self, stat: QuickStat, text: &str) {
        lock(&self.state).stats.insert(stat, text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_reset_clears_fields_and_keeps_messages() {
        let view = MemoryContactView::new(ContactForm {
            name: "Ada".to_string(),
            ..ContactForm::default()
        });
        let handle = view.clone();

        view.show_message("hello", Severity::Success);
        view.reset_form();

        assert_eq!(handle.form(), ContactForm::default());
        assert_eq!(handle.messages().len(), 1);
    }

    #[test]
    fn test_planner_initial_visibility() {
        let snapshot = MemoryPlannerView::default().snapshot();
        assert!(snapshot.is_visible(Region::Placeholder));
        assert!(!snapshot.is_visible(Region::Loading));
        assert!(!snapshot.is_visible(Region::Output));
        assert!(!snapshot.is_visible(Region::QuickStats));
    }

    #[test]
    fn test_replace_list_discards_previous_items() {
        let view = MemoryPlannerView::default();
        view.replace_list(
            ReportList::Amenities,
            &["Parks".to_string(), "Schools".to_string()],
        );
        view.replace_list(ReportList::Amenities, &["Markets".to_string()]);

        let snapshot = view.snapshot();
        assert_eq!(snapshot.amenities, vec!["Markets".to_string()]);
        assert!(snapshot.recommendations.is_empty());
    }
}
