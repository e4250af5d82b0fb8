use crate::core::contact::ContactController;
use crate::core::outcome::{PreviewOutcome, SubmitOutcome};
use crate::core::planner::PlannerController;
use crate::domain::model::PlannerField;
use crate::domain::ports::{ApiTransport, ContactView, PlannerView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    ContactSubmitted,
    LayoutSubmitted,
    PlannerFieldChanged(PlannerField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Submitted(SubmitOutcome),
    Previewed(PreviewOutcome),
    /// The page has no form for this event.
    Detached,
}

/// Routes page events to whichever controllers the page has.
pub struct Page<T, CV, PV>
where
    T: ApiTransport,
    CV: ContactView,
    PV: PlannerView,
{
    contact: Option<ContactController<T, CV>>,
    planner: Option<PlannerController<T, PV>>,
}

impl<T, CV, PV> Default for Page<T, CV, PV>
where
    T: ApiTransport,
    CV: ContactView,
    PV: PlannerView,
{
    fn default() -> Self {
        Self {
            contact: None,
            planner: None,
        }
    }
}

impl<T, CV, PV> Page<T, CV, PV>
where
    T: ApiTransport,
    CV: ContactView,
    PV: PlannerView,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contact(mut self, controller: ContactController<T, CV>) -> Self {
        self.contact = Some(controller);
        self
    }

    pub fn with_planner(mut self, controller: PlannerController<T, PV>) -> Self {
        self.planner = Some(controller);
        self
    }

    pub fn contact(&self) -> Option<&ContactController<T, CV>> {
        self.contact.as_ref()
    }

    pub fn planner(&self) -> Option<&PlannerController<T, PV>> {
        self.planner.as_ref()
    }

    pub async fn handle(&self, event: PageEvent) -> PageOutcome {
        match event {
            PageEvent::ContactSubmitted => match &self.contact {
                Some(contact) => PageOutcome::Submitted(contact.submit().await),
                None => Self::detached(event),
            },
            PageEvent::LayoutSubmitted => match &self.planner {
                Some(planner) => PageOutcome::Submitted(planner.submit().await),
                None => Self::detached(event),
            },
            PageEvent::PlannerFieldChanged(field) => match &self.planner {
                Some(planner) => PageOutcome::Previewed(planner.field_changed(field).await),
                None => Self::detached(event),
            },
        }
    }

    fn detached(event: PageEvent) -> PageOutcome {
        tracing::debug!("No form attached for {:?}", event);
        PageOutcome::Detached
    }
}
