use crate::core::api::FormsApi;
use crate::core::guard::InFlightGuard;
use crate::core::outcome::SubmitOutcome;
use crate::domain::model::{ContactRequest, Severity};
use crate::domain::ports::{ApiTransport, ContactView};
use crate::utils::error::Result;
use std::sync::atomic::AtomicBool;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const CONTACT_FAILED: &str = "Error sending message. Please try again.";

pub struct ContactController<T: ApiTransport, V: ContactView> {
    api: FormsApi<T>,
    view: V,
    in_flight: AtomicBool,
}

impl<T: ApiTransport, V: ContactView> ContactController<T, V> {
    pub fn new(api: FormsApi<T>, view: V) -> Self {
        Self {
            api,
            view,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handles one press of the submit button.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("Contact submission already in flight, ignoring");
            return SubmitOutcome::Busy;
        };

        let request = match self.view.read_form().to_request() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Contact form incomplete: {}", e);
                self.view.show_message(FILL_ALL_FIELDS, Severity::Error);
                return SubmitOutcome::Invalid;
            }
        };

        match self.send(&request).await {
            Ok(message) => {
                tracing::info!("✅ Contact message accepted");
                self.view.show_message(&message, Severity::Success);
                self.view.reset_form();
                SubmitOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Contact submission failed: {}", e);
                self.view.show_message(CONTACT_FAILED, Severity::Error);
                SubmitOutcome::Failed
            }
        }
    }

    async fn send(&self, request: &ContactRequest) -> Result<String> {
        self.api.submit_contact(request).await?.into_result()
    }
}
