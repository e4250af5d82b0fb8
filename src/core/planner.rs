use crate::core::api::FormsApi;
use crate::core::contact::FILL_ALL_FIELDS;
use crate::core::guard::{Generation, InFlightGuard};
use crate::core::outcome::{PreviewOutcome, SubmitOutcome};
use crate::domain::model::{
    GeneratedLayout, LayoutRequest, PlannerField, QuickStat, Region, ReportField, ReportList,
    Severity,
};
use crate::domain::ports::{ApiTransport, PlannerView};
use crate::utils::error::Result;
use std::sync::atomic::AtomicBool;

pub const LAYOUT_FAILED: &str = "Error generating layout. Please try again.";

/// Drives the layout planner page: report generation on submit and the
/// quick recommendation preview on field changes.
pub struct PlannerController<T: ApiTransport, V: PlannerView> {
    api: FormsApi<T>,
    view: V,
    in_flight: AtomicBool,
    preview_generation: Generation,
}

impl<T: ApiTransport, V: PlannerView> PlannerController<T, V> {
    pub fn new(api: FormsApi<T>, view: V) -> Self {
        Self {
            api,
            view,
            in_flight: AtomicBool::new(false),
            preview_generation: Generation::default(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("Layout generation already in flight, ignoring");
            return SubmitOutcome::Busy;
        };

        let request = match self.view.read_form().to_request() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Planner form incomplete: {}", e);
                self.view.show_message(FILL_ALL_FIELDS, Severity::Error);
                return SubmitOutcome::Invalid;
            }
        };

        self.view.set_visible(Region::Loading, true);
        self.view.set_visible(Region::Output, false);
        self.view.set_visible(Region::Placeholder, false);

        match self.generate(&request).await {
            Ok(layout) => {
                tracing::info!(
                    "✅ Layout generated: {} amenities, {} recommendations",
                    layout.report.amenities.len(),
                    layout.report.recommendations.len()
                );
                self.render(&layout);
                self.view.set_visible(Region::Output, true);
                self.view.set_visible(Region::Loading, false);
                SubmitOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Layout generation failed: {}", e);
                self.view.set_visible(Region::Loading, false);
                self.view.set_visible(Region::Placeholder, true);
                self.view.show_message(LAYOUT_FAILED, Severity::Error);
                SubmitOutcome::Failed
            }
        }
    }

    async fn generate(&self, request: &LayoutRequest) -> Result<GeneratedLayout> {
        self.api.generate_layout(request).await?.into_result()
    }

    fn render(&self, layout: &GeneratedLayout) {
        let report = &layout.report;

        self.view.set_image_source(&layout.layout_image);
        for field in ReportField::ALL {
            self.view.set_report_text(field, field.value(report));
        }
        self.view.replace_list(ReportList::Amenities, &report.amenities);
        self.view
            .replace_list(ReportList::Recommendations, &report.recommendations);
    }

    /// Any input or select in the form changed.
    pub async fn field_changed(&self, field: PlannerField) -> PreviewOutcome {
        tracing::debug!("Planner field changed: {:?}", field);
        self.preview().await
    }

    /// Best-effort quick stats. Never reports an error to the page.
    pub async fn preview(&self) -> PreviewOutcome {
        let Some(request) = self.view.read_form().recommendation_request() else {
            return PreviewOutcome::Skipped;
        };

        let generation = self.preview_generation.next();
        let response = match self.api.get_recommendations(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Quick recommendations unavailable: {}", e);
                return PreviewOutcome::Failed;
            }
        };

        if !self.preview_generation.is_current(generation) {
            tracing::debug!("Discarding stale recommendations (request {})", generation);
            return PreviewOutcome::Stale;
        }

        self.view.set_visible(Region::QuickStats, true);
        self.view.set_stat(QuickStat::Density, &response.density);
        self.view
            .set_stat(QuickStat::RoadWidth, &response.road_width_label());
        self.view.set_stat(
            QuickStat::AmenitiesCount,
            &response.amenities.len().to_string(),
        );
        PreviewOutcome::Updated
    }
}
