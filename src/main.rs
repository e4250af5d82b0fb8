use clap::Parser;
use site_forms::adapters::{Message, PlannerSnapshot};
use site_forms::config::Command;
use site_forms::domain::model::{PlannerField, QuickStat, Region, ReportField, Severity};
use site_forms::utils::logger::{self, LogFormat};
use site_forms::utils::validation::Validate;
use site_forms::{
    CliConfig, ContactController, FormsApi, HttpTransport, MemoryContactView, MemoryPlannerView,
    Page, PageEvent, PageOutcome, PlannerController, PreviewOutcome, SubmitOutcome,
};

type CliPage = Page<HttpTransport, MemoryContactView, MemoryPlannerView>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Logging first, so config errors are recorded
    logger::init_logger(cli.verbose, LogFormat::from_json_flag(cli.log_json));
    tracing::info!("Starting site-forms CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // File config, then CLI overrides
    let config = cli.client_config()?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let transport = HttpTransport::new(&config)?;
    let api = FormsApi::new(transport, config.endpoints.clone());

    // One page per subcommand, holding only the controller it needs
    let outcome = match &cli.command {
        Command::Contact { .. } => {
            let view = MemoryContactView::new(cli.command.contact_form().unwrap_or_default());
            let page: CliPage =
                Page::new().with_contact(ContactController::new(api, view.clone()));

            let outcome = page.handle(PageEvent::ContactSubmitted).await;
            print_messages(&view.messages());
            outcome
        }
        Command::Plan { .. } => {
            let view = MemoryPlannerView::new(cli.command.layout_form().unwrap_or_default());
            let page: CliPage =
                Page::new().with_planner(PlannerController::new(api, view.clone()));

            let outcome = page.handle(PageEvent::LayoutSubmitted).await;
            let snapshot = view.snapshot();
            print_messages(&snapshot.messages);
            if snapshot.is_visible(Region::Output) {
                print_layout(&snapshot);
            }
            outcome
        }
        Command::Recommend { .. } => {
            let view = MemoryPlannerView::new(cli.command.layout_form().unwrap_or_default());
            let page: CliPage =
                Page::new().with_planner(PlannerController::new(api, view.clone()));

            let outcome = page
                .handle(PageEvent::PlannerFieldChanged(PlannerField::Weather))
                .await;
            let snapshot = view.snapshot();
            if snapshot.is_visible(Region::QuickStats) {
                print_quick_stats(&snapshot);
            }
            outcome
        }
    };

    // Exit code by outcome; 2 means required input was missing
    let exit_code = match outcome {
        PageOutcome::Submitted(SubmitOutcome::Completed)
        | PageOutcome::Previewed(PreviewOutcome::Updated) => 0,
        PageOutcome::Submitted(SubmitOutcome::Invalid) => 2,
        PageOutcome::Previewed(PreviewOutcome::Skipped) => {
            eprintln!("💡 Population, temperature and weather are required for recommendations");
            2
        }
        _ => 1,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.severity {
            Severity::Success => println!("✅ {}", message.text),
            Severity::Error => eprintln!("❌ {}", message.text),
        }
    }
}

fn print_layout(snapshot: &PlannerSnapshot) {
    if let Some(src) = &snapshot.image_source {
        // data URLs are huge; show only the head
        let shown: String = src.chars().take(64).collect();
        let ellipsis = if src.chars().count() > 64 { "…" } else { "" };
        println!("🗺️  Layout image: {}{}", shown, ellipsis);
    }

    for field in ReportField::ALL {
        if let Some(text) = snapshot.report_text(field) {
            println!("{:>12}: {}", field.label(), text);
        }
    }

    println!("\nAmenities:");
    for amenity in &snapshot.amenities {
        println!("  • {}", amenity);
    }
    println!("\nRecommendations:");
    for recommendation in &snapshot.recommendations {
        println!("  • {}", recommendation);
    }
}

fn print_quick_stats(snapshot: &PlannerSnapshot) {
    let stat = |s: QuickStat| snapshot.stat(s).unwrap_or("-").to_string();
    println!("📊 Density: {}", stat(QuickStat::Density));
    println!("🛣️  Roads: {}", stat(QuickStat::RoadWidth));
    println!("🏙️  Amenities: {}", stat(QuickStat::AmenitiesCount));
}
