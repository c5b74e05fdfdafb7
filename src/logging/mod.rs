use crate::cli::Args;
use tracing_quickwit::QuickwitLoggingLayerBuilder;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init(args: &Args) {
    let quickwit_logging_layer = QuickwitLoggingLayerBuilder::new(args.quickwit_url.clone())
        .marker_field("task")
        .map_marker_to_index("http_request", "http_requests")
        .map_marker_to_index("locations_generated", "locations_generated")
        .with_batch_size(100)
        .build();
    let env_filter = EnvFilter::default()
        .add_directive("random_location_server=info".parse().expect(
            "Failed to parse the default logging directive.",
        ));
    tracing_subscriber::registry()
        .with(quickwit_logging_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
