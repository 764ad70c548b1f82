use seamless::cli::Args;
use seamless::edges::{CannyEdges, EdgeDetector};
use seamless::seamless_clone;
use tracing_subscriber::EnvFilter;

fn main() -> seamless::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::cli_setup("clone_png");
    #[cfg(feature = "profile-with-puffin")]
    let _profiler = args.start_profiler();

    let source = image::open(&args.source)?;
    let destination = image::open(&args.destination)?.to_rgb8();

    if let Some(edges_path) = &args.edges {
        let edges = CannyEdges::default().detect_edges(&source);
        edges.save(edges_path)?;
        tracing::info!(path = %edges_path.display(), "edge hint written");
    }

    let source = source.to_rgb8();
    let domain = args.domain(source.dimensions())?;
    let output = seamless_clone(
        &source,
        &destination,
        &domain,
        args.anchor(),
        args.mode,
    )?;
    profiling::finish_frame!();
    output.save(&args.output)?;
    tracing::info!(path = %args.output.display(), "composite written");
    Ok(())
}
