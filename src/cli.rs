use crate::build_info;
use crate::compositor::CloneMode;
use crate::domain::*;
use crate::error::*;
use clap::Parser;
use std::path::PathBuf;

/// Paste a source patch into a destination image without visible seams.
#[derive(Parser, Debug)]
#[command(version = build_info::VERSION, about, long_about = None)]
pub struct Args {
    /// Image providing the patch.
    #[arg(short, long)]
    pub source: PathBuf,

    /// Image the patch is pasted into.
    #[arg(short, long)]
    pub destination: PathBuf,

    /// Where to write the composite.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Domain mask in destination coordinates, every non zero pixel is
    /// replaced. Defaults to the source rectangle inset by one pixel.
    #[arg(short, long)]
    pub mask: Option<PathBuf>,

    /// Destination column of the source's left edge.
    #[arg(short = 'x', long, default_value = "0")]
    pub anchor_x: u32,

    /// Destination row of the source's top edge.
    #[arg(short = 'y', long, default_value = "0")]
    pub anchor_y: u32,

    /// Compositing mode.
    #[arg(long, default_value = "imported")]
    pub mode: CloneMode,

    /// Also write a Canny edge map of the source, as a hint for drawing masks.
    #[arg(long)]
    pub edges: Option<PathBuf>,

    /// The number of threads to use.
    #[arg(short, long, default_value = "4")]
    pub threads: usize,
}

impl Args {
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();
        tracing::debug!(build = %build_info::report(name), "build info");

        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .thread_name(|i| format!("rayon_thread_{}", i))
            .build_global()
        {
            tracing::warn!(error = %e, "rayon thread pool already initialized");
        }

        args
    }

    /// Start the puffin server, view with `puffin_viewer <addr>`.
    #[cfg(feature = "profile-with-puffin")]
    pub fn start_profiler(&self) -> Option<puffin_http::Server> {
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        match puffin_http::Server::new(&addr) {
            Ok(server) => {
                profiling::puffin::set_scopes_on(true);
                tracing::info!(%addr, "profiling server started");
                Some(server)
            }
            Err(e) => {
                tracing::warn!(error = %e, "profiling server failed to start");
                None
            }
        }
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.anchor_x, self.anchor_y)
    }

    /// Domain from the mask image if given, otherwise the interior of
    /// the source rectangle placed at the anchor.
    pub fn domain(&self, source_size: (u32, u32)) -> Result<Domain> {
        match &self.mask {
            Some(path) => {
                let mask = image::open(path)?.to_luma8();
                Ok(Domain::from_mask_image(&mask))
            }
            None => {
                let (width, height) = source_size;
                // Points are also shifted as i32 coordinates.
                let fits = |anchor: u32, len: u32| {
                    anchor
                        .checked_add(len)
                        .is_some_and(|end| end <= i32::MAX as u32)
                };
                if !fits(self.anchor_x, width) || !fits(self.anchor_y, height)
                {
                    return Err(Error::OutOfBoundsDomain {
                        point: self.anchor(),
                        width,
                        height,
                    });
                }
                Ok(Domain::from_rect(
                    self.anchor_x + 1,
                    self.anchor_y + 1,
                    width.saturating_sub(2),
                    height.saturating_sub(2),
                ))
            }
        }
    }
}
