pub mod metadata;
pub mod seek;

pub use metadata::MetadataSizeProbe;
pub use seek::SeekSizeProbe;

use file_size_ports::probe::{ProbeStrategy, SizeProbe};

/// Returns the adapter implementing `strategy`.
pub fn probe_for(strategy: ProbeStrategy) -> Box<dyn SizeProbe> {
    match strategy {
        ProbeStrategy::Seek => Box::new(SeekSizeProbe::new()),
        ProbeStrategy::Metadata => Box::new(MetadataSizeProbe::new()),
    }
}
