/// Events emitted while a grid SASA run advances.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// Rasterization of `total_frames` frames is about to begin.
    FramesStart { total_frames: u64 },
    /// Frame `index` is fully rasterized. Frames may finish out of order.
    FrameDone { index: usize },
    FramesFinish,

    /// Accessible sample points that snapped outside the grid window, summed over all frames.
    PointsDropped { count: u64 },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional observer.
///
/// The scheduler calls [`report`](Self::report) from worker threads, hence the `Send + Sync`
/// bound on the callback.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
