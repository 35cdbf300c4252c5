/// Hook the host implements so the runtime can ask for another frame.
pub trait RuntimeScheduler {
    /// Called whenever new layout or pre-draw work is queued.
    fn schedule_frame(&self);
}
