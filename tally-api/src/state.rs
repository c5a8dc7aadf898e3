use std::path::PathBuf;
use tally_slip::SlipRenderer;

#[derive(Clone)]
pub struct AppState {
    /// Slip-format order file served by the download endpoint.
    pub slip_order_path: PathBuf,
    pub renderer: SlipRenderer,
}
