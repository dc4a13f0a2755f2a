pub mod recolor;

pub use recolor::{
    ApplyReport, GenerateReport, OverlayReport, RecolorService, RunOptions, RunPlan, RunReport,
    ScanReport,
};
