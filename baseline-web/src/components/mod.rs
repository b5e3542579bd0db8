pub mod baseline_status;
pub mod daisy_ui;

pub use baseline_status::{
    BaselineStatus, BaselineStatusProps, BaselineStatusView, BaselineStatusViewProps,
};
