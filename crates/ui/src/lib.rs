pub mod capture;
pub mod intro;
pub mod labels;
pub mod palette;
pub mod story;
pub mod viewer;

pub use capture::{UiInputCaptureRes, update_ui_input_capture};
pub use intro::impact_intro_overlay_system;
pub use labels::annotation_labels_system;
pub use story::{SECTION_MARGIN, StoryBlock, StoryState, nav_bar_system, story_panel_system};
pub use viewer::{publish_host_surface, viewer_controls_system};
