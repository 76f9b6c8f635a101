pub mod loading_pulse;
pub mod response_display;
pub mod tabs;
pub mod text_form;
pub mod upload_form;
