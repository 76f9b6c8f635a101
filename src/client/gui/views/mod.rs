pub mod home;
pub mod toasts;
