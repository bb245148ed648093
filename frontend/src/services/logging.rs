/// Console logger that tags each line with the component it came from.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        if cfg!(debug_assertions) {
            gloo::console::debug!(Self::line(component, message));
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}
