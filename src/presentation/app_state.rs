// Application state for HTTP handlers
use crate::application::stress_controller::StressController;
use crate::infrastructure::config::StressSettings;
use crate::presentation::web_renderer::SharedView;

#[derive(Clone)]
pub struct AppState {
    pub view: SharedView,
    pub stress: StressController,
    pub stress_defaults: StressSettings,
}
