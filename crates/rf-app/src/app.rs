//! Application runtime assembly.

use std::sync::Arc;

use rf_core::config::AppConfig;
use rf_core::ports::NavigatorPort;
use rf_core::theme::Theme;

use crate::consult::ConsultView;
use crate::deep_link_router::DeepLinkRouter;
use crate::deps::AppDeps;
use crate::navigation::NavigationController;
use crate::session::SessionManager;
use crate::theme::ThemeManager;
use crate::usecases::content::{FetchBankProducts, FetchFaqs, FetchGovRequirements, FetchGuides};
use crate::usecases::{
    AcknowledgeRequirements, CompleteConsult, Logout, OpenSettings, SelectTab, StartApp,
    StartJourney, ToggleTheme,
};

/// Every user- or system-triggered operation, ready to execute.
pub struct UseCases {
    pub start_app: StartApp,
    pub start_journey: StartJourney,
    pub acknowledge_requirements: AcknowledgeRequirements,
    pub complete_consult: CompleteConsult,
    pub open_settings: OpenSettings,
    pub select_tab: SelectTab,
    pub logout: Logout,
    pub toggle_theme: ToggleTheme,
    pub fetch_guides: FetchGuides,
    pub fetch_bank_products: FetchBankProducts,
    pub fetch_faqs: FetchFaqs,
    pub fetch_gov_requirements: FetchGovRequirements,
}

/// The application runtime.
///
/// The constructor signature is the dependency manifest: all ports must be
/// provided, no defaults, no optional fields.
pub struct App {
    pub config: AppConfig,
    pub session: Arc<SessionManager>,
    pub navigation: Arc<NavigationController>,
    pub theme: Arc<ThemeManager>,
    pub consult: Arc<ConsultView>,
    pub router: Arc<DeepLinkRouter>,
    usecases: UseCases,
}

impl App {
    pub fn new(config: AppConfig, deps: AppDeps, device_scheme: Option<Theme>) -> Self {
        let session = Arc::new(SessionManager::new(deps.session_store.clone()));
        let navigation = Arc::new(NavigationController::new());
        let navigator: Arc<dyn NavigatorPort> = navigation.clone();
        let router = Arc::new(DeepLinkRouter::new(navigator.clone()));
        let theme = Arc::new(ThemeManager::new(device_scheme));
        let consult = Arc::new(ConsultView::new(config.clone(), router.clone()));

        let usecases = UseCases {
            start_app: StartApp::new(
                session.clone(),
                navigation.clone(),
                router.clone(),
                deps.deep_links.clone(),
            ),
            start_journey: StartJourney::new(session.clone(), navigator.clone()),
            acknowledge_requirements: AcknowledgeRequirements::new(navigator.clone()),
            complete_consult: CompleteConsult::new(navigator.clone()),
            open_settings: OpenSettings::new(navigator.clone()),
            select_tab: SelectTab::new(navigator.clone()),
            logout: Logout::new(navigator),
            toggle_theme: ToggleTheme::new(theme.clone()),
            fetch_guides: FetchGuides::new(deps.content.clone(), session.clone()),
            fetch_bank_products: FetchBankProducts::new(deps.content.clone(), session.clone()),
            fetch_faqs: FetchFaqs::new(deps.content.clone(), session.clone()),
            fetch_gov_requirements: FetchGovRequirements::new(deps.content, session.clone()),
        };

        Self {
            config,
            session,
            navigation,
            theme,
            consult,
            router,
            usecases,
        }
    }

    pub fn usecases(&self) -> &UseCases {
        &self.usecases
    }
}
