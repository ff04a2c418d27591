use std::fmt::Write as _;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use weave_core::on_dispose;
use weave_navigation::{EntryScope, NavBackStack, factory};
use weave_widgets::AlertPresenter;

use crate::config::DemoConfig;
use crate::screens::{
    HomeScreen, NumbersHostedScreen, NumbersScreen, Screen, SimpleValidationScreen,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Numbers,
    NumbersHosted,
    SimpleValidation,
}

pub type DemoScreen = Box<dyn Screen>;

/// The demo application: a back stack of screens plus the alert presenter
/// they share.
pub struct App {
    stack: NavBackStack<Route, DemoScreen>,
    alerts: AlertPresenter,
}

impl App {
    pub fn new(config: DemoConfig) -> Self {
        let alerts = AlertPresenter::new();
        let config = Rc::new(config);
        let make = {
            let alerts = alerts.clone();
            move |entry: &EntryScope<Route, DemoScreen>| -> DemoScreen {
                let route = *entry.key();
                let scope = entry.scope();
                log::info!("screen {route:?} appeared (entry {})", entry.id());
                on_dispose(move || log::info!("screen {route:?} disposed")).disposed_by(scope);
                match route {
                    Route::Home => Box::new(HomeScreen::new(entry.navigator(), scope)),
                    Route::Numbers => Box::new(NumbersScreen::new(config.number_fields, scope)),
                    Route::NumbersHosted => Box::new(NumbersHostedScreen::new(scope)),
                    Route::SimpleValidation => {
                        Box::new(SimpleValidationScreen::new(&config, alerts.clone(), scope))
                    }
                }
            }
        };
        Self {
            stack: NavBackStack::new(Route::Home, factory(make)),
            alerts,
        }
    }

    pub fn stack(&self) -> &NavBackStack<Route, DemoScreen> {
        &self.stack
    }

    pub fn alerts(&self) -> &AlertPresenter {
        &self.alerts
    }

    pub fn current(&self) -> Option<Rc<DemoScreen>> {
        self.stack.top_screen()
    }

    pub fn route(&self) -> Option<Route> {
        self.stack.top().map(|(_, key, _)| key)
    }

    /// Current screen, with the alert on top when one is presented.
    pub fn render(&self) -> String {
        let mut out = match self.current() {
            Some(screen) => screen.render(),
            None => String::from("(no screen)\n"),
        };
        if let Some(alert) = self.alerts.current() {
            let _ = writeln!(out, "  +-- {} --", alert.title);
            let _ = writeln!(out, "  | {}", alert.message);
            for (i, action) in alert.actions.iter().enumerate() {
                let _ = writeln!(out, "  | ({i}) {}", action.title);
            }
        }
        out
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // screens hold navigators back into the stack; disposing breaks the cycle
        self.stack.clear();
    }
}
