use weave_core::Scope;
use weave_navigation::Navigator;
use weave_widgets::Button;

use crate::app::{DemoScreen, Route};
use crate::screens::Screen;

/// Start screen: one button per demo.
pub struct HomeScreen {
    buttons: Vec<(&'static str, Button)>,
}

impl HomeScreen {
    pub fn new(nav: Navigator<Route, DemoScreen>, scope: &Scope) -> Self {
        let targets = [
            ("numbers", "Numbers", Route::Numbers),
            ("numbers-hosted", "Numbers (view model)", Route::NumbersHosted),
            ("validation", "Simple validation", Route::SimpleValidation),
        ];
        let buttons = targets
            .into_iter()
            .map(|(name, title, route)| {
                let button = Button::new(title);
                button
                    .taps()
                    .subscribe({
                        let nav = nav.clone();
                        move |_| {
                            log::info!("home: opening {route:?}");
                            nav.push(route);
                        }
                    })
                    .disposed_by(scope);
                (name, button)
            })
            .collect();
        Self { buttons }
    }
}

impl Screen for HomeScreen {
    fn title(&self) -> &str {
        "Home"
    }

    fn buttons(&self) -> Vec<(&str, &Button)> {
        self.buttons.iter().map(|(n, b)| (*n, b)).collect()
    }
}
