use weave_core::{Scope, Signal, combine_latest2};
use weave_widgets::{ActionStyle, Alert, AlertAction, AlertPresenter, Button, Label, TextField};

use crate::config::DemoConfig;
use crate::rules::{length_hint, validate};
use crate::screens::Screen;

/// Username/password form whose action button unlocks once both fields are
/// long enough.
pub struct SimpleValidationScreen {
    username: TextField,
    username_hint: Label,
    password: TextField,
    password_hint: Label,
    do_something: Button,
}

impl SimpleValidationScreen {
    pub fn new(config: &DemoConfig, alerts: AlertPresenter, scope: &Scope) -> Self {
        let rules = config.rules();
        let username = TextField::new("Username");
        let password = TextField::new("Password");
        let username_hint = Label::new(length_hint("Username", rules.min_username));
        let password_hint = Label::new(length_hint("Password", rules.min_password));
        let do_something = Button::new("Do something");

        // one derived node per flag; every binding below shares it
        let username_valid = username
            .changes()
            .map(move |text| validate(text, rules.min_username));
        let password_valid = password
            .changes()
            .map(move |text| validate(text, rules.min_password));
        let everything_valid = combine_latest2(&username_valid, &password_valid, |u, p| *u && *p);

        bind_flag(&username_valid, &password.enabled, scope);
        bind_flag(&username_valid, &username_hint.hidden, scope);
        bind_flag(&password_valid, &password_hint.hidden, scope);
        bind_flag(&everything_valid, &do_something.enabled, scope);

        let alert = config.alert.clone();
        do_something
            .taps()
            .subscribe(move |_| {
                alerts.present(
                    Alert::new(&alert.title, &alert.message)
                        .action(AlertAction::new(&alert.confirm, ActionStyle::Default)),
                );
            })
            .disposed_by(scope);

        Self {
            username,
            username_hint,
            password,
            password_hint,
            do_something,
        }
    }

    pub fn do_something(&self) -> &Button {
        &self.do_something
    }
}

fn bind_flag(flag: &Signal<bool>, target: &Signal<bool>, scope: &Scope) {
    let target = target.clone();
    flag.bind(move |v| target.set(*v)).disposed_by(scope);
}

impl Screen for SimpleValidationScreen {
    fn title(&self) -> &str {
        "Simple validation"
    }

    fn fields(&self) -> Vec<(&str, &TextField)> {
        vec![("username", &self.username), ("password", &self.password)]
    }

    fn labels(&self) -> Vec<(&str, &Label)> {
        vec![
            ("username-hint", &self.username_hint),
            ("password-hint", &self.password_hint),
        ]
    }

    fn buttons(&self) -> Vec<(&str, &Button)> {
        vec![("do-something", &self.do_something)]
    }
}
