#[cfg(test)]
mod rules_tests {
    use proptest::prelude::*;

    use crate::rules::*;

    #[test]
    fn parse_number_falls_back_to_zero() {
        assert_eq!(parse_number("42"), 42);
        assert_eq!(parse_number("-7"), -7);
        assert_eq!(parse_number("+7"), 7);
        assert_eq!(parse_number(""), 0);
        assert_eq!(parse_number("abc"), 0);
        assert_eq!(parse_number("12a"), 0);
        assert_eq!(parse_number(" 12"), 0);
        assert_eq!(parse_number("1.5"), 0);
        assert_eq!(parse_number("99999999999999999999"), 0);
    }

    #[test]
    fn sum_of_four_fields() {
        assert_eq!(sum_text(&["", "", "", ""]), "0");
        assert_eq!(sum_text(&["1", "2", "3", "4"]), "10");
        assert_eq!(sum_text(&["abc", "2", "3", "4"]), "9");
        assert_eq!(sum_text(&["-10", "2", "3", "4"]), "-1");
    }

    #[test]
    fn sum_does_not_overflow() {
        let max = i64::MAX.to_string();
        let total = sum_numbers(&[max.as_str(), max.as_str(), max.as_str(), max.as_str()]);
        assert_eq!(total, 4 * i128::from(i64::MAX));
    }

    #[test]
    fn validate_boundary_is_inclusive() {
        assert!(!validate("user", 5));
        assert!(validate("users", 5));
        assert!(validate("", 0));
        // five user-perceived characters, more bytes and chars
        assert!(validate("ne\u{301}e\u{301}st", 5));
        assert!(!validate("ne\u{301}e\u{301}s", 5));
    }

    #[test]
    fn gate_needs_both() {
        let rules = LengthRules::default();
        assert!(gate("users", "pass1", rules));
        assert!(!gate("usr", "pass1", rules));
        assert!(!gate("users", "pass", rules));
    }

    #[test]
    fn hint_text() {
        assert_eq!(
            length_hint("Username", 5),
            "Username has to be at least 5 characters"
        );
    }

    fn field() -> impl Strategy<Value = String> {
        prop_oneof![
            any::<i64>().prop_map(|n| n.to_string()),
            "[0-9a-z +-]{0,6}",
        ]
    }

    proptest! {
        #[test]
        fn sum_is_sum_of_parsed_fields(a in field(), b in field(), c in field(), d in field()) {
            let expected = [&a, &b, &c, &d]
                .iter()
                .map(|t| i128::from(t.parse::<i64>().unwrap_or(0)))
                .sum::<i128>();
            prop_assert_eq!(sum_text(&[&a, &b, &c, &d]), expected.to_string());
        }

        #[test]
        fn validate_matches_threshold(text in "\\PC{0,12}", min in 0usize..10) {
            use unicode_segmentation::UnicodeSegmentation;
            prop_assert_eq!(validate(&text, min), text.graphemes(true).count() >= min);
        }
    }
}

#[cfg(test)]
mod config_tests {
    use crate::config::DemoConfig;
    use crate::error::ConfigError;

    #[test]
    fn defaults_match_the_demo() {
        let config = DemoConfig::default();
        assert_eq!(config.number_fields, 4);
        assert_eq!(config.min_username_length, 5);
        assert_eq!(config.min_password_length, 5);
        assert_eq!(config.alert.title, "RxExample");
        assert_eq!(config.alert.message, "This is wonderful");
        assert_eq!(config.alert.confirm, "Ok");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            DemoConfig::from_json(r#"{"number_fields": 3, "alert": {"title": "Hi"}}"#).unwrap();
        assert_eq!(config.number_fields, 3);
        assert_eq!(config.alert.title, "Hi");
        assert_eq!(config.alert.confirm, "Ok");
        assert_eq!(config.rules().min_password, 5);
    }

    #[test]
    fn rejects_bad_config() {
        assert!(matches!(
            DemoConfig::from_json(r#"{"number_fields": 0}"#),
            Err(ConfigError::NoNumberFields)
        ));
        assert!(matches!(
            DemoConfig::from_json(r#"{"colour": "red"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DemoConfig::load("/definitely/not/here.json"),
            Err(ConfigError::Read { .. })
        ));
    }
}

#[cfg(test)]
mod screen_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use weave_core::Scope;
    use weave_widgets::AlertPresenter;

    use crate::config::DemoConfig;
    use crate::screens::*;

    fn set(screen: &dyn Screen, field: &str, text: &str) {
        assert!(screen.field(field).expect("field").set_text(text));
    }

    #[test]
    fn numbers_start_at_zero() {
        let scope = Scope::new();
        let screen = NumbersScreen::new(4, &scope);
        assert_eq!(screen.result().text(), "0");
        assert_eq!(screen.fields().len(), 4);
    }

    #[test]
    fn numbers_recombine_latest_values() {
        let scope = Scope::new();
        let screen = NumbersScreen::new(4, &scope);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = screen.result().text.subscribe({
            let seen = seen.clone();
            move |t: &String| seen.borrow_mut().push(t.clone())
        });

        for (field, text) in [("number1", "1"), ("number2", "2"), ("number3", "3"), ("number4", "4")] {
            set(&screen, field, text);
        }
        assert_eq!(screen.result().text(), "10");

        set(&screen, "number1", "10");
        assert_eq!(screen.result().text(), "19");

        set(&screen, "number1", "abc");
        assert_eq!(screen.result().text(), "9");
        assert_eq!(*seen.borrow(), vec!["1", "3", "6", "10", "19", "9"]);
    }

    #[test]
    fn numbers_teardown_releases_subscriptions() {
        let scope = Scope::new();
        let screen = NumbersScreen::new(3, &scope);
        let first = screen.field("number1").expect("field").clone();
        set(&screen, "number1", "5");
        assert_eq!(screen.result().text(), "5");

        scope.dispose();
        first.set_text("6");

        assert_eq!(screen.result().text(), "5");
        assert_eq!(first.changes().subscriber_count(), 0);
    }

    #[test]
    fn view_model_holds_the_result() {
        let scope = Scope::new();
        let vm = NumbersViewModel::new(&scope);
        assert_eq!(vm.result_value.get(), "0");

        vm.numbers[0].set("1".into());
        vm.numbers[3].set("41".into());
        assert_eq!(vm.result_value.get(), "42");

        scope.dispose();
        vm.numbers[1].set("100".into());
        assert_eq!(vm.result_value.get(), "42");
    }

    #[test]
    fn hosted_numbers_flow_through_the_view_model() {
        let scope = Scope::new();
        let screen = NumbersHostedScreen::new(&scope);
        assert_eq!(screen.total().text(), "0");

        set(&screen, "number2", "20");
        set(&screen, "number4", "x");
        set(&screen, "number3", "-5");

        assert_eq!(screen.vm.numbers[1].get(), "20");
        assert_eq!(screen.vm.result_value.get(), "15");
        assert_eq!(screen.total().text(), "15");

        // disposing the screen scope disposes the view model's child scope too
        scope.dispose();
        screen.vm.numbers[0].set("1".into());
        assert_eq!(screen.vm.result_value.get(), "15");
    }

    fn validation() -> (SimpleValidationScreen, AlertPresenter, Scope) {
        let scope = Scope::new();
        let alerts = AlertPresenter::new();
        let screen = SimpleValidationScreen::new(&DemoConfig::default(), alerts.clone(), &scope);
        (screen, alerts, scope)
    }

    fn label_hidden(screen: &SimpleValidationScreen, name: &str) -> bool {
        screen
            .labels()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, l)| l.is_hidden())
            .expect("label")
    }

    #[test]
    fn validation_starts_locked() {
        let (screen, _alerts, _scope) = validation();
        assert!(!screen.field("password").expect("password").enabled.get());
        assert!(!screen.do_something().is_enabled());
        assert!(!label_hidden(&screen, "username-hint"));
        assert!(!label_hidden(&screen, "password-hint"));
    }

    #[test]
    fn validation_unlocks_step_by_step() {
        let (screen, _alerts, _scope) = validation();

        set(&screen, "username", "user");
        assert!(!screen.field("password").expect("password").enabled.get());

        set(&screen, "username", "users");
        assert!(screen.field("password").expect("password").enabled.get());
        assert!(label_hidden(&screen, "username-hint"));
        assert!(!screen.do_something().is_enabled());

        set(&screen, "password", "pass1");
        assert!(label_hidden(&screen, "password-hint"));
        assert!(screen.do_something().is_enabled());

        // gate drops as soon as either side becomes invalid
        set(&screen, "username", "usr");
        assert!(!screen.do_something().is_enabled());
        assert!(!screen.field("password").expect("password").enabled.get());
    }

    #[test]
    fn tap_presents_one_alert_with_one_action() {
        let (screen, alerts, _scope) = validation();

        // programmatic tap while invalid still presents
        screen.do_something().send_tap();
        let alert = alerts.current().expect("alert");
        assert_eq!(alert.title, "RxExample");
        assert_eq!(alert.message, "This is wonderful");
        assert_eq!(alert.actions.len(), 1);
        assert_eq!(alert.actions[0].title, "Ok");

        // modal: a second tap does not stack another alert
        screen.do_something().send_tap();
        assert_eq!(alerts.presented_count(), 1);

        assert!(alerts.dismiss(0));
        assert!(!alerts.is_presenting());
    }

    #[test]
    fn user_tap_on_valid_form_presents_alert() {
        let (screen, alerts, _scope) = validation();
        set(&screen, "username", "users");
        set(&screen, "password", "pass1");

        assert!(screen.do_something().tap());
        assert_eq!(alerts.presented_count(), 1);
    }

    #[test]
    fn validation_teardown_stops_alerts() {
        let (screen, alerts, scope) = validation();
        scope.dispose();

        screen.do_something().send_tap();
        assert!(!alerts.is_presenting());
        assert_eq!(screen.do_something().taps().subscriber_count(), 0);
        for (_, field) in screen.fields() {
            assert_eq!(field.changes().subscriber_count(), 0);
        }
    }
}

#[cfg(test)]
mod app_tests {
    use crate::app::{App, Route};
    use crate::config::DemoConfig;
    use crate::error::ShellError;
    use crate::shell::{Command, Outcome, Shell};

    fn shell() -> Shell {
        Shell::new(App::new(DemoConfig::default()))
    }

    fn run(shell: &Shell, line: &str) -> Result<String, ShellError> {
        match shell.execute(line.parse()?)? {
            Outcome::Output(text) => Ok(text),
            Outcome::Quit => Ok(String::from("<quit>")),
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!("show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("".parse::<Command>(), Ok(Command::Show));
        assert_eq!("tap numbers".parse::<Command>(), Ok(Command::Tap("numbers".into())));
        assert_eq!(
            "type username hello world".parse::<Command>(),
            Ok(Command::Type {
                field: "username".into(),
                text: "hello world".into()
            })
        );
        assert_eq!(
            "set number1".parse::<Command>(),
            Ok(Command::Set {
                field: "number1".into(),
                text: String::new()
            })
        );
        assert_eq!("dismiss".parse::<Command>(), Ok(Command::Dismiss(0)));
        assert_eq!("dismiss 2".parse::<Command>(), Ok(Command::Dismiss(2)));
        assert_eq!(
            "dismiss x".parse::<Command>(),
            Err(ShellError::BadIndex("x".into()))
        );
        assert_eq!(
            "tap".parse::<Command>(),
            Err(ShellError::MissingArgument {
                command: "tap",
                what: "a name"
            })
        );
        assert_eq!(
            "fly".parse::<Command>(),
            Err(ShellError::UnknownCommand("fly".into()))
        );
    }

    #[test]
    fn home_lists_demos() {
        let shell = shell();
        assert_eq!(shell.app().route(), Some(Route::Home));
        assert_eq!(
            shell.app().render(),
            "== Home ==\n  [numbers] Numbers\n  [numbers-hosted] Numbers (view model)\n  [validation] Simple validation\n"
        );
    }

    #[test]
    fn numbers_session() {
        let shell = shell();
        run(&shell, "tap numbers").unwrap();
        assert_eq!(shell.app().route(), Some(Route::Numbers));

        run(&shell, "type number1 1").unwrap();
        run(&shell, "type number2 2").unwrap();
        run(&shell, "type number3 3").unwrap();
        let out = run(&shell, "type number4 4").unwrap();
        assert_eq!(
            out,
            "== Numbers ==\n  number1: \"1\"\n  number2: \"2\"\n  number3: \"3\"\n  number4: \"4\"\n  result: 10\n"
        );

        run(&shell, "type number1 0").unwrap();
        assert!(run(&shell, "show").unwrap().ends_with("result: 19\n"));

        run(&shell, "erase number1").unwrap();
        assert!(run(&shell, "show").unwrap().ends_with("result: 10\n"));
    }

    #[test]
    fn back_disposes_the_screen() {
        let shell = shell();
        run(&shell, "tap numbers").unwrap();
        let screen = shell.app().current().expect("numbers screen");
        let field = screen.field("number1").expect("field").clone();
        assert!(field.changes().subscriber_count() > 0);

        run(&shell, "back").unwrap();
        assert_eq!(shell.app().route(), Some(Route::Home));
        assert_eq!(field.changes().subscriber_count(), 0);
        assert_eq!(run(&shell, "back"), Err(ShellError::AtRoot));
    }

    #[test]
    fn validation_session_with_modal_alert() {
        let shell = shell();
        run(&shell, "tap validation").unwrap();

        assert_eq!(
            run(&shell, "type password secret"),
            Err(ShellError::FieldDisabled("password".into()))
        );
        assert_eq!(
            run(&shell, "tap do-something"),
            Err(ShellError::ButtonDisabled("do-something".into()))
        );

        run(&shell, "type username users").unwrap();
        let out = run(&shell, "type password pass1").unwrap();
        assert_eq!(
            out,
            "== Simple validation ==\n  username: \"users\"\n  password: \"pass1\"\n  [do-something] Do something\n"
        );

        let out = run(&shell, "tap do-something").unwrap();
        assert!(out.ends_with("  +-- RxExample --\n  | This is wonderful\n  | (0) Ok\n"));

        // the alert blocks everything but show and dismiss
        assert_eq!(run(&shell, "back"), Err(ShellError::AlertPresented));
        assert_eq!(run(&shell, "dismiss 1"), Err(ShellError::NoSuchAction(1)));
        let out = run(&shell, "dismiss").unwrap();
        assert!(!out.contains("RxExample"));
        assert_eq!(run(&shell, "dismiss"), Err(ShellError::NoAlert));
    }

    #[test]
    fn routes_round_trip() {
        let shell = shell();
        run(&shell, "tap numbers-hosted").unwrap();
        let json = run(&shell, "routes").unwrap();
        assert_eq!(json, r#"["home","numbers-hosted"]"#);

        run(&shell, r#"restore ["home","simple-validation"]"#).unwrap();
        assert_eq!(shell.app().route(), Some(Route::SimpleValidation));
        assert_eq!(
            run(&shell, r#"restore ["nowhere"]"#),
            Err(ShellError::BadBackStack)
        );
        assert_eq!(run(&shell, "quit"), Ok(String::from("<quit>")));
    }

    #[test]
    fn configured_field_count() {
        let config = DemoConfig {
            number_fields: 3,
            ..DemoConfig::default()
        };
        let shell = Shell::new(App::new(config));
        run(&shell, "tap numbers").unwrap();
        assert_eq!(
            run(&shell, "set number4 1"),
            Err(ShellError::NoSuchField("number4".into()))
        );
        assert_eq!(shell.app().current().expect("screen").fields().len(), 3);
    }
}
