use weave_core::{Scope, Signal, combine_latest4, dispose_all, signal};
use weave_widgets::{Label, TextField};

use crate::rules::sum_text;
use crate::screens::Screen;

/// Four number inputs and their sum held as observable state.
///
/// Views write the inputs and render `result_value`; the view model keeps the
/// result current on its own.
pub struct NumbersViewModel {
    pub numbers: [Signal<String>; 4],
    pub result_value: Signal<String>,
}

impl NumbersViewModel {
    pub fn new(scope: &Scope) -> Self {
        let numbers: [Signal<String>; 4] = std::array::from_fn(|_| signal(String::new()));
        let result_value = signal(String::new());

        let [a, b, c, d] = &numbers;
        let result = combine_latest4(a, b, c, d, |a, b, c, d| sum_text(&[a, b, c, d]));
        result
            .bind({
                let result_value = result_value.clone();
                move |v| result_value.set(v.clone())
            })
            .disposed_by(scope);

        Self {
            numbers,
            result_value,
        }
    }
}

/// The numbers demo rendered from a view model instead of direct wiring.
pub struct NumbersHostedScreen {
    pub vm: NumbersViewModel,
    fields: Vec<(String, TextField)>,
    total: Label,
}

impl NumbersHostedScreen {
    pub fn new(scope: &Scope) -> Self {
        let vm = NumbersViewModel::new(&scope.child());
        let fields: Vec<(String, TextField)> = (1..=vm.numbers.len())
            .map(|i| (format!("number{i}"), TextField::new("0")))
            .collect();
        let total = Label::new("");

        let links = fields.iter().zip(vm.numbers.iter()).map(|((_, field), input)| {
            field.changes().subscribe({
                let input = input.clone();
                move |text| input.set(text.clone())
            })
        });
        dispose_all(links).disposed_by(scope);
        vm.result_value
            .bind({
                let total = total.clone();
                move |v| total.set_text(v.clone())
            })
            .disposed_by(scope);

        Self { vm, fields, total }
    }

    pub fn total(&self) -> &Label {
        &self.total
    }
}

impl Screen for NumbersHostedScreen {
    fn title(&self) -> &str {
        "Numbers (view model)"
    }

    fn fields(&self) -> Vec<(&str, &TextField)> {
        self.fields.iter().map(|(n, f)| (n.as_str(), f)).collect()
    }

    fn labels(&self) -> Vec<(&str, &Label)> {
        vec![("sum", &self.total)]
    }
}
