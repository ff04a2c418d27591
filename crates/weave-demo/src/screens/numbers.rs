use weave_core::{Scope, Signal, combine_latest_all};
use weave_widgets::{Label, TextField};

use crate::rules::sum_text;
use crate::screens::Screen;

/// N number fields summed live into a result label.
pub struct NumbersScreen {
    fields: Vec<(String, TextField)>,
    result: Label,
}

impl NumbersScreen {
    pub fn new(count: usize, scope: &Scope) -> Self {
        let fields: Vec<(String, TextField)> = (1..=count)
            .map(|i| (format!("number{i}"), TextField::new("0")))
            .collect();
        let result = Label::new("");

        let inputs: Vec<Signal<String>> = fields.iter().map(|(_, f)| f.changes()).collect();
        // one shared node: the log and the label see the same computed sum
        let sum = combine_latest_all(&inputs, |texts| sum_text(texts));

        sum.subscribe(|value| log::debug!("numbers: sum = {value}"))
            .disposed_by(scope);
        sum.bind({
            let result = result.clone();
            move |value| result.set_text(value.clone())
        })
        .disposed_by(scope);

        Self { fields, result }
    }

    pub fn result(&self) -> &Label {
        &self.result
    }
}

impl Screen for NumbersScreen {
    fn title(&self) -> &str {
        "Numbers"
    }

    fn fields(&self) -> Vec<(&str, &TextField)> {
        self.fields.iter().map(|(n, f)| (n.as_str(), f)).collect()
    }

    fn labels(&self) -> Vec<(&str, &Label)> {
        vec![("result", &self.result)]
    }
}
