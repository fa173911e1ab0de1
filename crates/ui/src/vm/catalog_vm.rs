use quiz_core::model::{QuizCatalog, QuizChoice, QuizMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeButtonVm {
    pub mode: QuizMode,
    pub label: &'static str,
    pub description: &'static str,
    pub class: &'static str,
}

#[must_use]
pub fn mode_buttons() -> Vec<ModeButtonVm> {
    QuizMode::ALL
        .iter()
        .map(|&mode| match mode {
            QuizMode::Practice => ModeButtonVm {
                mode,
                label: mode.label(),
                description: "See whether you were right after every question.",
                class: "btn-primary",
            },
            QuizMode::Test => ModeButtonVm {
                mode,
                label: mode.label(),
                description: "Answer everything first, then see your score.",
                class: "btn-secondary",
            },
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetButtonVm {
    pub choice: QuizChoice,
    pub label: String,
    pub key: String,
}

/// One button per catalog set, in catalog order.
#[must_use]
pub fn map_set_buttons(catalog: &QuizCatalog) -> Vec<SetButtonVm> {
    catalog
        .sets()
        .iter()
        .enumerate()
        .map(|(index, set)| {
            let choice = QuizChoice::Set(index);
            SetButtonVm {
                choice,
                label: set.label.clone(),
                key: choice.to_string(),
            }
        })
        .collect()
}

#[must_use]
pub fn aggregate_button(catalog: &QuizCatalog) -> SetButtonVm {
    SetButtonVm {
        choice: QuizChoice::Aggregate,
        label: format!("Take {}", catalog.aggregate_label()),
        key: QuizChoice::Aggregate.to_string(),
    }
}
