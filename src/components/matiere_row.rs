use leptos::prelude::*;

use crate::state::{note_valide, Formulaire};

/// One input row of the grade form: selection checkbox, name and
/// coefficient, grade input. The input bounds are advisory; whatever text
/// the field holds is what gets submitted.
#[component]
pub fn MatiereRow(
    nom: String,
    coefficient: f64,
    formulaire: RwSignal<Formulaire>,
) -> impl IntoView {
    let nom_note = nom.clone();
    let note = Signal::derive(move || formulaire.with(|f| f.note_de(&nom_note)));
    let nom_coche = nom.clone();
    let selectionnee = Signal::derive(move || formulaire.with(|f| f.selection_de(&nom_coche)));

    let nom_saisie = nom.clone();
    let sur_note = move |ev: leptos::ev::Event| {
        formulaire.update(|f| f.saisir_note(&nom_saisie, event_target_value(&ev)));
    };
    let nom_selection = nom.clone();
    let sur_selection = move |ev: leptos::ev::Event| {
        formulaire.update(|f| f.basculer_selection(&nom_selection, event_target_checked(&ev)));
    };

    view! {
        <div class="matiere-item">
            <input
                type="checkbox"
                class="matiere-check"
                prop:checked=move || selectionnee.get()
                on:change=sur_selection
            />
            <div class="matiere-info">
                <div class="matiere-nom">{nom.clone()}</div>
                <div class="matiere-coeff">{format!("Coefficient: {}", coefficient)}</div>
            </div>
            <input
                type="number"
                class="matiere-input"
                class:note-invalide=move || !note_valide(&note.get())
                min="0"
                max="20"
                step="0.5"
                placeholder="0"
                prop:value=move || note.get()
                on:input=sur_note
            />
            <span class="matiere-bareme">"/20"</span>
        </div>
    }
}
