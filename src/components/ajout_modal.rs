//! Modal dialog for adding a subject.
//!
//! Validation failures and server errors are surfaced with a blocking
//! alert and leave the dialog open; a click on the overlay outside the
//! dialog closes it.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::state::valider_nouvelle_matiere;

fn alerter(message: &str) {
    if let Some(fenetre) = web_sys::window() {
        let _ = fenetre.alert_with_message(message);
    }
}

#[component]
pub fn AjoutMatiereModal(
    /// Close without creating anything. The dialog unmounts, so the
    /// fields are cleared for the next opening.
    on_fermer: Callback<()>,
    /// Called with the created subject's name once the server confirmed.
    on_creee: Callback<String>,
) -> impl IntoView {
    let (nom, set_nom) = signal(String::new());
    let (coefficient, set_coefficient) = signal(String::new());
    let (envoi_en_cours, set_envoi_en_cours) = signal(false);

    // Focus the name field on open.
    let champ_nom = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(champ) = champ_nom.get() {
            let _ = champ.focus();
        }
    });

    let soumettre = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (nom_valide, coeff) = match valider_nouvelle_matiere(&nom.get(), &coefficient.get()) {
            Ok(valide) => valide,
            Err(message) => {
                alerter(&message);
                return;
            }
        };

        set_envoi_en_cours.set(true);
        spawn_local(async move {
            let resultat = api::ajouter_matiere(&nom_valide, coeff).await;
            // Re-enable before `on_creee` closes (and disposes) the dialog.
            set_envoi_en_cours.set(false);
            match resultat {
                Ok(()) => on_creee.run(nom_valide),
                Err(api::ApiError::Serveur(message)) => alerter(&format!("Erreur: {message}")),
                Err(autre) => alerter(&format!("Erreur: {autre}")),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_fermer.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <style>{include_str!("ajout_modal.css")}</style>
                <div class="modal-header">
                    <h3>"Ajouter une matière"</h3>
                    <button class="modal-close" on:click=move |_| on_fermer.run(())>
                        "\u{00d7}"
                    </button>
                </div>
                <form on:submit=soumettre>
                    <div class="form-group">
                        <label for="nom-matiere">"Nom de la matière"</label>
                        <input
                            id="nom-matiere"
                            type="text"
                            class="input"
                            placeholder="Ex: Chimie"
                            node_ref=champ_nom
                            prop:value=move || nom.get()
                            on:input=move |ev| set_nom.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="coeff-matiere">"Coefficient"</label>
                        <input
                            id="coeff-matiere"
                            type="number"
                            class="input"
                            min="0.5"
                            step="0.5"
                            placeholder="Ex: 2"
                            prop:value=move || coefficient.get()
                            on:input=move |ev| set_coefficient.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| on_fermer.run(())
                        >
                            "Annuler"
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || envoi_en_cours.get()
                        >
                            {move || if envoi_en_cours.get() { "Ajout..." } else { "Ajouter" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
