use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Matiere};
use crate::components::ajout_modal::AjoutMatiereModal;
use crate::components::matiere_row::MatiereRow;
use crate::components::resultats_panel::ResultatsPanel;
use crate::state::{Formulaire, JetonCalcul, Panneau};

#[component]
pub fn App() -> impl IntoView {
    let (matieres, set_matieres) = signal(Vec::<Matiere>::new());
    let formulaire = RwSignal::new(Formulaire::default());
    let (panneau, set_panneau) = signal(Panneau::default());
    let (modal_ouvert, set_modal_ouvert) = signal(false);
    let (avis_chargement, set_avis_chargement) = signal::<Option<String>>(None);
    let jetons = StoredValue::new(JetonCalcul::default());

    // Fetch the subject list and rebuild the whole form from it. A
    // failure keeps whatever was rendered before; it is logged and shown
    // as a non-blocking notice.
    let charger_matieres = move || {
        spawn_local(async move {
            match api::fetch_matieres().await {
                Ok(liste) => {
                    set_avis_chargement.set(None);
                    formulaire.set(Formulaire::depuis_matieres(&liste));
                    set_matieres.set(liste);
                }
                Err(erreur) => {
                    web_sys::console::error_1(
                        &format!("Chargement des matières impossible: {}", erreur).into(),
                    );
                    set_avis_chargement.set(Some(String::from(
                        "Impossible de charger les matières. Vérifiez que le serveur répond, puis rechargez la page.",
                    )));
                }
            }
        });
    };

    // Initial load on mount.
    let chargement_initial = charger_matieres.clone();
    Effect::new(move |_| {
        chargement_initial();
    });

    let calculer = move |_| {
        let saisies = formulaire.with(|f| f.saisies());
        let mut suite = jetons.get_value();
        let jeton = suite.emettre();
        jetons.set_value(suite);

        spawn_local(async move {
            let resultat = api::calculer(saisies).await;

            // A newer submission owns the panel; drop this response.
            if !jetons.get_value().est_courant(jeton) {
                return;
            }

            match resultat {
                Ok(calcul) => set_panneau.set(Panneau::Resultats(calcul)),
                Err(api::ApiError::Serveur(message)) => set_panneau.set(Panneau::Erreur(message)),
                Err(autre) => set_panneau.set(Panneau::Erreur(format!("Erreur serveur: {autre}"))),
            }
        });
    };

    let reinitialiser = move |_| {
        formulaire.update(|f| f.reinitialiser());
        set_panneau.set(Panneau::Cache);
    };

    let fermer_modal = Callback::new(move |_: ()| set_modal_ouvert.set(false));

    let recharger = charger_matieres.clone();
    let matiere_creee = Callback::new(move |nom: String| {
        recharger();
        set_modal_ouvert.set(false);
        set_panneau.set(Panneau::Succes(format!(
            "La matière \"{nom}\" a été ajoutée avec succès"
        )));
    });

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"Calculateur de Moyenne"</h1>
                <p class="subtitle">"Notes pondérées par coefficient, sur 20"</p>
            </header>

            {move || avis_chargement.get().map(|avis| view! {
                <div class="load-notice">{avis}</div>
            })}

            <section class="matieres-section">
                <div class="section-header">
                    <h2>"Matières"</h2>
                    <button class="btn btn-secondary" on:click=move |_| set_modal_ouvert.set(true)>
                        "+ Ajouter une matière"
                    </button>
                </div>

                <div class="matieres-list">
                    {move || matieres.get().iter().map(|m| view! {
                        <MatiereRow
                            nom=m.nom.clone()
                            coefficient=m.coefficient
                            formulaire=formulaire
                        />
                    }).collect::<Vec<_>>()}
                </div>

                <div class="actions">
                    <button class="btn btn-primary" on:click=calculer>
                        "Calculer la moyenne"
                    </button>
                    <button class="btn btn-secondary" on:click=reinitialiser>
                        "Réinitialiser"
                    </button>
                </div>
            </section>

            <ResultatsPanel panneau=panneau set_panneau=set_panneau />

            <Show when=move || modal_ouvert.get()>
                <AjoutMatiereModal on_fermer=fermer_modal on_creee=matiere_creee />
            </Show>
        </div>
    }
}
