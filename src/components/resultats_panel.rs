use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::Panneau;

/// The results section. It stays mounted and toggles `display`, so reveal
/// and scroll behave the same whether it shows the computed average, an
/// error or the transient success banner.
#[component]
pub fn ResultatsPanel(
    panneau: ReadSignal<Panneau>,
    set_panneau: WriteSignal<Panneau>,
) -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();

    // Reveal side effects, after the DOM has the new content: results and
    // errors scroll into view, the success banner hides itself after 3 s.
    Effect::new(move |_| {
        let etat = panneau.get();

        if etat.defile() {
            if let Some(section) = section_ref.get() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }

        if matches!(etat, Panneau::Succes(_)) {
            let callback = wasm_bindgen::closure::Closure::once(move || {
                set_panneau.set(Panneau::Cache);
            });
            let _ = web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    3000,
                );
            callback.forget();
        }
    });

    view! {
        <section
            class="resultats"
            node_ref=section_ref
            style:display=move || if panneau.get().visible() { "block" } else { "none" }
        >
            <h2>"Résultats"</h2>
            <div class="resultats-content">
                {move || match panneau.get() {
                    Panneau::Cache => ().into_any(),
                    Panneau::Resultats(resultat) => {
                        let badge = format!("background-color: {}; color: white;", resultat.couleur);
                        view! {
                            <div class="resultat-moyenne">
                                <h3>"Votre moyenne pondérée"</h3>
                                <div class="resultat-score">{format!("{}/20", resultat.moyenne)}</div>
                                <div class="resultat-appreciation" style=badge>
                                    {resultat.appreciation.clone()}
                                </div>
                            </div>
                            <h3 class="resultats-sous-titre">"Matières sélectionnées"</h3>
                            {resultat.matieres.iter().map(|m| view! {
                                <div class="resultat-item">
                                    <div class="resultat-nom">{m.nom.clone()}</div>
                                    <div class="resultat-details">
                                        "Note: " <strong>{format!("{:.2}", m.note)}</strong>
                                        " | Coefficient: " <strong>{format!("{}", m.coefficient)}</strong>
                                    </div>
                                </div>
                            }).collect::<Vec<_>>()}
                        }.into_any()
                    }
                    Panneau::Erreur(message) => view! {
                        <div class="error-message">{message}</div>
                    }.into_any(),
                    Panneau::Succes(message) => view! {
                        <div class="success-message">{message}</div>
                    }.into_any(),
                }}
            </div>
        </section>
    }
}
